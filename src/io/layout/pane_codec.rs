//! Pane, group and layout-info section bodies

use super::resolver::Resolver;
use crate::document::LayoutInfo;
use crate::error::{LayoutError, Result};
use crate::groups::Group;
use crate::io::offsets::{read_entries, OffsetTable};
use crate::io::section::SectionHeader;
use crate::io::stream::{EndianReader, EndianWriter, SeekWrite};
use crate::io::tags::{self, Tag};
use crate::panes::*;
use crate::types::TexCoord;
use std::io::{Read, Seek};

/// Size of the header shared by every pane section body
pub const PANE_HEADER_SIZE: u64 = 4 + 16 + 8 + 12 + 12 + 8 + 8;

/// Section tag a pane is written under
pub fn pane_tag(kind: &PaneKind) -> Tag {
    match kind {
        PaneKind::Null => tags::PANE,
        PaneKind::Picture(_) => tags::PICTURE,
        PaneKind::Text(_) => tags::TEXT_BOX,
        PaneKind::Window(_) => tags::WINDOW,
        PaneKind::Bound => tags::BOUNDING,
    }
}

/// Whether `tag` introduces a pane
pub fn is_pane_tag(tag: &Tag) -> bool {
    [
        tags::PANE,
        tags::PICTURE,
        tags::TEXT_BOX,
        tags::WINDOW,
        tags::BOUNDING,
    ]
    .contains(tag)
}

// ---------------------------------------------------------------
// lyt1
// ---------------------------------------------------------------

pub fn read_layout_info<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<LayoutInfo> {
    let draw_from_center = reader.read_bool()?;
    reader.skip(3)?;
    Ok(LayoutInfo {
        draw_from_center,
        width: reader.read_f32()?,
        height: reader.read_f32()?,
    })
}

pub fn write_layout_info<W: SeekWrite>(writer: &mut EndianWriter<W>, info: &LayoutInfo) -> Result<()> {
    writer.write_bool(info.draw_from_center)?;
    writer.write_zeros(3)?;
    writer.write_f32(info.width)?;
    writer.write_f32(info.height)
}

// ---------------------------------------------------------------
// Panes
// ---------------------------------------------------------------

/// Decode the pane whose envelope is `section`; the reader sits at the body
pub fn read_pane<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    section: &SectionHeader,
    resolver: &Resolver<'_>,
) -> Result<Pane> {
    let mut pane = read_pane_header(reader)?;
    pane.kind = match section.tag {
        tags::PANE => PaneKind::Null,
        tags::BOUNDING => PaneKind::Bound,
        tags::PICTURE => PaneKind::Picture(read_picture(reader, resolver)?),
        tags::TEXT_BOX => PaneKind::Text(read_text_box(reader, section.start, resolver)?),
        tags::WINDOW => PaneKind::Window(read_window(reader, section.start, resolver)?),
        other => {
            return Err(LayoutError::InvalidFormat(format!(
                "'{}' is not a pane section",
                tags::display(&other)
            )))
        }
    };
    Ok(pane)
}

/// Encode a pane body; the envelope is written by the caller
pub fn write_pane<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    section_start: u64,
    pane: &Pane,
    resolver: &Resolver<'_>,
) -> Result<()> {
    write_pane_header(writer, pane)?;
    match &pane.kind {
        PaneKind::Null | PaneKind::Bound => Ok(()),
        PaneKind::Picture(picture) => write_picture(writer, picture, resolver),
        PaneKind::Text(text) => write_text_box(writer, section_start, text, resolver),
        PaneKind::Window(window) => write_window(writer, section_start, window, resolver),
    }
}

fn read_pane_header<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<Pane> {
    let flags = PaneFlags::from_bits_retain(reader.read_u8()?);
    let origin_byte = reader.read_u8()?;
    let origin = Origin::from_byte(origin_byte).ok_or_else(|| {
        LayoutError::InvalidFormat(format!("pane origin byte {origin_byte} out of range"))
    })?;
    let alpha = reader.read_u8()?;
    let mag_flags = reader.read_u8()?;
    let name = reader.read_fixed_string(Pane::NAME_LEN)?;
    let user_info = reader.read_fixed_string(Pane::USER_INFO_LEN)?;

    let mut pane = Pane::null(name);
    pane.flags = flags;
    pane.origin = origin;
    pane.alpha = alpha;
    pane.mag_flags = mag_flags;
    pane.user_info = user_info;
    pane.translate = reader.read_vector3()?;
    pane.rotate = reader.read_vector3()?;
    pane.scale = reader.read_vector2()?;
    pane.width = reader.read_f32()?;
    pane.height = reader.read_f32()?;
    Ok(pane)
}

fn write_pane_header<W: SeekWrite>(writer: &mut EndianWriter<W>, pane: &Pane) -> Result<()> {
    writer.write_u8(pane.flags.bits())?;
    writer.write_u8(pane.origin.to_byte())?;
    writer.write_u8(pane.alpha)?;
    writer.write_u8(pane.mag_flags)?;
    writer.write_fixed_string(&pane.name, Pane::NAME_LEN)?;
    writer.write_fixed_string(&pane.user_info, Pane::USER_INFO_LEN)?;
    writer.write_vector3(pane.translate)?;
    writer.write_vector3(pane.rotate)?;
    writer.write_vector2(pane.scale)?;
    writer.write_f32(pane.width)?;
    writer.write_f32(pane.height)
}

fn read_tex_coords<R: Read + Seek>(reader: &mut EndianReader<R>, count: u8) -> Result<Vec<TexCoord>> {
    (0..count).map(|_| reader.read_tex_coord()).collect()
}

fn write_tex_coords<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    material: u16,
    tex_coords: &[TexCoord],
) -> Result<()> {
    let count = u8::try_from(tex_coords.len()).map_err(|_| {
        LayoutError::InvalidFormat(format!("{} texture coordinate sets", tex_coords.len()))
    })?;
    writer.write_u16(material)?;
    writer.write_u8(count)?;
    writer.write_u8(0)?;
    for uv in tex_coords {
        writer.write_tex_coord(uv)?;
    }
    Ok(())
}

// pic1

fn read_picture<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    resolver: &Resolver<'_>,
) -> Result<Picture> {
    let colors = [
        reader.read_color8()?,
        reader.read_color8()?,
        reader.read_color8()?,
        reader.read_color8()?,
    ];
    let material = resolver.material_id(reader.read_u16()?)?;
    let uv_count = reader.read_u8()?;
    reader.skip(1)?;

    let mut picture = Picture::new(material);
    picture.set_vertex_colors(colors);
    picture.tex_coords = read_tex_coords(reader, uv_count)?;
    Ok(picture)
}

fn write_picture<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    picture: &Picture,
    resolver: &Resolver<'_>,
) -> Result<()> {
    for color in picture.vertex_colors() {
        writer.write_color8(color)?;
    }
    let material = resolver.material_index(picture.material)?;
    write_tex_coords(writer, material, &picture.tex_coords)
}

// txt1

fn read_text_box<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    section_start: u64,
    resolver: &Resolver<'_>,
) -> Result<TextBox> {
    let text_len = reader.read_u16()?;
    let max_text_len = reader.read_u16()?;
    let material = resolver.material_id(reader.read_u16()?)?;
    let font = resolver.font_name(reader.read_u16()?)?;
    let origin_byte = reader.read_u8()?;
    let text_origin = Origin::from_byte(origin_byte).ok_or_else(|| {
        LayoutError::InvalidFormat(format!("text origin byte {origin_byte} out of range"))
    })?;
    let align = reader.read_u8()?;
    let line_align = LineAlign::from_u8(align)
        .ok_or_else(|| LayoutError::InvalidFormat(format!("line alignment {align}")))?;
    reader.skip(2)?;
    let text_offset = reader.read_u32()?;

    let mut text_box = TextBox::new(material, font, "");
    text_box.max_text_len = max_text_len;
    text_box.text_origin = text_origin;
    text_box.line_align = line_align;
    text_box.top_color = reader.read_color8()?;
    text_box.bottom_color = reader.read_color8()?;
    text_box.font_size = reader.read_vector2()?;
    text_box.char_space = reader.read_f32()?;
    text_box.line_space = reader.read_f32()?;

    if text_len > 0 {
        let mut at = reader.at(section_start + text_offset as u64)?;
        text_box.text = at.read_utf16_cstring()?;
    }
    Ok(text_box)
}

fn write_text_box<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    section_start: u64,
    text_box: &TextBox,
    resolver: &Resolver<'_>,
) -> Result<()> {
    let text_len = TextBox::encoded_len(&text_box.text);
    writer.write_u16(text_len)?;
    writer.write_u16(text_box.max_text_len.max(text_len))?;
    writer.write_u16(resolver.material_index(text_box.material)?)?;
    writer.write_u16(resolver.font_index(&text_box.font)?)?;
    writer.write_u8(text_box.text_origin.to_byte())?;
    writer.write_u8(text_box.line_align as u8)?;
    writer.write_u16(0)?;
    let text_offset = writer.reserve_u32()?;
    writer.write_color8(text_box.top_color)?;
    writer.write_color8(text_box.bottom_color)?;
    writer.write_vector2(text_box.font_size)?;
    writer.write_f32(text_box.char_space)?;
    writer.write_f32(text_box.line_space)?;

    let here = writer.position()?;
    writer.patch_u32(text_offset, section_relative(section_start, here)?)?;
    writer.write_utf16_cstring(&text_box.text)?;
    Ok(())
}

// wnd1

fn read_window<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    section_start: u64,
    resolver: &Resolver<'_>,
) -> Result<Window> {
    let insets = WindowInsets {
        left: reader.read_f32()?,
        right: reader.read_f32()?,
        top: reader.read_f32()?,
        bottom: reader.read_f32()?,
    };
    let frame_count = reader.read_u8()? as usize;
    let window_flags = reader.read_u8()?;
    reader.skip(2)?;
    let content_offset = reader.read_u32()?;
    let frame_table_offset = reader.read_u32()?;

    let content = {
        let mut at = reader.at(section_start + content_offset as u64)?;
        let top_left_color = at.read_color8()?;
        let top_right_color = at.read_color8()?;
        let bottom_left_color = at.read_color8()?;
        let bottom_right_color = at.read_color8()?;
        let material = resolver.material_id(at.read_u16()?)?;
        let uv_count = at.read_u8()?;
        at.skip(1)?;
        WindowContent {
            top_left_color,
            top_right_color,
            bottom_left_color,
            bottom_right_color,
            material,
            tex_coords: read_tex_coords(&mut *at, uv_count)?,
        }
    };

    let frames = {
        let mut at = reader.at(section_start + frame_table_offset as u64)?;
        read_entries(&mut *at, frame_count, section_start, false, |r| {
            let material = resolver.material_id(r.read_u16()?)?;
            let flip = r.read_u8()?;
            Ok(WindowFrame {
                material,
                flip: TextureFlip::from_u8(flip)
                    .ok_or_else(|| LayoutError::InvalidFormat(format!("frame flip {flip}")))?,
            })
        })?
    };

    Ok(Window {
        insets,
        window_flags,
        content,
        frames,
    })
}

fn write_window<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    section_start: u64,
    window: &Window,
    resolver: &Resolver<'_>,
) -> Result<()> {
    let frame_count = u8::try_from(window.frames.len())
        .map_err(|_| LayoutError::InvalidFormat(format!("{} window frames", window.frames.len())))?;

    writer.write_f32(window.insets.left)?;
    writer.write_f32(window.insets.right)?;
    writer.write_f32(window.insets.top)?;
    writer.write_f32(window.insets.bottom)?;
    writer.write_u8(frame_count)?;
    writer.write_u8(window.window_flags)?;
    writer.write_u16(0)?;
    let offsets = OffsetTable::reserve(writer, 2, section_start, false)?;

    offsets.patch_here(writer, 0)?;
    let content = &window.content;
    writer.write_color8(content.top_left_color)?;
    writer.write_color8(content.top_right_color)?;
    writer.write_color8(content.bottom_left_color)?;
    writer.write_color8(content.bottom_right_color)?;
    write_tex_coords(
        writer,
        resolver.material_index(content.material)?,
        &content.tex_coords,
    )?;

    offsets.patch_here(writer, 1)?;
    let table = OffsetTable::reserve(writer, window.frames.len(), section_start, false)?;
    for (index, frame) in window.frames.iter().enumerate() {
        table.patch_here(writer, index)?;
        writer.write_u16(resolver.material_index(frame.material)?)?;
        writer.write_u8(frame.flip as u8)?;
        writer.write_u8(0)?;
    }
    Ok(())
}

fn section_relative(section_start: u64, position: u64) -> Result<u32> {
    position
        .checked_sub(section_start)
        .and_then(|d| u32::try_from(d).ok())
        .ok_or_else(|| LayoutError::InvalidFormat(format!("offset {position:#X} outside section")))
}

// ---------------------------------------------------------------
// grp1
// ---------------------------------------------------------------

pub fn read_group<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<Group> {
    let name = reader.read_fixed_string(Group::NAME_LEN)?;
    let count = reader.read_u16()?;
    reader.skip(2)?;
    let panes = (0..count)
        .map(|_| reader.read_fixed_string(Pane::NAME_LEN))
        .collect::<Result<Vec<_>>>()?;
    Ok(Group { name, panes })
}

pub fn write_group<W: SeekWrite>(writer: &mut EndianWriter<W>, group: &Group) -> Result<()> {
    let count = u16::try_from(group.panes.len())
        .map_err(|_| LayoutError::InvalidFormat(format!("group '{}' is too large", group.name)))?;
    writer.write_fixed_string(&group.name, Group::NAME_LEN)?;
    writer.write_u16(count)?;
    writer.write_u16(0)?;
    for pane in &group.panes {
        writer.write_fixed_string(pane, Pane::NAME_LEN)?;
    }
    Ok(())
}
