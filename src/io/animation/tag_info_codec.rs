//! `pat1` body: animation name, frame range and bound groups

use crate::animation::AnimationTagInfo;
use crate::error::{LayoutError, Result};
use crate::io::section::SectionHeader;
use crate::io::stream::{EndianReader, EndianWriter, SeekWrite};
use std::io::{Read, Seek};

/// Offset of the first byte after the fixed fields, from the section start
const FIXED_END: u64 = 8 + 17;

/// Decode the `pat1` body of `section`; the reader sits at the body
pub fn read_tag_info<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    section: &SectionHeader,
) -> Result<AnimationTagInfo> {
    let order = reader.read_u16()?;
    let group_count = reader.read_u16()?;
    let name_offset = reader.read_u32()? as u64;
    let groups_offset = reader.read_u32()? as u64;
    let start_frame = reader.read_i16()?;
    let end_frame = reader.read_i16()?;
    let child_binding = reader.read_bool()?;

    let length = section.length as u64;
    for (what, offset) in [("name", name_offset), ("group list", groups_offset)] {
        if offset > length {
            return Err(LayoutError::InvalidFormat(format!(
                "animation {what} offset {offset:#X} past section end {length:#X}"
            )));
        }
    }
    let extra_len = name_offset.checked_sub(FIXED_END).ok_or_else(|| {
        LayoutError::InvalidFormat(format!("animation name offset {name_offset:#X} overlaps header"))
    })?;
    let extra = reader.read_bytes(extra_len as usize)?;

    let section_start = section.start;
    reader.seek_to(section_start + name_offset)?;
    let name = reader.read_cstring()?;

    reader.seek_to(section_start + groups_offset)?;
    let groups = (0..group_count)
        .map(|_| reader.read_fixed_string(AnimationTagInfo::GROUP_NAME_LEN))
        .collect::<Result<Vec<_>>>()?;

    Ok(AnimationTagInfo {
        order,
        name,
        groups,
        start_frame,
        end_frame,
        child_binding,
        extra,
    })
}

pub fn write_tag_info<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    section_start: u64,
    info: &AnimationTagInfo,
) -> Result<()> {
    let group_count = u16::try_from(info.groups.len())
        .map_err(|_| LayoutError::InvalidFormat(format!("{} animation groups", info.groups.len())))?;

    writer.write_u16(info.order)?;
    writer.write_u16(group_count)?;
    let name_offset = writer.reserve_u32()?;
    let groups_offset = writer.reserve_u32()?;
    writer.write_i16(info.start_frame)?;
    writer.write_i16(info.end_frame)?;
    writer.write_bool(info.child_binding)?;
    writer.write_bytes(&info.extra)?;

    let here = writer.position()?;
    writer.patch_u32(name_offset, relative(section_start, here)?)?;
    writer.write_cstring(&info.name)?;
    writer.align(4)?;

    let here = writer.position()?;
    writer.patch_u32(groups_offset, relative(section_start, here)?)?;
    for group in &info.groups {
        writer.write_fixed_string(group, AnimationTagInfo::GROUP_NAME_LEN)?;
    }
    Ok(())
}

fn relative(section_start: u64, position: u64) -> Result<u32> {
    u32::try_from(position - section_start)
        .map_err(|_| LayoutError::InvalidFormat(format!("offset {position:#X} outside section")))
}
