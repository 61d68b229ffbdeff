//! Material records and the `mat1` material list

use super::resolver::Resolver;
use crate::error::{LayoutError, Result};
use crate::io::offsets::{read_entries, OffsetTable};
use crate::io::stream::{EndianReader, EndianWriter, SeekWrite};
use crate::materials::*;
use std::io::{Read, Seek};

fn invalid(what: &str, value: u8) -> LayoutError {
    LayoutError::InvalidFormat(format!("invalid {what} value {value}"))
}

// ---------------------------------------------------------------
// Material list (mat1 body)
// ---------------------------------------------------------------

/// Decode the `mat1` body; offsets are relative to `section_start`
pub fn read_material_list<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    section_start: u64,
    resolver: &Resolver<'_>,
) -> Result<Vec<Material>> {
    let count = reader.read_u16()? as usize;
    reader.skip(2)?;
    read_entries(reader, count, section_start, false, |r| read_material(r, resolver))
}

/// Encode the `mat1` body for `materials` in list order
pub fn write_material_list<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    section_start: u64,
    materials: &MaterialList,
    resolver: &Resolver<'_>,
) -> Result<()> {
    let count = u16::try_from(materials.len())
        .map_err(|_| LayoutError::InvalidFormat(format!("{} materials", materials.len())))?;
    writer.write_u16(count)?;
    writer.write_u16(0)?;
    let table = OffsetTable::reserve(writer, materials.len(), section_start, false)?;
    for (index, (_, material)) in materials.iter().enumerate() {
        table.patch_here(writer, index)?;
        write_material(writer, material, resolver)?;
    }
    Ok(())
}

// ---------------------------------------------------------------
// Material record
// ---------------------------------------------------------------

pub fn read_material<R: Read + Seek>(
    reader: &mut EndianReader<R>,
    resolver: &Resolver<'_>,
) -> Result<Material> {
    let mut material = Material::new(reader.read_fixed_string(Material::NAME_LEN)?);
    material.black_color = reader.read_color16()?;
    material.white_color = reader.read_color16()?;
    material.color_register3 = reader.read_color16()?;
    for color in material.tev_colors.iter_mut() {
        *color = reader.read_color8()?;
    }
    let flags = MaterialFlags::from_bits(reader.read_u32()?);
    material.flags = flags;

    for _ in 0..flags.texture_map_count() {
        let texture = resolver.texture_name(reader.read_u16()?)?;
        let wrap_s = reader.read_u8()?;
        let wrap_t = reader.read_u8()?;
        material.texture_maps.push(TextureRef {
            texture,
            wrap_s: WrapMode::from_u8(wrap_s).ok_or_else(|| invalid("wrap mode", wrap_s))?,
            wrap_t: WrapMode::from_u8(wrap_t).ok_or_else(|| invalid("wrap mode", wrap_t))?,
        });
    }
    for _ in 0..flags.texture_transform_count() {
        material.texture_transforms.push(read_transform(reader)?);
    }
    for _ in 0..flags.tex_coord_gen_count() {
        let [gen_type, source, matrix, reserved] = reader.read_array::<4>()?;
        material.tex_coord_gens.push(TexCoordGen {
            gen_type,
            source,
            matrix,
            reserved,
        });
    }
    if flags.has_channel_control() {
        let [color_source, alpha_source, r0, r1] = reader.read_array::<4>()?;
        material.channel_control = Some(ChannelControl {
            color_source,
            alpha_source,
            reserved: [r0, r1],
        });
    }
    if flags.has_material_color() {
        material.material_color = Some(reader.read_color8()?);
    }
    if flags.has_swap_table() {
        let bytes = reader.read_array::<4>()?;
        material.swap_table = Some(TevSwapModeTable {
            modes: bytes.map(SwapMode::from_byte),
        });
    }
    for _ in 0..flags.indirect_transform_count() {
        material.indirect_transforms.push(read_transform(reader)?);
    }
    for _ in 0..flags.indirect_stage_count() {
        let [tex_coord, tex_map, scale_s, scale_t] = reader.read_array::<4>()?;
        material.indirect_stages.push(IndirectStage {
            tex_coord,
            tex_map,
            scale_s,
            scale_t,
        });
    }
    for _ in 0..flags.tev_stage_count() {
        material.tev_stages.push(TevStage {
            tex_coord: reader.read_u8()?,
            color_channel: reader.read_u8()?,
            tex_map: reader.read_u16()?,
            config: reader.read_array::<12>()?,
        });
    }
    if flags.has_alpha_compare() {
        let [comparators, op, ref0, ref1] = reader.read_array::<4>()?;
        let comp0 = comparators & 0x0F;
        let comp1 = comparators >> 4;
        material.alpha_compare = Some(AlphaCompare {
            comp0: AlphaFunction::from_u8(comp0).ok_or_else(|| invalid("alpha function", comp0))?,
            comp1: AlphaFunction::from_u8(comp1).ok_or_else(|| invalid("alpha function", comp1))?,
            op: AlphaOp::from_u8(op).ok_or_else(|| invalid("alpha op", op))?,
            ref0,
            ref1,
        });
    }
    if flags.has_blend_mode() {
        let [op, source, destination, logic_op] = reader.read_array::<4>()?;
        material.blend_mode = Some(BlendMode {
            op: BlendOp::from_u8(op).ok_or_else(|| invalid("blend op", op))?,
            source: BlendFactor::from_u8(source).ok_or_else(|| invalid("blend factor", source))?,
            destination: BlendFactor::from_u8(destination)
                .ok_or_else(|| invalid("blend factor", destination))?,
            logic_op,
        });
    }

    Ok(material)
}

pub fn write_material<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    material: &Material,
    resolver: &Resolver<'_>,
) -> Result<()> {
    let flags = material.packed_flags().map_err(|what| {
        LayoutError::InvalidFormat(format!("material '{}' has too many {what}", material.name))
    })?;

    writer.write_fixed_string(&material.name, Material::NAME_LEN)?;
    writer.write_color16(material.black_color)?;
    writer.write_color16(material.white_color)?;
    writer.write_color16(material.color_register3)?;
    for color in material.tev_colors {
        writer.write_color8(color)?;
    }
    writer.write_u32(flags.bits())?;

    for map in &material.texture_maps {
        writer.write_u16(resolver.texture_index(&map.texture)?)?;
        writer.write_u8(map.wrap_s as u8)?;
        writer.write_u8(map.wrap_t as u8)?;
    }
    for transform in &material.texture_transforms {
        write_transform(writer, transform)?;
    }
    for gen in &material.tex_coord_gens {
        writer.write_bytes(&[gen.gen_type, gen.source, gen.matrix, gen.reserved])?;
    }
    if let Some(cc) = &material.channel_control {
        writer.write_bytes(&[cc.color_source, cc.alpha_source, cc.reserved[0], cc.reserved[1]])?;
    }
    if let Some(color) = material.material_color {
        writer.write_color8(color)?;
    }
    if let Some(table) = &material.swap_table {
        writer.write_bytes(&table.modes.map(SwapMode::to_byte))?;
    }
    for transform in &material.indirect_transforms {
        write_transform(writer, transform)?;
    }
    for stage in &material.indirect_stages {
        writer.write_bytes(&[stage.tex_coord, stage.tex_map, stage.scale_s, stage.scale_t])?;
    }
    for stage in &material.tev_stages {
        writer.write_u8(stage.tex_coord)?;
        writer.write_u8(stage.color_channel)?;
        writer.write_u16(stage.tex_map)?;
        writer.write_bytes(&stage.config)?;
    }
    if let Some(ac) = &material.alpha_compare {
        writer.write_bytes(&[ac.comparators_byte(), ac.op as u8, ac.ref0, ac.ref1])?;
    }
    if let Some(blend) = &material.blend_mode {
        writer.write_bytes(&[
            blend.op as u8,
            blend.source as u8,
            blend.destination as u8,
            blend.logic_op,
        ])?;
    }
    Ok(())
}

fn read_transform<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<TextureTransform> {
    Ok(TextureTransform {
        translate: reader.read_vector2()?,
        rotate: reader.read_f32()?,
        scale: reader.read_vector2()?,
    })
}

fn write_transform<W: SeekWrite>(writer: &mut EndianWriter<W>, t: &TextureTransform) -> Result<()> {
    writer.write_vector2(t.translate)?;
    writer.write_f32(t.rotate)?;
    writer.write_vector2(t.scale)
}

/// Size in bytes of the fixed part of a material record
pub const MATERIAL_HEADER_SIZE: usize = Material::NAME_LEN + 3 * 8 + 4 * 4 + 4;
