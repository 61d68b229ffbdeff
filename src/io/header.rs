//! Archive header shared by RLYT and RLAN files
//!
//! `magic[4] bom[2] version[2] file_len[4] header_len[2] sections[2]`

use super::stream::{EndianReader, EndianWriter, SeekWrite};
use super::tags::{self, Tag};
use crate::document::ArchiveHeader;
use crate::error::{LayoutError, Result};
use crate::types::ByteOrder;
use std::io::{Read, Seek};

/// A decoded archive header and where its sections begin
#[derive(Debug, Clone, Copy)]
pub struct HeaderInfo {
    pub header: ArchiveHeader,
    pub section_count: u16,
    /// Absolute offset of the first section
    pub sections_start: u64,
}

/// Read the header at the current position and switch `reader` to the
/// archive's byte order. The reader is left at the first section.
pub fn read_header<R: Read + Seek>(reader: &mut EndianReader<R>, magic: &Tag) -> Result<HeaderInfo> {
    let base = reader.position()?;
    let found = reader.read_array::<4>()?;
    if &found != magic {
        return Err(LayoutError::BadMagic {
            expected: tags::display(magic),
            found: tags::display(&found),
        });
    }

    let byte_order = ByteOrder::from_marker(reader.read_array::<2>()?);
    reader.set_byte_order(byte_order);

    let version = reader.read_u16()?;
    let file_length = reader.read_u32()?;
    let header_length = reader.read_u16()?;
    let section_count = reader.read_u16()?;
    if header_length < ArchiveHeader::SIZE {
        return Err(LayoutError::InvalidFormat(format!(
            "header length {header_length} is shorter than the header"
        )));
    }

    let sections_start = base + header_length as u64;
    reader.seek_to(sections_start)?;

    tracing::debug!(
        magic = %tags::display(magic),
        %byte_order,
        version,
        file_length,
        section_count,
        "read archive header"
    );

    Ok(HeaderInfo {
        header: ArchiveHeader {
            byte_order,
            version,
            file_length,
            header_length,
        },
        section_count,
        sections_start,
    })
}

/// Placeholders left by [`begin_archive`]
#[derive(Debug, Clone, Copy)]
pub struct HeaderSlots {
    base: u64,
    file_length: u64,
    section_count: u64,
}

/// Write the header with zeroed length and count fields.
///
/// The writer's alignment origin is moved to the archive start.
pub fn begin_archive<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    magic: &Tag,
    header: &ArchiveHeader,
) -> Result<HeaderSlots> {
    let base = writer.position()?;
    writer.set_origin(base);
    let marker = writer.byte_order().marker_bytes();
    writer.write_bytes(magic)?;
    writer.write_bytes(&marker)?;
    writer.write_u16(header.version)?;
    let file_length = writer.reserve_u32()?;
    writer.write_u16(ArchiveHeader::SIZE)?;
    let section_count = writer.reserve_u16()?;
    Ok(HeaderSlots {
        base,
        file_length,
        section_count,
    })
}

/// Align the archive end and backpatch the section count and file length.
/// Returns the archive size in bytes.
pub fn finish_archive<W: SeekWrite>(
    writer: &mut EndianWriter<W>,
    slots: HeaderSlots,
    section_count: u16,
) -> Result<u64> {
    writer.patch_u16(slots.section_count, section_count)?;
    writer.align(4)?;
    let size = writer.position()? - slots.base;
    let file_length = u32::try_from(size)
        .map_err(|_| LayoutError::InvalidFormat(format!("archive of {size} bytes is too large")))?;
    writer.patch_u32(slots.file_length, file_length)?;
    tracing::debug!(section_count, size, "finished archive");
    Ok(size)
}

/// Count of sections written so far, checked against the u16 header field
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionCounter(u32);

impl SectionCounter {
    pub fn bump(&mut self) {
        self.0 += 1;
    }

    pub fn get(&self) -> Result<u16> {
        u16::try_from(self.0)
            .map_err(|_| LayoutError::InvalidFormat(format!("{} sections", self.0)))
    }
}
