//! Section envelope: `tag[4] length[4] body[length - 8]`
//!
//! The length covers the envelope itself and is 4-byte aligned. Readers
//! always resume at `start + length` after decoding a body, which is what
//! lets unknown sections and unknown trailing fields be skipped.

use super::stream::{EndianReader, EndianWriter, SeekWrite};
use super::tags::{self, Tag};
use crate::error::{LayoutError, Result};
use std::io::{Read, Seek};

/// Decoded section envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub tag: Tag,
    /// Declared length, envelope included
    pub length: u32,
    /// Absolute offset of the tag
    pub start: u64,
}

impl SectionHeader {
    /// Size of the tag and length fields
    pub const SIZE: u32 = 8;

    /// Read the envelope at the current position
    pub fn read<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<Self> {
        let start = reader.position()?;
        let tag = reader.read_array::<4>()?;
        let length = reader.read_u32()?;
        if length < Self::SIZE {
            return Err(LayoutError::InvalidFormat(format!(
                "section '{}' at {:#X} declares length {}",
                tags::display(&tag),
                start,
                length
            )));
        }
        Ok(SectionHeader { tag, length, start })
    }

    pub fn tag_name(&self) -> String {
        tags::display(&self.tag)
    }

    /// Absolute offset of the first body byte
    pub fn body_start(&self) -> u64 {
        self.start + Self::SIZE as u64
    }

    /// Body size as declared (may include alignment padding)
    pub fn body_len(&self) -> usize {
        (self.length - Self::SIZE) as usize
    }

    /// Absolute offset one past the section
    pub fn end(&self) -> u64 {
        self.start + self.length as u64
    }

    /// Move to the end of the section regardless of how much of the body
    /// was consumed.
    pub fn skip_to_end<R: Read + Seek>(&self, reader: &mut EndianReader<R>) -> Result<()> {
        reader.seek_to(self.end())
    }
}

/// Write one complete section.
///
/// `body` receives the writer and the absolute section start (the anchor of
/// section-relative offsets). The body is padded to 4 bytes and the length
/// field is backpatched with the span actually written, which is returned.
pub fn write_section<W, F>(writer: &mut EndianWriter<W>, tag: &Tag, body: F) -> Result<u32>
where
    W: SeekWrite,
    F: FnOnce(&mut EndianWriter<W>, u64) -> Result<()>,
{
    let start = writer.position()?;
    writer.write_bytes(tag)?;
    let length_slot = writer.reserve_u32()?;
    body(writer, start)?;
    writer.align(4)?;
    let end = writer.position()?;
    let length = u32::try_from(end - start).map_err(|_| {
        LayoutError::InvalidFormat(format!("section '{}' exceeds 4 GiB", tags::display(tag)))
    })?;
    writer.patch_u32(length_slot, length)?;
    tracing::trace!(tag = %tags::display(tag), start, length, "wrote section");
    Ok(length)
}
