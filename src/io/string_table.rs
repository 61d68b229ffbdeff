//! Name tables (`txl1`, `fnl1`, texture lists inside `pai1`)
//!
//! Layout: `count u16, pad u16`, then `count` offset slots (each followed by
//! 4 unused bytes) relative to the first slot, then the null-terminated
//! names.

use super::offsets::{read_entries, OffsetTable};
use super::stream::{EndianReader, EndianWriter, SeekWrite};
use crate::error::{LayoutError, Result};
use std::io::{Read, Seek};

/// Decode a name table starting at the current position
pub fn read_string_table<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<Vec<String>> {
    let count = reader.read_u16()? as usize;
    reader.skip(2)?;
    let anchor = reader.position()?;
    read_entries(reader, count, anchor, true, |r| r.read_cstring())
}

/// Encode a name table at the current position
pub fn write_string_table<W: SeekWrite>(writer: &mut EndianWriter<W>, names: &[String]) -> Result<()> {
    let count = u16::try_from(names.len())
        .map_err(|_| LayoutError::InvalidFormat(format!("{} names in one table", names.len())))?;
    writer.write_u16(count)?;
    writer.write_u16(0)?;
    let anchor = writer.position()?;
    let table = OffsetTable::reserve(writer, names.len(), anchor, true)?;
    for (index, name) in names.iter().enumerate() {
        table.patch_here(writer, index)?;
        writer.write_cstring(name)?;
    }
    Ok(())
}
