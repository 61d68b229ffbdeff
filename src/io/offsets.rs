//! Offset tables: `count` u32 offsets relative to an anchor position
//!
//! Reading dereferences each slot through a scoped seek. Writing reserves the
//! whole table as zeros, emits entries sequentially and backpatches each slot
//! as soon as its entry's position is known.

use super::stream::{EndianReader, EndianWriter, SeekWrite};
use crate::error::{LayoutError, Result};
use std::io::{Read, Seek};

/// Read `count` slots starting at the current position and decode the entry
/// each one points at.
///
/// When `padded` is set every slot is followed by 4 unused bytes. After the
/// call the reader sits just past the last slot.
pub fn read_entries<R, T, F>(
    reader: &mut EndianReader<R>,
    count: usize,
    anchor: u64,
    padded: bool,
    mut decode: F,
) -> Result<Vec<T>>
where
    R: Read + Seek,
    F: FnMut(&mut EndianReader<R>) -> Result<T>,
{
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let offset = reader.read_u32()?;
        if padded {
            reader.skip(4)?;
        }
        let mut at = reader.at(anchor + offset as u64)?;
        entries.push(decode(&mut *at)?);
    }
    Ok(entries)
}

/// A reserved offset table awaiting its entries' positions
#[derive(Debug, Clone, Copy)]
pub struct OffsetTable {
    slots: u64,
    anchor: u64,
    count: usize,
    padded: bool,
}

impl OffsetTable {
    /// Write `count` zeroed slots at the current position
    pub fn reserve<W: SeekWrite>(
        writer: &mut EndianWriter<W>,
        count: usize,
        anchor: u64,
        padded: bool,
    ) -> Result<Self> {
        let slots = writer.position()?;
        let stride = if padded { 8 } else { 4 };
        writer.write_zeros(count * stride)?;
        Ok(OffsetTable {
            slots,
            anchor,
            count,
            padded,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn slot(&self, index: usize) -> Result<u64> {
        if index >= self.count {
            return Err(LayoutError::InvalidFormat(format!(
                "offset slot {index} of {}",
                self.count
            )));
        }
        let stride = if self.padded { 8 } else { 4 };
        Ok(self.slots + (index as u64) * stride)
    }

    /// Point slot `index` at `target`
    pub fn patch<W: SeekWrite>(
        &self,
        writer: &mut EndianWriter<W>,
        index: usize,
        target: u64,
    ) -> Result<()> {
        let relative = target
            .checked_sub(self.anchor)
            .and_then(|d| u32::try_from(d).ok())
            .ok_or_else(|| {
                LayoutError::InvalidFormat(format!(
                    "offset {target:#X} not representable from anchor {:#X}",
                    self.anchor
                ))
            })?;
        let slot = self.slot(index)?;
        writer.patch_u32(slot, relative)
    }

    /// Point slot `index` at the writer's current position
    pub fn patch_here<W: SeekWrite>(&self, writer: &mut EndianWriter<W>, index: usize) -> Result<()> {
        let here = writer.position()?;
        self.patch(writer, index, here)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ByteOrder;
    use std::io::Cursor;

    #[test]
    fn test_reserve_then_patch() {
        let mut w = EndianWriter::new(Cursor::new(Vec::new()), ByteOrder::Big);
        let table = OffsetTable::reserve(&mut w, 2, 0, false).unwrap();
        for (index, value) in [0xAAu8, 0xBB].into_iter().enumerate() {
            table.patch_here(&mut w, index).unwrap();
            w.write_u8(value).unwrap();
        }
        assert_eq!(
            w.into_inner().into_inner(),
            vec![0, 0, 0, 8, 0, 0, 0, 9, 0xAA, 0xBB]
        );
    }

    #[test]
    fn test_padded_slots() {
        let mut w = EndianWriter::new(Cursor::new(Vec::new()), ByteOrder::Little);
        let table = OffsetTable::reserve(&mut w, 1, 0, true).unwrap();
        table.patch_here(&mut w, 0).unwrap();
        assert_eq!(w.into_inner().into_inner(), vec![8, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_patch_out_of_range_slot() {
        let mut w = EndianWriter::new(Cursor::new(Vec::new()), ByteOrder::Big);
        let table = OffsetTable::reserve(&mut w, 1, 0, false).unwrap();
        assert!(table.patch(&mut w, 1, 4).is_err());
    }

    #[test]
    fn test_read_entries_resumes_after_table() {
        // two slots pointing backwards and forwards relative to anchor 8
        let bytes = vec![0, 0, 0, 2, 0, 0, 0, 0, 7, 9, 0xEE];
        let mut r = EndianReader::new(Cursor::new(bytes), ByteOrder::Big);
        let values = read_entries(&mut r, 2, 8, false, |r| r.read_u8()).unwrap();
        assert_eq!(values, vec![0xEE, 7]);
        assert_eq!(r.position().unwrap(), 8);
    }
}
