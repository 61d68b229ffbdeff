//! Byte-order aware primitive writer with reserve/backpatch support

use super::codepage;
use super::scoped::{Reposition, Scoped};
use crate::error::{LayoutError, Result};
use crate::types::{ByteOrder, Color16, Color8, TexCoord, Vector2, Vector3};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::{Seek, SeekFrom, Write};

/// Combined trait for output streams that can be repositioned.
pub trait SeekWrite: Write + Seek {}
impl<T: Write + Seek> SeekWrite for T {}

macro_rules! write_ordered {
    ($name:ident, $ty:ty, $method:ident) => {
        pub fn $name(&mut self, value: $ty) -> Result<()> {
            match self.order {
                ByteOrder::Big => self.inner.$method::<BigEndian>(value)?,
                ByteOrder::Little => self.inner.$method::<LittleEndian>(value)?,
            }
            Ok(())
        }
    };
}

/// Writes fixed-width fields to a seekable stream in a selected byte order.
///
/// Lengths and offsets that are only known after their target has been
/// written are handled by reserving a zeroed slot ([`reserve_u32`]) and
/// patching it later through a scoped seek ([`patch_u32`]).
///
/// [`reserve_u32`]: EndianWriter::reserve_u32
/// [`patch_u32`]: EndianWriter::patch_u32
pub struct EndianWriter<W> {
    inner: W,
    order: ByteOrder,
    origin: u64,
}

impl<W: SeekWrite> EndianWriter<W> {
    /// Wrap a stream; alignment is measured from absolute position 0
    pub fn new(inner: W, order: ByteOrder) -> Self {
        Self {
            inner,
            order,
            origin: 0,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Measure alignment from `origin` (the start of the archive)
    pub fn set_origin(&mut self, origin: u64) {
        self.origin = origin;
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Current absolute position
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Move to an absolute position
    pub fn seek_to(&mut self, pos: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    /// Scoped seek to `target`; the position is restored when the guard drops
    pub fn at(&mut self, target: u64) -> Result<Scoped<'_, Self>> {
        Scoped::new(self, target)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Numbers
    // ---------------------------------------------------------------

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.inner.write_u8(value)?;
        Ok(())
    }

    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.inner.write_i8(value)?;
        Ok(())
    }

    write_ordered!(write_u16, u16, write_u16);
    write_ordered!(write_i16, i16, write_i16);
    write_ordered!(write_u32, u32, write_u32);
    write_ordered!(write_i32, i32, write_i32);
    write_ordered!(write_f32, f32, write_f32);

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(value as u8)
    }

    // ---------------------------------------------------------------
    // Raw bytes
    // ---------------------------------------------------------------

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    pub fn write_zeros(&mut self, count: usize) -> Result<()> {
        const ZEROS: [u8; 32] = [0; 32];
        let mut left = count;
        while left > 0 {
            let n = left.min(ZEROS.len());
            self.inner.write_all(&ZEROS[..n])?;
            left -= n;
        }
        Ok(())
    }

    /// Pad with zeros until the position is a multiple of `alignment`
    /// measured from the origin.
    pub fn align(&mut self, alignment: u64) -> Result<()> {
        let rel = self.position()?.saturating_sub(self.origin);
        let rem = rel % alignment;
        if rem != 0 {
            self.write_zeros((alignment - rem) as usize)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    // Reserve / backpatch
    // ---------------------------------------------------------------

    /// Write a zero u32 placeholder and return its position
    pub fn reserve_u32(&mut self) -> Result<u64> {
        let pos = self.position()?;
        self.write_u32(0)?;
        Ok(pos)
    }

    /// Write a zero u16 placeholder and return its position
    pub fn reserve_u16(&mut self) -> Result<u64> {
        let pos = self.position()?;
        self.write_u16(0)?;
        Ok(pos)
    }

    /// Overwrite the u32 at `pos`, leaving the cursor where it was
    pub fn patch_u32(&mut self, pos: u64, value: u32) -> Result<()> {
        let mut at = self.at(pos)?;
        at.write_u32(value)
    }

    /// Overwrite the u16 at `pos`, leaving the cursor where it was
    pub fn patch_u16(&mut self, pos: u64, value: u16) -> Result<()> {
        let mut at = self.at(pos)?;
        at.write_u16(value)
    }

    // ---------------------------------------------------------------
    // Strings
    // ---------------------------------------------------------------

    /// Write `s` into a zero-padded slot of exactly `width` bytes.
    ///
    /// A string that fills the slot is written without a terminator; a longer
    /// one is rejected.
    pub fn write_fixed_string(&mut self, s: &str, width: usize) -> Result<()> {
        let bytes = codepage::encode(s)?;
        if bytes.len() > width {
            return Err(LayoutError::InvalidFormat(format!(
                "'{s}' is {} bytes, slot holds {width}",
                bytes.len()
            )));
        }
        self.write_bytes(&bytes)?;
        self.write_zeros(width - bytes.len())
    }

    /// Write an 8-bit string followed by a NUL byte
    pub fn write_cstring(&mut self, s: &str) -> Result<()> {
        self.write_bytes(&codepage::encode(s)?)?;
        self.write_u8(0)
    }

    /// Write UTF-16 code units followed by a zero unit; returns the byte
    /// count including the terminator.
    pub fn write_utf16_cstring(&mut self, s: &str) -> Result<usize> {
        let mut units = 0usize;
        for unit in s.encode_utf16() {
            self.write_u16(unit)?;
            units += 1;
        }
        self.write_u16(0)?;
        Ok((units + 1) * 2)
    }

    // ---------------------------------------------------------------
    // Compound values
    // ---------------------------------------------------------------

    pub fn write_color8(&mut self, color: Color8) -> Result<()> {
        self.write_bytes(&color.to_array())
    }

    pub fn write_color16(&mut self, color: Color16) -> Result<()> {
        for channel in color.to_array() {
            self.write_u16(channel)?;
        }
        Ok(())
    }

    pub fn write_vector2(&mut self, v: Vector2) -> Result<()> {
        self.write_f32(v.x)?;
        self.write_f32(v.y)
    }

    pub fn write_vector3(&mut self, v: Vector3) -> Result<()> {
        self.write_f32(v.x)?;
        self.write_f32(v.y)?;
        self.write_f32(v.z)
    }

    pub fn write_tex_coord(&mut self, uv: &TexCoord) -> Result<()> {
        self.write_vector2(uv.top_left)?;
        self.write_vector2(uv.top_right)?;
        self.write_vector2(uv.bottom_left)?;
        self.write_vector2(uv.bottom_right)
    }
}

impl<W: SeekWrite> Reposition for EndianWriter<W> {
    fn position(&mut self) -> Result<u64> {
        EndianWriter::position(self)
    }

    fn seek_to(&mut self, pos: u64) -> Result<()> {
        EndianWriter::seek_to(self, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn writer(order: ByteOrder) -> EndianWriter<Cursor<Vec<u8>>> {
        EndianWriter::new(Cursor::new(Vec::new()), order)
    }

    fn bytes(w: EndianWriter<Cursor<Vec<u8>>>) -> Vec<u8> {
        w.into_inner().into_inner()
    }

    #[test]
    fn test_numbers_follow_byte_order() {
        let mut w = writer(ByteOrder::Big);
        w.write_u16(0x1234).unwrap();
        w.write_u32(0xAABB_CCDD).unwrap();
        assert_eq!(bytes(w), vec![0x12, 0x34, 0xAA, 0xBB, 0xCC, 0xDD]);

        let mut w = writer(ByteOrder::Little);
        w.write_u16(0x1234).unwrap();
        assert_eq!(bytes(w), vec![0x34, 0x12]);
    }

    #[test]
    fn test_fixed_string_padding() {
        let mut w = writer(ByteOrder::Big);
        w.write_fixed_string("bg", 6).unwrap();
        assert_eq!(bytes(w), b"bg\0\0\0\0".to_vec());
    }

    #[test]
    fn test_fixed_string_full_width_has_no_terminator() {
        let mut w = writer(ByteOrder::Big);
        w.write_fixed_string("ABCDEFGHIJKLMNOP", 16).unwrap();
        assert_eq!(bytes(w), b"ABCDEFGHIJKLMNOP".to_vec());
    }

    #[test]
    fn test_fixed_string_too_long() {
        let mut w = writer(ByteOrder::Big);
        let err = w.write_fixed_string("ABCDEFGHIJKLMNOPQ", 16).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidFormat(_)));
    }

    #[test]
    fn test_utf16_terminator() {
        let mut w = writer(ByteOrder::Big);
        assert_eq!(w.write_utf16_cstring("").unwrap(), 2);
        assert_eq!(w.write_utf16_cstring("A").unwrap(), 4);
        assert_eq!(bytes(w), vec![0, 0, 0, 0x41, 0, 0]);
    }

    #[test]
    fn test_align_relative_to_origin() {
        let mut w = writer(ByteOrder::Big);
        w.write_u8(1).unwrap();
        w.align(4).unwrap();
        assert_eq!(w.position().unwrap(), 4);
        w.align(4).unwrap();
        assert_eq!(w.position().unwrap(), 4);

        w.set_origin(2);
        w.write_u8(1).unwrap();
        w.align(4).unwrap();
        assert_eq!(w.position().unwrap(), 6);
    }

    #[test]
    fn test_reserve_and_patch_keeps_cursor() {
        let mut w = writer(ByteOrder::Big);
        let slot = w.reserve_u32().unwrap();
        w.write_u16(0xBEEF).unwrap();
        w.patch_u32(slot, 6).unwrap();
        assert_eq!(w.position().unwrap(), 6);
        w.write_u8(0xFF).unwrap();
        assert_eq!(bytes(w), vec![0, 0, 0, 6, 0xBE, 0xEF, 0xFF]);
    }
}
