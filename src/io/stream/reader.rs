//! Byte-order aware primitive reader

use super::codepage;
use super::scoped::{Reposition, Scoped};
use crate::error::{LayoutError, Result};
use crate::types::{ByteOrder, Color16, Color8, TexCoord, Vector2, Vector3};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{self, Read, Seek, SeekFrom};

macro_rules! read_ordered {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $method:ident, $size:expr) => {
        $(#[$doc])*
        pub fn $name(&mut self) -> Result<$ty> {
            let value = match self.order {
                ByteOrder::Big => self.inner.$method::<BigEndian>(),
                ByteOrder::Little => self.inner.$method::<LittleEndian>(),
            };
            self.check(value, $size)
        }
    };
}

/// Reads fixed-width fields from a seekable stream in a selected byte order.
///
/// Every short read is reported as [`LayoutError::Truncated`] carrying the
/// offset where the stream ran out.
pub struct EndianReader<R> {
    inner: R,
    order: ByteOrder,
}

impl<R: Read + Seek> EndianReader<R> {
    /// Wrap a stream
    pub fn new(inner: R, order: ByteOrder) -> Self {
        Self { inner, order }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Switch the byte order (after reading a byte-order marker)
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
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

    /// Skip `count` bytes forward
    pub fn skip(&mut self, count: u64) -> Result<()> {
        let delta = i64::try_from(count)
            .map_err(|_| LayoutError::InvalidFormat(format!("skip of {count} bytes")))?;
        self.inner.seek(SeekFrom::Current(delta))?;
        Ok(())
    }

    /// Scoped seek to `target`; the position is restored when the guard drops
    pub fn at(&mut self, target: u64) -> Result<Scoped<'_, Self>> {
        Scoped::new(self, target)
    }

    fn check<T>(&mut self, result: io::Result<T>, wanted: usize) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                let offset = self.inner.stream_position().unwrap_or(0);
                Err(LayoutError::Truncated { offset, wanted })
            }
            Err(err) => Err(err.into()),
        }
    }

    // ---------------------------------------------------------------
    // Numbers
    // ---------------------------------------------------------------

    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.inner.read_u8();
        self.check(value, 1)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        let value = self.inner.read_i8();
        self.check(value, 1)
    }

    read_ordered!(read_u16, u16, read_u16, 2);
    read_ordered!(read_i16, i16, read_i16, 2);
    read_ordered!(read_u32, u32, read_u32, 4);
    read_ordered!(read_i32, i32, read_i32, 4);
    read_ordered!(
        /// IEEE-754 single precision
        read_f32, f32, read_f32, 4
    );

    /// Read a single byte as a boolean (any non-zero value is `true`)
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    // ---------------------------------------------------------------
    // Raw bytes
    // ---------------------------------------------------------------

    /// Read exactly `count` bytes.
    ///
    /// The buffer grows with the data actually present, so a declared
    /// length far beyond the end of the stream fails with `Truncated`
    /// without reserving that much memory first.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.inner.by_ref().take(count as u64).read_to_end(&mut buf)?;
        if buf.len() < count {
            let offset = self.inner.stream_position()?;
            return Err(LayoutError::Truncated {
                offset,
                wanted: count,
            });
        }
        Ok(buf)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        let result = self.inner.read_exact(&mut buf);
        self.check(result, N)?;
        Ok(buf)
    }

    // ---------------------------------------------------------------
    // Strings
    // ---------------------------------------------------------------

    /// Read a string stored in a zero-padded slot of `width` bytes.
    ///
    /// Only trailing NUL bytes are removed, so a name that fills the whole
    /// slot comes back unchanged.
    pub fn read_fixed_string(&mut self, width: usize) -> Result<String> {
        let mut bytes = self.read_bytes(width)?;
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        Ok(codepage::decode(&bytes))
    }

    /// Read an 8-bit string up to a NUL byte or the end of the stream
    pub fn read_cstring(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            match self.inner.read_u8() {
                Ok(0) => break,
                Ok(b) => bytes.push(b),
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err.into()),
            }
        }
        Ok(codepage::decode(&bytes))
    }

    /// Read UTF-16 code units up to a zero unit or the end of the stream
    pub fn read_utf16_cstring(&mut self) -> Result<String> {
        let mut units = Vec::new();
        loop {
            let unit = match self.order {
                ByteOrder::Big => self.inner.read_u16::<BigEndian>(),
                ByteOrder::Little => self.inner.read_u16::<LittleEndian>(),
            };
            match unit {
                Ok(0) => break,
                Ok(u) => units.push(u),
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(err) => return Err(err.into()),
            }
        }
        String::from_utf16(&units).map_err(|e| LayoutError::Encoding(format!("text: {e}")))
    }

    // ---------------------------------------------------------------
    // Compound values
    // ---------------------------------------------------------------

    pub fn read_color8(&mut self) -> Result<Color8> {
        Ok(Color8::from_array(self.read_array::<4>()?))
    }

    pub fn read_color16(&mut self) -> Result<Color16> {
        Ok(Color16::new(
            self.read_u16()?,
            self.read_u16()?,
            self.read_u16()?,
            self.read_u16()?,
        ))
    }

    pub fn read_vector2(&mut self) -> Result<Vector2> {
        Ok(Vector2::new(self.read_f32()?, self.read_f32()?))
    }

    pub fn read_vector3(&mut self) -> Result<Vector3> {
        Ok(Vector3::new(self.read_f32()?, self.read_f32()?, self.read_f32()?))
    }

    pub fn read_tex_coord(&mut self) -> Result<TexCoord> {
        Ok(TexCoord {
            top_left: self.read_vector2()?,
            top_right: self.read_vector2()?,
            bottom_left: self.read_vector2()?,
            bottom_right: self.read_vector2()?,
        })
    }
}

impl<R: Read + Seek> Reposition for EndianReader<R> {
    fn position(&mut self) -> Result<u64> {
        EndianReader::position(self)
    }

    fn seek_to(&mut self, pos: u64) -> Result<()> {
        EndianReader::seek_to(self, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(bytes: &[u8], order: ByteOrder) -> EndianReader<Cursor<Vec<u8>>> {
        EndianReader::new(Cursor::new(bytes.to_vec()), order)
    }

    #[test]
    fn test_numbers_follow_byte_order() {
        let bytes = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(reader(&bytes, ByteOrder::Big).read_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader(&bytes, ByteOrder::Little).read_u32().unwrap(), 0x7856_3412);
        assert_eq!(reader(&bytes, ByteOrder::Big).read_u16().unwrap(), 0x1234);
    }

    #[test]
    fn test_float() {
        let bytes = 1.5f32.to_be_bytes();
        assert_eq!(reader(&bytes, ByteOrder::Big).read_f32().unwrap(), 1.5);
    }

    #[test]
    fn test_truncated_reports_offset() {
        let mut r = reader(&[1, 2, 3], ByteOrder::Big);
        r.read_u8().unwrap();
        match r.read_u32() {
            Err(LayoutError::Truncated { wanted, .. }) => assert_eq!(wanted, 4),
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_fixed_string_strips_trailing_nuls() {
        let mut r = reader(b"pic\0\0\0\0\0", ByteOrder::Big);
        assert_eq!(r.read_fixed_string(8).unwrap(), "pic");
        assert_eq!(r.position().unwrap(), 8);
    }

    #[test]
    fn test_fixed_string_full_width() {
        let mut r = reader(b"ABCDEFGHIJKLMNOP", ByteOrder::Big);
        assert_eq!(r.read_fixed_string(16).unwrap(), "ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn test_fixed_string_keeps_non_utf8_bytes() {
        let mut r = reader(b"bg\xE9\0\x81\x40\0\0", ByteOrder::Big);
        assert_eq!(r.read_fixed_string(4).unwrap(), "bg\u{E9}");
        assert_eq!(r.read_fixed_string(4).unwrap(), "\u{81}@");
    }

    #[test]
    fn test_oversized_read_is_truncated() {
        let mut r = reader(&[1, 2, 3, 4], ByteOrder::Big);
        r.read_u8().unwrap();
        match r.read_bytes(0xFFFF_FFF0) {
            Err(LayoutError::Truncated { offset, wanted }) => {
                assert_eq!(offset, 4);
                assert_eq!(wanted, 0xFFFF_FFF0);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_cstring_stops_at_nul_or_end() {
        let mut r = reader(b"tex_a\0tex_b", ByteOrder::Big);
        assert_eq!(r.read_cstring().unwrap(), "tex_a");
        assert_eq!(r.read_cstring().unwrap(), "tex_b");
    }

    #[test]
    fn test_utf16_cstring_both_orders() {
        let mut r = reader(&[0x00, 0x48, 0x00, 0x69, 0x00, 0x00], ByteOrder::Big);
        assert_eq!(r.read_utf16_cstring().unwrap(), "Hi");

        let mut r = reader(&[0x48, 0x00, 0x69, 0x00, 0x00, 0x00], ByteOrder::Little);
        assert_eq!(r.read_utf16_cstring().unwrap(), "Hi");
    }

    #[test]
    fn test_utf16_empty() {
        let mut r = reader(&[0x00, 0x00, 0xAA], ByteOrder::Big);
        assert_eq!(r.read_utf16_cstring().unwrap(), "");
        assert_eq!(r.position().unwrap(), 2);
    }

    #[test]
    fn test_colors() {
        let mut r = reader(&[1, 2, 3, 4, 0, 5, 0, 6, 0, 7, 0, 8], ByteOrder::Big);
        assert_eq!(r.read_color8().unwrap(), Color8::new(1, 2, 3, 4));
        assert_eq!(r.read_color16().unwrap(), Color16::new(5, 6, 7, 8));
    }
}
