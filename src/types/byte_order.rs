//! Byte order selected by an archive's byte-order marker

use std::fmt;

/// Byte order of every multi-byte field following the header marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Native order of the archive format (marker bytes `FE FF`)
    #[default]
    Big,
    /// Reversed order (any other marker, in practice `FF FE`)
    Little,
}

impl ByteOrder {
    /// The marker value as written in the archive's own order
    pub const MARKER: u16 = 0xFEFF;

    /// Derive the byte order from the two raw marker bytes.
    ///
    /// The marker is interpreted big-endian; `0xFEFF` selects the native
    /// order and any other value selects the reversed one.
    pub fn from_marker(bytes: [u8; 2]) -> Self {
        if u16::from_be_bytes(bytes) == Self::MARKER {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// The two marker bytes that select this order
    pub fn marker_bytes(self) -> [u8; 2] {
        match self {
            ByteOrder::Big => Self::MARKER.to_be_bytes(),
            ByteOrder::Little => Self::MARKER.to_le_bytes(),
        }
    }

    /// Whether fields are byte-swapped relative to the native order
    pub fn is_reversed(self) -> bool {
        self == ByteOrder::Little
    }

    pub fn swapped(self) -> Self {
        match self {
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Big => write!(f, "big-endian"),
            ByteOrder::Little => write!(f, "little-endian"),
        }
    }
}
