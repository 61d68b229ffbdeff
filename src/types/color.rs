//! Fixed four-channel colors used by panes and materials

use std::fmt;

/// A color with 8-bit RGBA channels (vertex colors, TEV constant colors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color8 {
    pub const WHITE: Color8 = Color8::new(255, 255, 255, 255);
    pub const BLACK: Color8 = Color8::new(0, 0, 0, 255);
    pub const TRANSPARENT: Color8 = Color8::new(0, 0, 0, 0);

    /// Create a color from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color8 { r, g, b, a }
    }

    /// Channels in on-disk order
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Color8::new(c[0], c[1], c[2], c[3])
    }
}

impl Default for Color8 {
    fn default() -> Self {
        Color8::WHITE
    }
}

impl From<Color16> for Color8 {
    /// Truncating copy of each channel, no rescaling.
    fn from(c: Color16) -> Self {
        Color8::new(c.r as u8, c.g as u8, c.b as u8, c.a as u8)
    }
}

impl fmt::Display for Color8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

/// A color with 16-bit channels (material color registers)
///
/// The registers are signed on the graphics hardware; the codec keeps the
/// raw 16-bit words untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Color16 {
    /// Create a color from its four channels
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Color16 { r, g, b, a }
    }

    pub const fn to_array(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(c: [u16; 4]) -> Self {
        Color16::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color8> for Color16 {
    /// Widening copy of each channel, no rescaling.
    fn from(c: Color8) -> Self {
        Color16::new(c.r as u16, c.g as u16, c.b as u16, c.a as u16)
    }
}

impl fmt::Display for Color16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
