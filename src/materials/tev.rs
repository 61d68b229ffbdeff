//! Texture environment (TEV) and related fixed-function configuration.
//!
//! These records are carried byte-for-byte; only the fields needed to name
//! them are broken out.

/// One TEV combiner stage (16 bytes on disk)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TevStage {
    pub tex_coord: u8,
    pub color_channel: u8,
    /// Texture map index and flag bits
    pub tex_map: u16,
    /// Combiner inputs, operations and indirect settings
    pub config: [u8; 12],
}

/// Source channel selected by a swap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
}

impl SwapChannel {
    /// Decode the low two bits of `value`
    pub fn from_bits(value: u8) -> Self {
        match value & 0b11 {
            0 => SwapChannel::Red,
            1 => SwapChannel::Green,
            2 => SwapChannel::Blue,
            _ => SwapChannel::Alpha,
        }
    }
}

/// Channel routing of one swap-table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapMode {
    pub red: SwapChannel,
    pub green: SwapChannel,
    pub blue: SwapChannel,
    pub alpha: SwapChannel,
}

impl SwapMode {
    pub const IDENTITY: SwapMode = SwapMode {
        red: SwapChannel::Red,
        green: SwapChannel::Green,
        blue: SwapChannel::Blue,
        alpha: SwapChannel::Alpha,
    };

    /// Unpack from `r | g << 2 | b << 4 | a << 6`
    pub fn from_byte(byte: u8) -> Self {
        SwapMode {
            red: SwapChannel::from_bits(byte),
            green: SwapChannel::from_bits(byte >> 2),
            blue: SwapChannel::from_bits(byte >> 4),
            alpha: SwapChannel::from_bits(byte >> 6),
        }
    }

    pub fn to_byte(self) -> u8 {
        (self.red as u8) | (self.green as u8) << 2 | (self.blue as u8) << 4 | (self.alpha as u8) << 6
    }
}

impl Default for SwapMode {
    fn default() -> Self {
        SwapMode::IDENTITY
    }
}

/// The four swap-table rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TevSwapModeTable {
    pub modes: [SwapMode; 4],
}

/// Lighting channel sources for color and alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelControl {
    pub color_source: u8,
    pub alpha_source: u8,
    pub reserved: [u8; 2],
}

/// Indirect texturing stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndirectStage {
    pub tex_coord: u8,
    pub tex_map: u8,
    pub scale_s: u8,
    pub scale_t: u8,
}
