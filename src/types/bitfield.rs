//! Sub-word fields packed into a 32-bit flags integer
//!
//! Field positions are counted from the most significant bit, so a field
//! starting at bit 0 with width 4 occupies the top nibble of the word.

/// A bit-field descriptor over a `u32` word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    start: u32,
    width: u32,
}

impl BitField {
    /// Describe a field `width` bits wide starting `start` bits from the MSB
    pub const fn new(start: u32, width: u32) -> Self {
        assert!(width > 0 && start + width <= 32);
        BitField { start, width }
    }

    /// Right shift that brings the field down to bit 0
    #[inline]
    pub const fn shift(&self) -> u32 {
        32 - (self.start + self.width)
    }

    /// Unshifted mask for a value of this width
    #[inline]
    pub const fn value_mask(&self) -> u32 {
        if self.width == 32 {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Largest value the field can hold
    #[inline]
    pub const fn max_value(&self) -> u32 {
        self.value_mask()
    }

    /// Extract the field from `word`
    #[inline]
    pub const fn get(&self, word: u32) -> u32 {
        (word >> self.shift()) & self.value_mask()
    }

    /// Return `word` with the field replaced by `value` (masked to width)
    #[inline]
    pub const fn set(&self, word: u32, value: u32) -> u32 {
        let mask = self.value_mask() << self.shift();
        (word & !mask) | ((value << self.shift()) & mask)
    }

    #[inline]
    pub const fn get_flag(&self, word: u32) -> bool {
        self.get(word) != 0
    }

    #[inline]
    pub const fn set_flag(&self, word: u32, value: bool) -> u32 {
        self.set(word, value as u32)
    }
}
