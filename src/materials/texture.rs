//! Texture bindings, texture transforms and coordinate generators

use crate::types::Vector2;

/// Texture addressing outside the [0, 1] range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WrapMode {
    #[default]
    Clamp = 0,
    Repeat = 1,
    Mirror = 2,
}

impl WrapMode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(WrapMode::Clamp),
            1 => Some(WrapMode::Repeat),
            2 => Some(WrapMode::Mirror),
            _ => None,
        }
    }
}

/// A texture bound to a material, referenced by its name in the document's
/// texture table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureRef {
    pub texture: String,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
}

impl TextureRef {
    pub fn new(texture: impl Into<String>) -> Self {
        TextureRef {
            texture: texture.into(),
            wrap_s: WrapMode::Clamp,
            wrap_t: WrapMode::Clamp,
        }
    }
}

/// Scale/rotate/translate applied to texture coordinates (also used for
/// indirect texture matrices)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureTransform {
    pub translate: Vector2,
    /// Degrees
    pub rotate: f32,
    pub scale: Vector2,
}

impl Default for TextureTransform {
    fn default() -> Self {
        TextureTransform {
            translate: Vector2::ZERO,
            rotate: 0.0,
            scale: Vector2::ONE,
        }
    }
}

/// Texture coordinate generator, stored as raw hardware enum values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TexCoordGen {
    pub gen_type: u8,
    pub source: u8,
    pub matrix: u8,
    pub reserved: u8,
}

impl TexCoordGen {
    /// 2x4 matrix transform
    pub const TYPE_MTX2X4: u8 = 1;
    /// First texture coordinate set
    pub const SOURCE_TEX0: u8 = 4;
    pub const MATRIX_IDENTITY: u8 = 60;
}

impl Default for TexCoordGen {
    fn default() -> Self {
        TexCoordGen {
            gen_type: Self::TYPE_MTX2X4,
            source: Self::SOURCE_TEX0,
            matrix: Self::MATRIX_IDENTITY,
            reserved: 0,
        }
    }
}
