//! Text box payload

use super::Origin;
use crate::types::{Color8, MaterialId, Vector2};

/// Horizontal alignment of lines within the text box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LineAlign {
    #[default]
    Unspecified = 0,
    Left = 1,
    Center = 2,
    Right = 3,
}

impl LineAlign {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LineAlign::Unspecified),
            1 => Some(LineAlign::Left),
            2 => Some(LineAlign::Center),
            3 => Some(LineAlign::Right),
            _ => None,
        }
    }
}

/// A text label drawn with a font from the document's font table
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    /// Capacity of the runtime text buffer in bytes
    pub max_text_len: u16,
    pub material: MaterialId,
    /// Font name as listed in the font table
    pub font: String,
    pub text_origin: Origin,
    pub line_align: LineAlign,
    pub top_color: Color8,
    pub bottom_color: Color8,
    pub font_size: Vector2,
    pub char_space: f32,
    pub line_space: f32,
    pub text: String,
}

impl TextBox {
    pub fn new(material: MaterialId, font: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let max_text_len = TextBox::encoded_len(&text);
        TextBox {
            max_text_len,
            material,
            font: font.into(),
            text_origin: Origin::default(),
            line_align: LineAlign::Unspecified,
            top_color: Color8::WHITE,
            bottom_color: Color8::WHITE,
            font_size: Vector2::new(24.0, 24.0),
            char_space: 0.0,
            line_space: 0.0,
            text,
        }
    }

    /// Stored size of `text` in bytes: UTF-16 units plus the terminator
    pub fn encoded_len(text: &str) -> u16 {
        let units = text.encode_utf16().count() + 1;
        u16::try_from(units * 2).unwrap_or(u16::MAX)
    }
}
