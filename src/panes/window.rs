//! Window pane payload

use crate::types::{Color8, MaterialId, TexCoord};

/// Stretch margins between the window frame and its content
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowInsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// How a frame texture is mirrored or rotated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TextureFlip {
    #[default]
    None = 0,
    Horizontal = 1,
    Vertical = 2,
    Rotate90 = 3,
    Rotate180 = 4,
    Rotate270 = 5,
}

impl TextureFlip {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TextureFlip::None),
            1 => Some(TextureFlip::Horizontal),
            2 => Some(TextureFlip::Vertical),
            3 => Some(TextureFlip::Rotate90),
            4 => Some(TextureFlip::Rotate180),
            5 => Some(TextureFlip::Rotate270),
            _ => None,
        }
    }
}

/// The window's inner area
#[derive(Debug, Clone, PartialEq)]
pub struct WindowContent {
    pub top_left_color: Color8,
    pub top_right_color: Color8,
    pub bottom_left_color: Color8,
    pub bottom_right_color: Color8,
    pub material: MaterialId,
    pub tex_coords: Vec<TexCoord>,
}

/// One frame element (corner or edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    pub material: MaterialId,
    pub flip: TextureFlip,
}

impl WindowFrame {
    pub fn new(material: MaterialId) -> Self {
        WindowFrame {
            material,
            flip: TextureFlip::None,
        }
    }
}

/// A window built from a content area and up to eight frame elements
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub insets: WindowInsets,
    /// Window kind and frame options, kept as stored
    pub window_flags: u8,
    pub content: WindowContent,
    pub frames: Vec<WindowFrame>,
}

impl Window {
    /// Window with a white content area and no frames
    pub fn new(content_material: MaterialId) -> Self {
        Window {
            insets: WindowInsets::default(),
            window_flags: 0,
            content: WindowContent {
                top_left_color: Color8::WHITE,
                top_right_color: Color8::WHITE,
                bottom_left_color: Color8::WHITE,
                bottom_right_color: Color8::WHITE,
                material: content_material,
                tex_coords: Vec::new(),
            },
            frames: Vec::new(),
        }
    }
}
