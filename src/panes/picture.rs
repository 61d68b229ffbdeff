//! Picture pane payload

use crate::types::{Color8, MaterialId, TexCoord};

/// A textured quad
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    pub top_left_color: Color8,
    pub top_right_color: Color8,
    pub bottom_left_color: Color8,
    pub bottom_right_color: Color8,
    pub material: MaterialId,
    /// One quad of texture coordinates per texture map
    pub tex_coords: Vec<TexCoord>,
}

impl Picture {
    /// White picture with a single full-texture UV set
    pub fn new(material: MaterialId) -> Self {
        Picture {
            top_left_color: Color8::WHITE,
            top_right_color: Color8::WHITE,
            bottom_left_color: Color8::WHITE,
            bottom_right_color: Color8::WHITE,
            material,
            tex_coords: vec![TexCoord::default()],
        }
    }

    /// Corner colors in on-disk order
    pub fn vertex_colors(&self) -> [Color8; 4] {
        [
            self.top_left_color,
            self.top_right_color,
            self.bottom_left_color,
            self.bottom_right_color,
        ]
    }

    pub fn set_vertex_colors(&mut self, colors: [Color8; 4]) {
        [
            self.top_left_color,
            self.top_right_color,
            self.bottom_left_color,
            self.bottom_right_color,
        ] = colors;
    }
}
