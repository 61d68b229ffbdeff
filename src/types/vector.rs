//! Single-precision vector types used for pane transforms and UVs

/// 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Both components set to one (identity scale)
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);
}

/// 3D vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Create a new 3D vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
}

/// Texture coordinates for the four corners of a quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexCoord {
    pub top_left: Vector2,
    pub top_right: Vector2,
    pub bottom_left: Vector2,
    pub bottom_right: Vector2,
}

impl Default for TexCoord {
    /// The full texture mapped onto the quad.
    fn default() -> Self {
        TexCoord {
            top_left: Vector2::new(0.0, 0.0),
            top_right: Vector2::new(1.0, 0.0),
            bottom_left: Vector2::new(0.0, 1.0),
            bottom_right: Vector2::new(1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Vector2::ONE, Vector2::new(1.0, 1.0));
        assert_eq!(Vector3::ZERO, Vector3::default());
    }

    #[test]
    fn test_default_tex_coord_covers_texture() {
        let uv = TexCoord::default();
        assert_eq!(uv.top_left, Vector2::ZERO);
        assert_eq!(uv.bottom_right, Vector2::ONE);
    }
}
