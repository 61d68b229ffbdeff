//! Panes: the positioned, sized nodes of the scene graph
//!
//! Every pane shares the common header stored in [`Pane`]; the variant
//! payload (picture, text box, window) lives in [`PaneKind`].

pub mod picture;
pub mod text;
pub mod window;

pub use picture::Picture;
pub use text::{LineAlign, TextBox};
pub use window::{TextureFlip, Window, WindowContent, WindowFrame, WindowInsets};

use crate::types::{MaterialId, Vector2, Vector3};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Pane visibility and inheritance flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PaneFlags: u8 {
        /// Pane (and its children) are drawn.
        const VISIBLE = 0x01;
        /// Children are multiplied by this pane's alpha.
        const INFLUENCED_ALPHA = 0x02;
        /// Position is adjusted for widescreen output.
        const LOCATION_ADJUST = 0x04;
    }
}

impl Default for PaneFlags {
    fn default() -> Self {
        PaneFlags::VISIBLE
    }
}

/// Horizontal anchor of a pane's origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum HorizontalOrigin {
    Left = 0,
    #[default]
    Center = 1,
    Right = 2,
}

/// Vertical anchor of a pane's origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VerticalOrigin {
    Top = 0,
    #[default]
    Center = 1,
    Bottom = 2,
}

/// Origin anchor, packed on disk as `x + 3 * y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Origin {
    pub x: HorizontalOrigin,
    pub y: VerticalOrigin,
}

impl Origin {
    pub const fn new(x: HorizontalOrigin, y: VerticalOrigin) -> Self {
        Origin { x, y }
    }

    /// Unpack an origin byte; values above 8 are not valid anchors
    pub fn from_byte(byte: u8) -> Option<Self> {
        let x = match byte % 3 {
            0 => HorizontalOrigin::Left,
            1 => HorizontalOrigin::Center,
            _ => HorizontalOrigin::Right,
        };
        let y = match byte / 3 {
            0 => VerticalOrigin::Top,
            1 => VerticalOrigin::Center,
            2 => VerticalOrigin::Bottom,
            _ => return None,
        };
        Some(Origin { x, y })
    }

    pub fn to_byte(self) -> u8 {
        self.x as u8 + 3 * self.y as u8
    }
}

/// Variant payload of a pane
#[derive(Debug, Clone, PartialEq)]
pub enum PaneKind {
    /// Plain grouping pane (`pan1`)
    Null,
    /// Textured quad (`pic1`)
    Picture(Picture),
    /// Text box (`txt1`)
    Text(TextBox),
    /// Nine-slice window (`wnd1`)
    Window(Window),
    /// Invisible bounding region (`bnd1`)
    Bound,
}

impl PaneKind {
    /// Short variant name
    pub fn type_name(&self) -> &'static str {
        match self {
            PaneKind::Null => "Pane",
            PaneKind::Picture(_) => "Picture",
            PaneKind::Text(_) => "Text",
            PaneKind::Window(_) => "Window",
            PaneKind::Bound => "Bound",
        }
    }
}

/// A scene-graph node
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    /// Up to 16 bytes
    pub name: String,
    pub flags: PaneFlags,
    pub origin: Origin,
    pub alpha: u8,
    /// Scaling behaviour flags, kept as stored
    pub mag_flags: u8,
    /// Up to 8 bytes of user information
    pub user_info: String,
    pub translate: Vector3,
    /// Euler angles in degrees
    pub rotate: Vector3,
    pub scale: Vector2,
    pub width: f32,
    pub height: f32,
    /// Opaque payload of a `usd1` section following the pane
    pub user_data: Option<Vec<u8>>,
    pub kind: PaneKind,
}

impl Pane {
    pub const NAME_LEN: usize = 16;
    pub const USER_INFO_LEN: usize = 8;

    /// Create a visible, opaque pane of the given variant
    pub fn new(name: impl Into<String>, kind: PaneKind) -> Self {
        Pane {
            name: name.into(),
            flags: PaneFlags::default(),
            origin: Origin::default(),
            alpha: 255,
            mag_flags: 0,
            user_info: String::new(),
            translate: Vector3::ZERO,
            rotate: Vector3::ZERO,
            scale: Vector2::ONE,
            width: 0.0,
            height: 0.0,
            user_data: None,
            kind,
        }
    }

    pub fn null(name: impl Into<String>) -> Self {
        Pane::new(name, PaneKind::Null)
    }

    pub fn bound(name: impl Into<String>) -> Self {
        Pane::new(name, PaneKind::Bound)
    }

    pub fn picture(name: impl Into<String>, picture: Picture) -> Self {
        Pane::new(name, PaneKind::Picture(picture))
    }

    pub fn text(name: impl Into<String>, text: TextBox) -> Self {
        Pane::new(name, PaneKind::Text(text))
    }

    pub fn window(name: impl Into<String>, window: Window) -> Self {
        Pane::new(name, PaneKind::Window(window))
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(PaneFlags::VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(PaneFlags::VISIBLE, visible);
    }

    /// Materials referenced by this pane, in on-disk order
    pub fn material_refs(&self) -> Vec<MaterialId> {
        match &self.kind {
            PaneKind::Picture(p) => vec![p.material],
            PaneKind::Text(t) => vec![t.material],
            PaneKind::Window(w) => std::iter::once(w.content.material)
                .chain(w.frames.iter().map(|f| f.material))
                .collect(),
            PaneKind::Null | PaneKind::Bound => Vec::new(),
        }
    }
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' {}x{} at {:?}",
            self.kind.type_name(),
            self.name,
            self.width,
            self.height,
            self.translate
        )
    }
}
