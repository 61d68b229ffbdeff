//! Four-byte signatures of archives and sections

/// A four-byte section or archive signature
pub type Tag = [u8; 4];

// Archive magics
pub const LAYOUT_MAGIC: Tag = *b"RLYT";
pub const ANIMATION_MAGIC: Tag = *b"RLAN";

// Layout sections
pub const LAYOUT_INFO: Tag = *b"lyt1";
pub const TEXTURE_LIST: Tag = *b"txl1";
pub const FONT_LIST: Tag = *b"fnl1";
pub const MATERIAL_LIST: Tag = *b"mat1";

pub const PANE: Tag = *b"pan1";
pub const PICTURE: Tag = *b"pic1";
pub const TEXT_BOX: Tag = *b"txt1";
pub const WINDOW: Tag = *b"wnd1";
pub const BOUNDING: Tag = *b"bnd1";
pub const PANE_START: Tag = *b"pas1";
pub const PANE_END: Tag = *b"pae1";
pub const USER_DATA: Tag = *b"usd1";

pub const GROUP: Tag = *b"grp1";
pub const GROUP_START: Tag = *b"grs1";
pub const GROUP_END: Tag = *b"gre1";

// Animation sections
pub const ANIMATION_TAG_INFO: Tag = *b"pat1";
pub const ANIMATION_INFO: Tag = *b"pai1";

/// Printable form of a tag; non-ASCII bytes are escaped
pub fn display(tag: &Tag) -> String {
    tag.iter()
        .flat_map(|b| std::ascii::escape_default(*b))
        .map(char::from)
        .collect()
}
