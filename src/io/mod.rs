//! I/O module for reading and writing layout (RLYT) and animation (RLAN)
//! archives

pub mod animation;
pub mod header;
pub mod layout;
pub mod offsets;
pub mod section;
pub mod stream;
pub mod string_table;
pub mod tags;

pub use animation::{AnimationReader, AnimationReaderConfiguration, AnimationWriter};
pub use layout::{LayoutReader, LayoutReaderConfiguration, LayoutWriter};

use crate::animation::AnimationDocument;
use crate::document::LayoutDocument;
use crate::error::Result;
use std::io::Cursor;

/// Decode a layout archive held in memory
pub fn read_layout(bytes: &[u8]) -> Result<LayoutDocument> {
    LayoutReader::from_reader(Cursor::new(bytes))?.read()
}

/// Encode a layout document into a new buffer
pub fn write_layout(document: &LayoutDocument) -> Result<Vec<u8>> {
    LayoutWriter::new(document).write_to_vec()
}

/// Decode an animation archive held in memory
pub fn read_animation(bytes: &[u8]) -> Result<AnimationDocument> {
    AnimationReader::from_reader(Cursor::new(bytes))?.read()
}

/// Encode an animation document into a new buffer
pub fn write_animation(document: &AnimationDocument) -> Result<Vec<u8>> {
    AnimationWriter::new(document).write_to_vec()
}
