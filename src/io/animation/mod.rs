//! Animation archive (RLAN) reader and writer

pub mod info_codec;
mod reader;
pub mod tag_info_codec;
mod writer;

pub use reader::{AnimationReader, AnimationReaderConfiguration};
pub use writer::AnimationWriter;
