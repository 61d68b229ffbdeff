//! Layout archive (RLYT) reader and writer

pub mod material_codec;
pub mod pane_codec;
mod reader;
pub mod resolver;
pub mod tree_builder;
mod writer;

pub use reader::{LayoutReader, LayoutReaderConfiguration};
pub use resolver::Resolver;
pub use writer::LayoutWriter;
