//! Primitive stream layer shared by both archive formats.
//!
//! - [`EndianReader`] / [`EndianWriter`] read and write numbers, strings and
//!   colors in the byte order selected by the archive header.
//! - [`Scoped`] implements the save/seek/restore discipline used for every
//!   offset dereference and every backpatch.
//! - [`codepage`] maps stored byte strings to `String` and back.

pub mod codepage;
mod reader;
pub mod scoped;
mod writer;

pub use reader::EndianReader;
pub use scoped::{Reposition, Scoped};
pub use writer::{EndianWriter, SeekWrite};
