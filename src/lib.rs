//! # rlyt
//!
//! A pure Rust library for reading and writing binary layout archives
//! (RLYT / BRLYT) and their animation archives (RLAN / BRLAN).
//!
//! ## Features
//!
//! - Read and write layout archives in either byte order
//! - Pane tree (null, picture, text box, window and bounding panes)
//! - Materials with packed flag words, TEV stages and blend state
//! - Pane groups and opaque per-pane user data
//! - Animation tag info and keyframe tracks
//! - Failsafe reading that reports damaged sections as notifications
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rlyt::io::{LayoutReader, LayoutWriter};
//!
//! // Read a layout archive
//! let doc = LayoutReader::from_file("menu.brlyt")?.read()?;
//!
//! // Walk the pane tree
//! for id in doc.walk_panes() {
//!     println!("{}", doc.pane(id).unwrap());
//! }
//!
//! // Write it back
//! LayoutWriter::new(&doc).write_to_file("menu_out.brlyt")?;
//! # Ok::<(), rlyt::error::LayoutError>(())
//! ```
//!
//! ## Architecture
//!
//! - `LayoutDocument` - textures, fonts, materials, pane and group trees
//! - `AnimationDocument` - animation tag info and keyframe tracks
//! - `io::stream` - byte-order aware primitives with scoped seeks
//! - `io::layout` / `io::animation` - section codecs, readers and writers
//!
//! Panes and groups live in arena trees addressed by `NodeId`; panes refer
//! to materials through stable `MaterialId`s, so the material list can be
//! reordered or edited without breaking references.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod animation;
pub mod document;
pub mod error;
pub mod groups;
pub mod io;
pub mod materials;
pub mod notification;
pub mod panes;
pub mod tables;
pub mod tree;
pub mod types;

// Re-export commonly used types
pub use error::{LayoutError, Result};
pub use types::{ByteOrder, Color16, Color8, MaterialId, NodeId, TexCoord, Vector2, Vector3};

// Re-export the document models
pub use animation::AnimationDocument;
pub use document::{ArchiveHeader, LayoutDocument, LayoutInfo};
pub use groups::Group;
pub use materials::{Material, MaterialList};
pub use panes::{Pane, PaneKind, Picture, TextBox, Window};

// Re-export I/O types
pub use io::{
    read_animation, read_layout, write_animation, write_layout, AnimationReader, AnimationWriter,
    LayoutReader, LayoutWriter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
