//! Stable identifiers for document records
//!
//! Panes reference materials by `MaterialId` rather than by list position,
//! and tree nodes are addressed by `NodeId` inside their arena.

use std::fmt;

/// Identity of a material inside a [`MaterialList`](crate::materials::MaterialList)
///
/// Ids are allocated by the list and never reused, so reordering or removing
/// other materials does not change what an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(u32);

impl MaterialId {
    /// Create an id from its raw value
    #[inline]
    pub const fn new(value: u32) -> Self {
        MaterialId(value)
    }

    /// Get the raw value
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MaterialId {
    fn from(value: u32) -> Self {
        MaterialId(value)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mat#{}", self.0)
    }
}

/// Index of a node in a [`Tree`](crate::tree::Tree) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position in the arena
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}
