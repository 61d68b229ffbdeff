//! Layout document structure

use crate::error::Result;
use crate::groups::Group;
use crate::materials::{Material, MaterialList};
use crate::notification::NotificationCollection;
use crate::panes::Pane;
use crate::tables::NameTable;
use crate::tree::Tree;
use crate::types::{ByteOrder, MaterialId, NodeId};

/// Archive header fields shared by layout and animation archives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
    /// Order of every multi-byte field after the byte-order marker
    pub byte_order: ByteOrder,
    pub version: u16,
    /// Total length declared by the file (0 for documents not read from a stream)
    pub file_length: u32,
    /// Header length declared by the file
    pub header_length: u16,
}

impl ArchiveHeader {
    /// Size of the header fields this library writes
    pub const SIZE: u16 = 16;

    pub fn new(version: u16) -> Self {
        ArchiveHeader {
            byte_order: ByteOrder::Big,
            version,
            file_length: 0,
            header_length: Self::SIZE,
        }
    }
}

/// Screen-space layout settings (`lyt1`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInfo {
    /// Coordinates are measured from the screen center
    pub draw_from_center: bool,
    pub width: f32,
    pub height: f32,
}

impl Default for LayoutInfo {
    fn default() -> Self {
        LayoutInfo {
            draw_from_center: true,
            width: 608.0,
            height: 456.0,
        }
    }
}

/// An in-memory layout archive
///
/// Panes and groups live in arena trees; panes reference materials by
/// [`MaterialId`] and fonts/textures by name, so tables can be edited without
/// breaking references.
#[derive(Debug, Clone)]
pub struct LayoutDocument {
    pub header: ArchiveHeader,
    pub layout: LayoutInfo,
    pub textures: NameTable,
    pub fonts: NameTable,
    pub materials: MaterialList,
    pub panes: Tree<Pane>,
    pub root_pane: Option<NodeId>,
    pub groups: Tree<Group>,
    pub root_group: Option<NodeId>,
    /// Diagnostics collected while reading
    pub notifications: NotificationCollection,
}

impl LayoutDocument {
    /// Version written for new documents
    pub const DEFAULT_VERSION: u16 = 0x000A;

    /// Create an empty big-endian document
    pub fn new() -> Self {
        LayoutDocument {
            header: ArchiveHeader::new(Self::DEFAULT_VERSION),
            layout: LayoutInfo::default(),
            textures: NameTable::new(),
            fonts: NameTable::new(),
            materials: MaterialList::new(),
            panes: Tree::new(),
            root_pane: None,
            groups: Tree::new(),
            root_group: None,
            notifications: NotificationCollection::new(),
        }
    }

    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        let mut doc = Self::new();
        doc.header.byte_order = byte_order;
        doc
    }

    // ---------------------------------------------------------------
    // Tables
    // ---------------------------------------------------------------

    /// Append a texture name and return its index
    pub fn add_texture(&mut self, name: impl Into<String>) -> usize {
        self.textures.add(name)
    }

    /// Append a font name and return its index
    pub fn add_font(&mut self, name: impl Into<String>) -> usize {
        self.fonts.add(name)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.add(material)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    pub fn material_by_name(&self, name: &str) -> Option<MaterialId> {
        self.materials.find_by_name(name).map(|(id, _)| id)
    }

    // ---------------------------------------------------------------
    // Panes
    // ---------------------------------------------------------------

    /// Insert `pane` as the new root; any previous root stays in the arena
    /// but is no longer written.
    pub fn set_root_pane(&mut self, pane: Pane) -> NodeId {
        let id = self.panes.insert(pane);
        self.root_pane = Some(id);
        id
    }

    /// Insert `pane` as the last child of `parent`
    pub fn add_child_pane(&mut self, parent: NodeId, pane: Pane) -> Result<NodeId> {
        self.panes.insert_child(parent, pane)
    }

    pub fn root(&self) -> Option<&Pane> {
        self.root_pane.and_then(|id| self.panes.get(id))
    }

    pub fn pane(&self, id: NodeId) -> Option<&Pane> {
        self.panes.get(id)
    }

    pub fn pane_mut(&mut self, id: NodeId) -> Option<&mut Pane> {
        self.panes.get_mut(id)
    }

    /// Panes reachable from the root, parents before children
    pub fn walk_panes(&self) -> Vec<NodeId> {
        self.root_pane
            .map(|root| self.panes.depth_first(root))
            .unwrap_or_default()
    }

    /// First reachable pane named `name`
    pub fn pane_by_name(&self, name: &str) -> Option<NodeId> {
        self.walk_panes()
            .into_iter()
            .find(|id| self.panes.get(*id).is_some_and(|p| p.name == name))
    }

    // ---------------------------------------------------------------
    // Groups
    // ---------------------------------------------------------------

    pub fn set_root_group(&mut self, group: Group) -> NodeId {
        let id = self.groups.insert(group);
        self.root_group = Some(id);
        id
    }

    pub fn add_child_group(&mut self, parent: NodeId, group: Group) -> Result<NodeId> {
        self.groups.insert_child(parent, group)
    }

    /// Groups reachable from the root group, parents before children
    pub fn walk_groups(&self) -> Vec<NodeId> {
        self.root_group
            .map(|root| self.groups.depth_first(root))
            .unwrap_or_default()
    }

    pub fn group_by_name(&self, name: &str) -> Option<NodeId> {
        self.walk_groups()
            .into_iter()
            .find(|id| self.groups.get(*id).is_some_and(|g| g.name == name))
    }
}

impl Default for LayoutDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LayoutDocument {
    /// Structural equality; notifications are not compared
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.layout == other.layout
            && self.textures == other.textures
            && self.fonts == other.fonts
            && self.materials == other.materials
            && self.panes == other.panes
            && self.root_pane == other.root_pane
            && self.groups == other.groups
            && self.root_group == other.root_group
    }
}
