//! Arena-backed trees for the pane and group hierarchies
//!
//! Nodes live in a flat vector and refer to each other by [`NodeId`]. Each
//! node records its parent index and an ordered list of child indices, so no
//! reference cycles exist and a whole tree can be cloned or compared cheaply.

use crate::error::{LayoutError, Result};
use crate::types::NodeId;

/// A node of a [`Tree`]
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<T> Node<T> {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An ordered forest stored in an arena
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree { nodes: Vec::new() }
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node with no parent
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            value,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Insert a node as the last child of `parent`
    pub fn insert_child(&mut self, parent: NodeId, value: T) -> Result<NodeId> {
        self.node(parent)?;
        let id = self.insert(value);
        self.nodes[id.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn node(&self, id: NodeId) -> Result<&Node<T>> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| LayoutError::UnresolvedReference(format!("{id} is not in the tree")))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.index()).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.index()).map(|n| &mut n.value)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Children of `id` in order; empty for unknown ids
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over every node in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i), &n.value))
    }

    /// Node ids of the subtree rooted at `root`, parents before children
    pub fn depth_first(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        if !self.contains(root) {
            return order;
        }
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            order.push(id);
            pending.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Number of ancestors of `id`
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }
}
