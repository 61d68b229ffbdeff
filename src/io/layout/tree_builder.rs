//! Rebuilds the pane and group hierarchies from the flat section stream
//!
//! `pas1`/`pae1` and `grs1`/`gre1` bracket the children of the most
//! recently decoded pane or group. The builder keeps an explicit stack of
//! open scopes per tree.

use crate::error::{LayoutError, Result};
use crate::notification::{NotificationCollection, NotificationType};
use crate::tree::Tree;
use crate::types::NodeId;

/// Scope-tracking insertion into one arena tree
#[derive(Debug)]
pub struct TreeBuilder<T> {
    tree: Tree<T>,
    root: Option<NodeId>,
    scopes: Vec<NodeId>,
    last: Option<NodeId>,
    kind: &'static str,
}

impl<T> TreeBuilder<T> {
    /// `kind` names the node type in diagnostics ("pane", "group")
    pub fn new(kind: &'static str) -> Self {
        TreeBuilder {
            tree: Tree::new(),
            root: None,
            scopes: Vec::new(),
            last: None,
            kind,
        }
    }

    /// Insert a decoded node under the innermost open scope.
    ///
    /// Outside any scope the first node becomes the root; later ones are
    /// kept in the arena but detached, with a warning.
    pub fn insert(
        &mut self,
        value: T,
        offset: u64,
        notifications: &mut NotificationCollection,
    ) -> Result<NodeId> {
        let id = match self.scopes.last() {
            Some(&parent) => self.tree.insert_child(parent, value)?,
            None => {
                let id = self.tree.insert(value);
                if self.root.is_none() {
                    self.root = Some(id);
                } else {
                    notifications.notify_at(
                        NotificationType::Warning,
                        offset,
                        format!("second top-level {} is detached from the tree", self.kind),
                    );
                }
                id
            }
        };
        self.last = Some(id);
        Ok(id)
    }

    /// Open a scope on the last inserted node
    pub fn open(&mut self, tag: &str, offset: u64) -> Result<()> {
        let last = self.last.ok_or_else(|| LayoutError::UnbalancedScope {
            tag: tag.to_string(),
            offset,
        })?;
        self.scopes.push(last);
        Ok(())
    }

    /// Close the innermost scope
    pub fn close(&mut self, tag: &str, offset: u64) -> Result<()> {
        self.scopes
            .pop()
            .map(|_| ())
            .ok_or_else(|| LayoutError::UnbalancedScope {
                tag: tag.to_string(),
                offset,
            })
    }

    /// Most recently inserted node
    pub fn last(&self) -> Option<NodeId> {
        self.last
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.tree.get_mut(id)
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Finish the tree; any scope still open is an error
    pub fn finish(self, tag: &str, offset: u64) -> Result<(Tree<T>, Option<NodeId>)> {
        if !self.scopes.is_empty() {
            return Err(LayoutError::UnbalancedScope {
                tag: tag.to_string(),
                offset,
            });
        }
        Ok((self.tree, self.root))
    }
}
