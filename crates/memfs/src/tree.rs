// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::error::Result;
use crate::node::*;

/// Arena owning every live node.
///
/// Slots are indexed by [`NodeID`] and never reused, so an id that was
/// released stays invalid forever. The root always occupies slot 0.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Option<Node>>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Creates a tree holding only the root directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node::new_root())],
        }
    }

    /// Retrieves a live node by its ID
    #[must_use]
    pub fn get(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id.as_usize()).and_then(Option::as_ref)
    }

    pub(crate) fn node(&self, id: NodeID) -> Result<&Node> {
        self.get(id).ok_or_else(|| Error::stale_node(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeID) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.as_usize())
            .and_then(Option::as_mut)
            .ok_or_else(|| Error::stale_node(id))
    }

    /// Number of live nodes, root included.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Adds a new node to the arena without linking it into a directory
    pub(crate) fn add_node(&mut self, node: Node) -> NodeID {
        let id = NodeID::new(self.nodes.len());
        self.nodes.push(Some(node));
        id
    }

    /// Inserts `child` into `parent` under the child's own name and
    /// reparents it. Returns the entry previously held under that name.
    pub(crate) fn attach(&mut self, parent: NodeID, child: NodeID) -> Result<Option<NodeID>> {
        let name = self.node(child)?.name().to_string();
        let pnode = self.node_mut(parent)?;
        let pname = pnode.name().to_string();
        let displaced = pnode
            .children_mut()
            .ok_or_else(|| Error::not_a_directory(pname))?
            .insert(name, child);
        self.node_mut(child)?.set_parent(Some(parent));
        Ok(displaced)
    }

    /// Removes the entry `name` from `parent` and clears its parent link.
    pub(crate) fn detach(&mut self, parent: NodeID, name: &str) -> Result<Option<NodeID>> {
        let pnode = self.node_mut(parent)?;
        let pname = pnode.name().to_string();
        let removed = pnode
            .children_mut()
            .ok_or_else(|| Error::not_a_directory(pname))?
            .remove(name);
        if let Some(id) = removed {
            self.node_mut(id)?.set_parent(None);
        }
        Ok(removed)
    }

    /// Ids of `id` and all its descendants, depth-first, parents first.
    pub(crate) fn subtree(&self, id: NodeID) -> Vec<NodeID> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(children) = self.get(next).and_then(Node::children) {
                // Reverse so the smallest name is visited first
                stack.extend(children.values().rev().copied());
            }
        }
        out
    }

    /// Frees the slot of `id`. The root is never released.
    pub(crate) fn release(&mut self, id: NodeID) -> Option<Node> {
        if id.is_root() {
            return None;
        }
        self.nodes.get_mut(id.as_usize()).and_then(Option::take)
    }

    /// Absolute path of `id`, `/` for the root.
    pub fn full_path(&self, id: NodeID) -> Result<String> {
        let mut names = Vec::new();
        let mut cur = id;
        while !cur.is_root() {
            let node = self.node(cur)?;
            names.push(node.name());
            match node.parent() {
                Some(parent) => cur = parent,
                None => break,
            }
        }
        if names.is_empty() {
            return Ok(ROOT_NAME.to_string());
        }
        names.reverse();
        Ok(format!("/{}", names.join("/")))
    }
}
