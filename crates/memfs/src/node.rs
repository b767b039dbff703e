// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::error::Error;
use crate::error::Result;
use crate::link::LinkKind;

pub const ROOT_ID: NodeID = NodeID(0);

/// Name carried by the root directory.
pub const ROOT_NAME: &str = "/";

/// Unique identifier for a node in the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeID(usize);

impl std::fmt::Display for NodeID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl NodeID {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn is_root(self) -> bool {
        self == ROOT_ID
    }
}

/// Payload of a node: bytes for files, named children for directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File(Vec<u8>),
    Directory(BTreeMap<String, NodeID>),
}

/// A directory or file vertex of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    parent: Option<NodeID>,
    symlinks: BTreeSet<String>,
    hardlinks: BTreeSet<String>,
}

impl Node {
    pub(crate) fn new_file<S: Into<String>>(name: S, parent: NodeID) -> Self {
        Self::new(name.into(), NodeKind::File(Vec::new()), Some(parent))
    }

    pub(crate) fn new_dir<S: Into<String>>(name: S, parent: NodeID) -> Self {
        Self::new(name.into(), NodeKind::Directory(BTreeMap::new()), Some(parent))
    }

    pub(crate) fn new_root() -> Self {
        Self::new(ROOT_NAME.to_string(), NodeKind::Directory(BTreeMap::new()), None)
    }

    fn new(name: String, kind: NodeKind, parent: Option<NodeID>) -> Self {
        Self {
            name,
            kind,
            parent,
            symlinks: BTreeSet::new(),
            hardlinks: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    /// The owning directory, or `None` for the root and for detached nodes.
    #[must_use]
    pub fn parent(&self) -> Option<NodeID> {
        self.parent
    }

    /// Entries of a directory; `None` for files.
    #[must_use]
    pub fn children(&self) -> Option<&BTreeMap<String, NodeID>> {
        match &self.kind {
            NodeKind::Directory(children) => Some(children),
            NodeKind::File(_) => None,
        }
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Option<NodeID> {
        self.children().and_then(|c| c.get(name).copied())
    }

    /// Content of a file; `None` for directories.
    #[must_use]
    pub fn contents(&self) -> Option<&[u8]> {
        match &self.kind {
            NodeKind::File(bytes) => Some(bytes),
            NodeKind::Directory(_) => None,
        }
    }

    #[must_use]
    pub fn links(&self, kind: LinkKind) -> &BTreeSet<String> {
        match kind {
            LinkKind::Symbolic => &self.symlinks,
            LinkKind::Hard => &self.hardlinks,
        }
    }

    /// Number of hard links still referring to this node.
    #[must_use]
    pub fn hard_link_count(&self) -> usize {
        self.hardlinks.len()
    }

    /// Appends `data` unless the result would exceed `max` bytes.
    /// Returns the new size.
    pub(crate) fn append(&mut self, data: &[u8], max: usize) -> Result<usize> {
        let NodeKind::File(bytes) = &mut self.kind else {
            return Err(Error::file_not_found(&self.name));
        };
        let size = bytes.len() + data.len();
        if size > max {
            return Err(Error::file_too_large(size, max));
        }
        bytes.extend_from_slice(data);
        Ok(size)
    }

    pub(crate) fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeID>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, NodeID>> {
        match &mut self.kind {
            NodeKind::Directory(children) => Some(children),
            NodeKind::File(_) => None,
        }
    }

    /// Records a link name; false if it was already recorded for this kind.
    pub(crate) fn add_link(&mut self, kind: LinkKind, name: &str) -> bool {
        match kind {
            LinkKind::Symbolic => self.symlinks.insert(name.to_string()),
            LinkKind::Hard => self.hardlinks.insert(name.to_string()),
        }
    }

    pub(crate) fn remove_link(&mut self, kind: LinkKind, name: &str) -> bool {
        match kind {
            LinkKind::Symbolic => self.symlinks.remove(name),
            LinkKind::Hard => self.hardlinks.remove(name),
        }
    }
}
