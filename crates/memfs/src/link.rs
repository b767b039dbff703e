// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Hard and symbolic aliases.
//!
//! Links are not directory entries. They live in one flat [`LinkRegistry`]
//! per filesystem, keyed by link name, regardless of the directory the
//! alias was declared in, so they never show up in listings.

use std::collections::BTreeMap;

use crate::node::NodeID;

/// The two alias flavours, which differ only in what happens when the
/// target is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Keeps referring to the target after the target is removed.
    Hard,
    /// Target is cleared when the target is removed.
    Symbolic,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Hard => write!(f, "hard link"),
            LinkKind::Symbolic => write!(f, "symlink"),
        }
    }
}

/// A named alias for a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    name: String,
    kind: LinkKind,
    target: Option<NodeID>,
}

impl Link {
    pub(crate) fn new<S: Into<String>>(name: S, kind: LinkKind, target: NodeID) -> Self {
        Self {
            name: name.into(),
            kind,
            target: Some(target),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.kind == LinkKind::Symbolic
    }

    /// The live target, or `None` once a symbolic link's target was removed.
    #[must_use]
    pub fn target(&self) -> Option<NodeID> {
        self.target
    }

    pub(crate) fn clear_target(&mut self) {
        self.target = None;
    }
}

/// Flat name -> link mapping
#[derive(Debug, Default, Clone)]
pub struct LinkRegistry {
    links: BTreeMap<String, Link>,
}

impl LinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Link> {
        self.links.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.links.contains_key(name)
    }

    /// Live target of `name`, if registered and not cleared.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<NodeID> {
        self.links.get(name).and_then(Link::target)
    }

    /// Registers `link`, returning any entry it displaced.
    pub(crate) fn insert(&mut self, link: Link) -> Option<Link> {
        self.links.insert(link.name.clone(), link)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Link> {
        self.links.remove(name)
    }

    /// Clears `name` if it still points at `target`.
    pub(crate) fn clear_if_targets(&mut self, name: &str, target: NodeID) -> bool {
        match self.links.get_mut(name) {
            Some(link) if link.target == Some(target) => {
                link.clear_target();
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
