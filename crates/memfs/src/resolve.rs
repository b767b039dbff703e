// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::error::Result;
use crate::node::*;
use crate::path::*;
use crate::tree::Tree;

/// Walks paths over a tree from a given working directory
pub struct Resolver<'a> {
    tree: &'a Tree,
    cwd: NodeID,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(tree: &'a Tree, cwd: NodeID) -> Self {
        Self { tree, cwd }
    }

    /// Resolves a whole path. Every segment has to name a directory.
    pub fn resolve(&self, path: &str) -> Result<NodeID> {
        let parsed = ParsedPath::parse(path);
        self.walk(parsed.start, &parsed.segments)
    }

    /// Resolves the directory that should hold the leaf of `parsed`.
    pub fn resolve_parent(&self, parsed: &ParsedPath<'_>) -> Result<NodeID> {
        self.walk(parsed.start, parsed.parent_segments())
    }

    /// Follows `segments` from `start`, stopping at the first miss
    pub fn walk(&self, start: Start, segments: &[&str]) -> Result<NodeID> {
        let mut cur = match start {
            Start::Root => ROOT_ID,
            Start::Current => self.cwd,
        };

        for &seg in segments {
            match seg {
                PARENT_DIR => {
                    // At the root ".." stays put
                    if let Some(parent) = self.tree.node(cur)?.parent() {
                        cur = parent;
                    }
                }
                CUR_DIR => {}
                name => {
                    cur = self
                        .tree
                        .node(cur)?
                        .child(name)
                        .filter(|id| self.tree.get(*id).is_some_and(Node::is_dir))
                        .ok_or_else(|| Error::directory_not_found(name))?;
                }
            }
        }

        Ok(cur)
    }
}
