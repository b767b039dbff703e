// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::collections::VecDeque;

use crate::node::*;
use crate::tree::Tree;

/// Breadth-first search from `start` for every node called `name`.
///
/// Results come back in level order; siblings are visited in child-map
/// order. Nodes are deduplicated by identity, so two entries sharing a name
/// in different directories are both reported.
#[must_use]
pub fn bfs(tree: &Tree, start: NodeID, name: &str) -> Vec<NodeID> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([start]);
    let mut found = Vec::new();

    while let Some(next) = queue.pop_front() {
        if !visited.insert(next) {
            continue;
        }
        let Some(node) = tree.get(next) else {
            continue;
        };

        if node.name() == name {
            found.push(next);
        }

        if let Some(children) = node.children() {
            queue.extend(children.values().copied());
        }
    }

    found
}
