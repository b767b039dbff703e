// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! An in-memory hierarchical file system.
//!
//! Nodes live in an arena ([`Tree`]) and refer to their parent by
//! [`NodeID`], so the tree has no ownership cycles. A [`FileSystem`] owns
//! one tree, one working-directory cursor and one flat [`LinkRegistry`] of
//! hard and symbolic aliases.
//!
//! ```
//! let mut fs = memfs::FileSystem::new();
//! fs.mkdir("home").unwrap();
//! fs.cd("home").unwrap();
//! fs.mkfile("notes.txt").unwrap();
//! fs.write_file("notes.txt", ["hello ", "world"]).unwrap();
//! assert_eq!(fs.read_file("notes.txt").unwrap(), "hello world");
//! assert_eq!(fs.pwd(), "/home");
//! ```

mod error;
mod fs;
mod limits;
mod link;
mod node;
pub mod path;
mod resolve;
mod search;
mod tree;

pub use error::{Error, Result};
pub use fs::FileSystem;
pub use limits::{Limits, MAX_FILE_SIZE, MAX_READ_LEN};
pub use link::{Link, LinkKind, LinkRegistry};
pub use node::{Node, NodeID, NodeKind, ROOT_ID, ROOT_NAME};
pub use resolve::Resolver;
pub use search::bfs;
pub use tree::Tree;

#[cfg(test)]
mod tests;
