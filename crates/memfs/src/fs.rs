// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use diagnostics::log_debug;

use crate::error::*;
use crate::limits::Limits;
use crate::link::*;
use crate::node::*;
use crate::path::*;
use crate::resolve::Resolver;
use crate::search;
use crate::tree::Tree;

/// An in-memory file tree with a working-directory cursor and a flat
/// registry of hard and symbolic links.
///
/// Every operation validates before it mutates, so a returned error always
/// leaves the tree as it was.
#[derive(Debug, Clone)]
pub struct FileSystem {
    tree: Tree,
    cwd: NodeID,
    links: LinkRegistry,
    limits: Limits,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem {
    /// Creates a filesystem holding an empty root, with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            tree: Tree::new(),
            cwd: ROOT_ID,
            links: LinkRegistry::new(),
            limits,
        }
    }

    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    pub fn links(&self) -> &LinkRegistry {
        &self.links
    }

    #[must_use]
    pub fn current_dir(&self) -> NodeID {
        self.cwd
    }

    #[must_use]
    pub fn node(&self, id: NodeID) -> Option<&Node> {
        self.tree.get(id)
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.tree, self.cwd)
    }

    fn cwd_node(&self) -> Result<&Node> {
        self.tree.node(self.cwd)
    }

    /// Absolute path of the working directory
    #[must_use]
    pub fn pwd(&self) -> String {
        self.tree
            .full_path(self.cwd)
            .unwrap_or_else(|_| ROOT_NAME.to_string())
    }

    /// Moves the working directory. A registered link name wins over a path.
    /// Returns the name of the new working directory.
    pub fn cd(&mut self, path: &str) -> Result<String> {
        let target = match self.link_dir(path) {
            Some(found) => found?,
            None => self.resolver().resolve(path)?,
        };
        self.cwd = target;

        let name = self.cwd_node()?.name().to_string();
        log_debug!("cd to {path}", path: self.pwd());
        Ok(name)
    }

    /// Creates a directory. Every segment but the last must already exist.
    /// An existing directory of the same name is kept as is.
    pub fn mkdir(&mut self, path: &str) -> Result<String> {
        let parsed = ParsedPath::parse(path);
        let leaf = parsed.leaf().ok_or_else(Error::empty_name)?;
        if is_reserved(leaf) {
            return Err(Error::invalid_name(leaf));
        }
        let parent = self.resolver().resolve_parent(&parsed)?;

        if let Some(existing) = self.tree.node(parent)?.child(leaf) {
            return if self.tree.node(existing)?.is_dir() {
                Ok(leaf.to_string())
            } else {
                Err(Error::already_exists(leaf))
            };
        }

        let id = self.tree.add_node(Node::new_dir(leaf, parent));
        self.tree.attach(parent, id)?;
        log_debug!("created directory {path}", path: self.tree.full_path(id)?);
        Ok(leaf.to_string())
    }

    /// Creates an empty file in the working directory, renaming it once
    /// if a file of that name is already there.
    pub fn mkfile(&mut self, name: &str) -> Result<String> {
        if name.trim().is_empty() {
            return Err(Error::empty_name());
        }
        if name.contains(SEPARATOR) || is_reserved(name) {
            return Err(Error::invalid_name(name));
        }

        let cwd = self.cwd;
        let name = self.free_file_name(cwd, name)?;
        let id = self.tree.add_node(Node::new_file(name.as_str(), cwd));
        self.insert_entry(cwd, id)?;
        log_debug!("created file {path}", path: self.tree.full_path(id)?);
        Ok(name)
    }

    /// Space-separated names in the working directory, or in `path`.
    pub fn ls(&self, path: Option<&str>) -> Result<String> {
        let dir = match path {
            None => self.cwd,
            Some(path) => match self.link_dir(path) {
                Some(found) => found?,
                None => self.resolver().resolve(path)?,
            },
        };

        let names: Vec<&str> = self
            .tree
            .node(dir)?
            .children()
            .map(|children| children.keys().map(String::as_str).collect())
            .unwrap_or_default();
        Ok(names.join(" "))
    }

    /// Removes a link, or an entry of the working directory.
    ///
    /// Directories with children need `recursive`; files refuse it.
    /// Symbolic links to anything removed are cleared, hard links keep
    /// the removed file alive.
    pub fn rm(&mut self, path: &str, recursive: bool) -> Result<String> {
        let name = trim_separators(path);
        if self.links.contains(name) {
            return self.remove_link(name);
        }

        let cwd = self.cwd;
        let id = self
            .cwd_node()?
            .child(name)
            .ok_or_else(|| Error::directory_not_found(name))?;

        let node = self.tree.node(id)?;
        let populated = node.children().is_some_and(|c| !c.is_empty());
        if populated && !recursive {
            return Err(Error::non_empty_directory(name));
        }
        if node.is_file() && recursive {
            return Err(Error::recursive_remove_of_file(name));
        }

        let path = self.tree.full_path(id)?;
        self.tree.detach(cwd, name)?;
        self.teardown(id)?;
        log_debug!("removed {path}", path: path);
        Ok(name.to_string())
    }

    /// Appends the concatenation of `data` to a file of the working directory.
    pub fn write_file<I, D>(&mut self, name: &str, data: I) -> Result<String>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[u8]>,
    {
        let id = self.child_file(name)?;
        let mut buf = Vec::new();
        for piece in data {
            buf.extend_from_slice(piece.as_ref());
        }

        let max = self.limits.max_file_size;
        let size = self.tree.node_mut(id)?.append(&buf, max)?;
        log_debug!("wrote {written} bytes to {name}, now {size}", written: buf.len(), name: name, size: size);
        Ok(name.to_string())
    }

    /// Reads a file through a link or from the working directory.
    /// Long content is cut for display; storage is untouched.
    pub fn read_file(&self, name: &str) -> Result<String> {
        let id = match self.links.get(name) {
            Some(link) => link.target().ok_or_else(|| Error::file_not_found(name))?,
            None => self.child_file(name)?,
        };
        let content = self
            .tree
            .node(id)?
            .contents()
            .ok_or_else(|| Error::file_not_found(name))?;
        Ok(self.limits.display(content))
    }

    /// Stored byte length of a file in the working directory
    pub fn file_size(&self, name: &str) -> Result<usize> {
        let id = self.child_file(name)?;
        Ok(self.tree.node(id)?.contents().map_or(0, <[u8]>::len))
    }

    /// Moves a file of the working directory into the directory `target`.
    /// Returns `target` without its surrounding separators.
    pub fn mv_file(&mut self, name: &str, target: &str) -> Result<String> {
        let name = trim_separators(name);
        let target = trim_separators(target);
        let cwd = self.cwd;

        let id = self
            .cwd_node()?
            .child(name)
            .ok_or_else(|| Error::file_not_found(name))?;
        if self.tree.node(id)?.is_dir() {
            return Err(Error::cannot_move_directory(name));
        }
        let dest = self.resolver().resolve(target)?;

        // Moving within one directory never collides with the file itself
        let final_name = if dest == cwd {
            name.to_string()
        } else {
            self.free_file_name(dest, name)?
        };

        self.tree.detach(cwd, name)?;
        self.tree.node_mut(id)?.set_name(final_name.as_str());
        self.insert_entry(dest, id)?;
        log_debug!("moved {name} to {path}", name: name, path: self.tree.full_path(id)?);
        Ok(target.to_string())
    }

    /// Finds entries called `name`.
    ///
    /// Without `recursive` only the working directory is checked and bare
    /// names are returned. With it, the whole tree is searched
    /// breadth-first from the root and absolute paths are returned.
    #[must_use]
    pub fn find(&self, name: &str, recursive: bool) -> Vec<String> {
        if recursive {
            return search::bfs(&self.tree, ROOT_ID, name)
                .into_iter()
                .filter_map(|id| self.tree.full_path(id).ok())
                .collect();
        }

        self.cwd_node()
            .ok()
            .and_then(Node::children)
            .map(|children| {
                children
                    .keys()
                    .filter(|key| key.as_str() == name)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Creates a symbolic link called `link_name` to an entry of the
    /// working directory.
    pub fn create_symlink(&mut self, target: &str, link_name: &str) -> Result<String> {
        self.create_link(LinkKind::Symbolic, target, link_name)
    }

    /// Creates a hard link called `link_name` to a file of the working
    /// directory.
    pub fn create_hardlink(&mut self, target: &str, link_name: &str) -> Result<String> {
        self.create_link(LinkKind::Hard, target, link_name)
    }

    /// Live target of a registered link
    #[must_use]
    pub fn resolve_link(&self, name: &str) -> Option<NodeID> {
        self.links.resolve(name)
    }

    fn create_link(&mut self, kind: LinkKind, target: &str, link_name: &str) -> Result<String> {
        if link_name.trim().is_empty() {
            return Err(Error::empty_name());
        }
        if link_name.contains(SEPARATOR) {
            return Err(Error::invalid_name(link_name));
        }

        let target = trim_separators(target);
        let id = self
            .cwd_node()?
            .child(target)
            .ok_or_else(|| Error::file_not_found(target))?;
        let node = self.tree.node(id)?;
        if kind == LinkKind::Hard && node.is_dir() {
            return Err(Error::hard_link_to_directory(target));
        }
        if node.links(kind).contains(link_name) {
            return Err(Error::link_already_exists(link_name));
        }

        self.tree.node_mut(id)?.add_link(kind, link_name);
        if let Some(old) = self.links.insert(Link::new(link_name, kind, id)) {
            // The name now belongs to the new link only
            self.unhook(&old)?;
        }
        log_debug!("created {kind} {link} to {path}", kind: kind.to_string(), link: link_name, path: self.tree.full_path(id)?);
        Ok(link_name.to_string())
    }

    /// The directory behind a link, when `name` is a registered link.
    fn link_dir(&self, name: &str) -> Option<Result<NodeID>> {
        let link = self.links.get(name)?;
        Some(match link.target() {
            None => Err(Error::directory_not_found(name)),
            Some(id) => match self.tree.node(id) {
                Ok(node) if node.is_dir() => Ok(id),
                Ok(_) => Err(Error::not_a_directory(name)),
                Err(err) => Err(err),
            },
        })
    }

    fn child_file(&self, name: &str) -> Result<NodeID> {
        self.cwd_node()?
            .child(name)
            .filter(|id| self.tree.get(*id).is_some_and(Node::is_file))
            .ok_or_else(|| Error::file_not_found(name))
    }

    /// Name a file called `name` gets when placed in `dir`
    fn free_file_name(&self, dir: NodeID, name: &str) -> Result<String> {
        let dnode = self.tree.node(dir)?;
        let taken_by_file = |candidate: &str| {
            dnode
                .child(candidate)
                .and_then(|id| self.tree.get(id))
                .is_some_and(Node::is_file)
        };

        let name = if taken_by_file(name) {
            collision_name(name)
        } else {
            name.to_string()
        };

        match dnode.child(&name).and_then(|id| self.tree.get(id)) {
            Some(existing) if existing.is_dir() => Err(Error::already_exists(name)),
            _ => Ok(name),
        }
    }

    /// Attaches `id` under `dir`, tearing down a file it displaces
    fn insert_entry(&mut self, dir: NodeID, id: NodeID) -> Result<()> {
        if let Some(displaced) = self.tree.attach(dir, id)? {
            self.tree.node_mut(displaced)?.set_parent(None);
            self.teardown(displaced)?;
        }
        Ok(())
    }

    /// Destroys a detached subtree. Symbolic links to any of its nodes are
    /// cleared; hard-linked files survive in detached form.
    fn teardown(&mut self, id: NodeID) -> Result<()> {
        for next in self.tree.subtree(id) {
            let node = self.tree.node(next)?;
            let symlinks: Vec<String> = node.links(LinkKind::Symbolic).iter().cloned().collect();
            let keep = node.hard_link_count() > 0;

            for name in &symlinks {
                self.links.clear_if_targets(name, next);
            }

            if keep {
                let node = self.tree.node_mut(next)?;
                node.set_parent(None);
                for name in &symlinks {
                    node.remove_link(LinkKind::Symbolic, name);
                }
            } else {
                self.tree.release(next);
            }
        }
        Ok(())
    }

    fn remove_link(&mut self, name: &str) -> Result<String> {
        if let Some(link) = self.links.remove(name) {
            self.unhook(&link)?;
            log_debug!("removed {kind} {name}", kind: link.kind().to_string(), name: name);
        }
        Ok(name.to_string())
    }

    /// Forgets `link` on its target, freeing a detached target that has
    /// no hard links left.
    fn unhook(&mut self, link: &Link) -> Result<()> {
        let Some(target) = link.target() else {
            return Ok(());
        };
        let Ok(node) = self.tree.node_mut(target) else {
            return Ok(());
        };

        node.remove_link(link.kind(), link.name());
        let orphaned = node.parent().is_none() && node.hard_link_count() == 0;
        if orphaned {
            self.tree.release(target);
        }
        Ok(())
    }
}
