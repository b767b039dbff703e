// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::node::NodeID;

pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur in filesystem operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("File {0} does not exist")]
    FileNotFound(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Must provide at least one name")]
    EmptyName,

    #[error("Entry already exists: {0}")]
    AlreadyExists(String),

    #[error("Directory {0} is not empty. Use the recursive option")]
    NonEmptyDirectory(String),

    #[error("Cannot remove file {0} recursively")]
    RecursiveRemoveOfFile(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("File {0} is a directory; cannot move")]
    CannotMoveDirectory(String),

    #[error("Cannot create a hard link to directory {0}")]
    HardLinkToDirectory(String),

    #[error("Link with name {0} already exists")]
    LinkAlreadyExists(String),

    #[error("Exceeded max file size: size={size}, max={max}")]
    FileTooLarge { size: usize, max: usize },

    /// A node id no longer refers to a live node.
    #[error("Stale node reference: {0}")]
    StaleNode(NodeID),
}

impl Error {
    pub fn directory_not_found<S: AsRef<str>>(name: S) -> Self {
        Error::DirectoryNotFound(name.as_ref().to_string())
    }

    pub fn file_not_found<S: AsRef<str>>(name: S) -> Self {
        Error::FileNotFound(name.as_ref().to_string())
    }

    pub fn invalid_name<S: AsRef<str>>(name: S) -> Self {
        Error::InvalidName(name.as_ref().to_string())
    }

    pub fn empty_name() -> Self {
        Error::EmptyName
    }

    pub fn already_exists<S: AsRef<str>>(name: S) -> Self {
        Error::AlreadyExists(name.as_ref().to_string())
    }

    pub fn non_empty_directory<S: AsRef<str>>(name: S) -> Self {
        Error::NonEmptyDirectory(name.as_ref().to_string())
    }

    pub fn recursive_remove_of_file<S: AsRef<str>>(name: S) -> Self {
        Error::RecursiveRemoveOfFile(name.as_ref().to_string())
    }

    pub fn not_a_directory<S: AsRef<str>>(name: S) -> Self {
        Error::NotADirectory(name.as_ref().to_string())
    }

    pub fn cannot_move_directory<S: AsRef<str>>(name: S) -> Self {
        Error::CannotMoveDirectory(name.as_ref().to_string())
    }

    pub fn hard_link_to_directory<S: AsRef<str>>(name: S) -> Self {
        Error::HardLinkToDirectory(name.as_ref().to_string())
    }

    pub fn link_already_exists<S: AsRef<str>>(name: S) -> Self {
        Error::LinkAlreadyExists(name.as_ref().to_string())
    }

    pub fn file_too_large(size: usize, max: usize) -> Self {
        Error::FileTooLarge { size, max }
    }

    pub fn stale_node(id: NodeID) -> Self {
        Error::StaleNode(id)
    }
}
