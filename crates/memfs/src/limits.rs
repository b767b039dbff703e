// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Maximum number of bytes a single file may hold
pub const MAX_FILE_SIZE: usize = 2_000_000;

/// Maximum number of characters returned by a read
pub const MAX_READ_LEN: usize = 2_000;

/// Size budgets enforced by a [`crate::FileSystem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Writes that would grow a file past this many bytes are rejected
    pub max_file_size: usize,

    /// Reads return at most this many characters plus a truncation marker
    pub max_read_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            max_read_len: MAX_READ_LEN,
        }
    }
}

impl Limits {
    /// Marker appended to reads cut at `max_read_len`
    #[must_use]
    pub fn truncation_marker(&self) -> String {
        format!(" ...[truncated contents after {} chars]", self.max_read_len)
    }

    /// Renders file content for display, cutting it at `max_read_len` chars
    #[must_use]
    pub fn display(&self, content: &[u8]) -> String {
        let text = String::from_utf8_lossy(content);
        match text.char_indices().nth(self.max_read_len) {
            Some((cut, _)) => format!("{}{}", &text[..cut], self.truncation_marker()),
            None => text.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = Limits::default();
        assert_eq!(limits.max_file_size, 2_000_000);
        assert_eq!(limits.max_read_len, 2_000);
    }

    #[test]
    fn test_display_truncates_on_chars() {
        let limits = Limits {
            max_read_len: 3,
            ..Limits::default()
        };
        assert_eq!(limits.display(b"abc"), "abc");
        assert_eq!(
            limits.display(b"abcd"),
            "abc ...[truncated contents after 3 chars]"
        );
        // Multi-byte characters count once
        assert_eq!(
            limits.display("héllo".as_bytes()),
            "hél ...[truncated contents after 3 chars]"
        );
    }

    #[test]
    fn test_yaml_partial_document() {
        let limits: Limits = serde_yaml_ng::from_str("max_read_len: 10\n").unwrap();
        assert_eq!(limits.max_read_len, 10);
        assert_eq!(limits.max_file_size, MAX_FILE_SIZE);

        let bad: Result<Limits, _> = serde_yaml_ng::from_str("max_bytes: 10\n");
        assert!(bad.is_err());
    }
}
