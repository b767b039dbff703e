// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Leading marker for paths resolved from the root
pub const HOME: char = '~';

pub const PARENT_DIR: &str = "..";
pub const CUR_DIR: &str = ".";

/// Where resolution of a path begins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    Root,
    Current,
}

/// A path split into its segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    pub start: Start,
    pub segments: Vec<&'a str>,
}

impl<'a> ParsedPath<'a> {
    /// Splits `path` on `/`, dropping empty and whitespace-only segments.
    /// A leading `~` is consumed and makes the path start at the root.
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        let (start, rest) = match path.strip_prefix(HOME) {
            Some(rest) => (Start::Root, rest),
            None => (Start::Current, path),
        };
        Self {
            start,
            segments: split(rest),
        }
    }

    /// Final segment, if any
    #[must_use]
    pub fn leaf(&self) -> Option<&'a str> {
        self.segments.last().copied()
    }

    /// All segments but the last
    #[must_use]
    pub fn parent_segments(&self) -> &[&'a str] {
        match self.segments.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}

/// Splits a path into its non-blank segments
#[must_use]
pub fn split(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|seg| !seg.trim().is_empty())
        .collect()
}

/// Strips leading and trailing separators
#[must_use]
pub fn trim_separators(path: &str) -> &str {
    path.trim_matches(SEPARATOR)
}

/// True for names that may not label a new entry
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    name == CUR_DIR || name == PARENT_DIR
}

/// One-shot rename applied when a file name is already taken.
///
/// `a.txt` becomes `a1.txt`; a name with zero or several dots gets `1`
/// appended. The result is not checked for a second collision.
#[must_use]
pub fn collision_name(name: &str) -> String {
    let parts: Vec<&str> = name.split('.').collect();
    match parts.as_slice() {
        [stem, ext] => format!("{stem}1.{ext}"),
        _ => format!("{name}1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("/home/test"), vec!["home", "test"]);
        assert_eq!(split("a//b/ /c/"), vec!["a", "b", "c"]);
        assert_eq!(split(" "), Vec::<&str>::new());
        assert_eq!(split(""), Vec::<&str>::new());
        assert_eq!(split("../x"), vec!["..", "x"]);
    }

    #[test]
    fn test_parse_home() {
        let parsed = ParsedPath::parse("~/dir1/dir2");
        assert_eq!(parsed.start, Start::Root);
        assert_eq!(parsed.segments, vec!["dir1", "dir2"]);

        let parsed = ParsedPath::parse("~");
        assert_eq!(parsed.start, Start::Root);
        assert!(parsed.segments.is_empty());

        let parsed = ParsedPath::parse("/dir1");
        assert_eq!(parsed.start, Start::Current);
        assert_eq!(parsed.segments, vec!["dir1"]);
    }

    #[test]
    fn test_leaf_and_parent() {
        let parsed = ParsedPath::parse("a/b/c");
        assert_eq!(parsed.leaf(), Some("c"));
        assert_eq!(parsed.parent_segments(), &["a", "b"]);

        let parsed = ParsedPath::parse("solo");
        assert_eq!(parsed.leaf(), Some("solo"));
        assert!(parsed.parent_segments().is_empty());

        let parsed = ParsedPath::parse("///");
        assert_eq!(parsed.leaf(), None);
        assert!(parsed.parent_segments().is_empty());
    }

    #[test]
    fn test_collision_name() {
        assert_eq!(collision_name("a.txt"), "a1.txt");
        assert_eq!(collision_name("a"), "a1");
        assert_eq!(collision_name("archive.tar.gz"), "archive.tar.gz1");
        assert_eq!(collision_name(".bashrc"), "1.bashrc");
    }

    #[test]
    fn test_trim_and_reserved() {
        assert_eq!(trim_separators("/dir1/"), "dir1");
        assert_eq!(trim_separators("dir1"), "dir1");
        assert!(is_reserved(".."));
        assert!(is_reserved("."));
        assert!(!is_reserved("..."));
    }
}
