// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::fs::FileSystem;

#[test]
fn test_rm() {
    let mut fs = FileSystem::new();
    fs.mkdir("dir1").unwrap();
    fs.mkdir("dir1/dir2").unwrap();

    assert_eq!(fs.rm("/dir1", false), Err(Error::non_empty_directory("dir1")));
    assert_eq!(fs.rm("/test", false), Err(Error::directory_not_found("test")));

    assert_eq!(fs.rm("/dir1", true), Ok("dir1".to_string()));
    assert_eq!(fs.ls(None), Ok(String::new()));
    assert_eq!(fs.tree().live_count(), 1);
}

#[test]
fn test_rm_file_and_empty_directory() {
    let mut fs = FileSystem::new();
    fs.mkfile("f.txt").unwrap();
    fs.mkdir("empty").unwrap();

    assert_eq!(fs.rm("f.txt", true), Err(Error::recursive_remove_of_file("f.txt")));
    assert_eq!(fs.rm("f.txt", false), Ok("f.txt".to_string()));
    assert_eq!(fs.rm("empty/", false), Ok("empty".to_string()));
    assert_eq!(fs.ls(None), Ok(String::new()));
}

#[test]
fn test_rm_only_looks_in_working_directory() {
    let mut fs = FileSystem::new();
    fs.mkdir("a").unwrap();
    fs.mkdir("a/b").unwrap();
    assert_eq!(fs.rm("a/b", true), Err(Error::directory_not_found("a/b")));
    assert_eq!(fs.ls(Some("a")), Ok("b".to_string()));
}

#[test]
fn test_rm_recursive_releases_subtree() {
    let mut fs = FileSystem::new();
    fs.mkdir("top").unwrap();
    fs.mkdir("top/mid").unwrap();
    fs.mkdir("top/mid/leaf").unwrap();
    fs.cd("top/mid").unwrap();
    fs.mkfile("inner.txt").unwrap();
    fs.cd("~").unwrap();
    fs.mkfile("keep.txt").unwrap();
    assert_eq!(fs.tree().live_count(), 6);

    fs.rm("top", true).unwrap();
    assert_eq!(fs.ls(None), Ok("keep.txt".to_string()));
    assert_eq!(fs.tree().live_count(), 2);
    assert!(fs.find("inner.txt", true).is_empty());
}
