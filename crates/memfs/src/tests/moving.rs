// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Error;
use crate::fs::FileSystem;

#[test]
fn test_move_file() {
    let mut fs = FileSystem::new();

    fs.mkdir("dir1").unwrap();
    assert_eq!(fs.mv_file("file1", "dir1"), Err(Error::file_not_found("file1")));

    fs.mkfile("file1").unwrap();
    assert_eq!(fs.mv_file("file1", "dir2"), Err(Error::directory_not_found("dir2")));

    fs.mkdir("dir2").unwrap();
    assert_eq!(fs.mv_file("dir1", "dir2"), Err(Error::cannot_move_directory("dir1")));

    fs.mkfile("file2").unwrap();
    assert_eq!(fs.mv_file("file2", "file1"), Err(Error::directory_not_found("file1")));

    assert_eq!(fs.mv_file("file1", "dir1"), Ok("dir1".to_string()));
    assert_eq!(fs.mv_file("file2", "dir1/"), Ok("dir1".to_string()));
    assert_eq!(fs.ls(None), Ok("dir1 dir2".to_string()));
    assert_eq!(fs.ls(Some("dir1")), Ok("file1 file2".to_string()));
}

#[test]
fn test_move_renames_on_collision() {
    let mut fs = FileSystem::new();
    fs.mkdir("dest").unwrap();
    fs.cd("dest").unwrap();
    fs.mkfile("a.txt").unwrap();
    fs.write_file("a.txt", ["already here"]).unwrap();
    fs.cd("..").unwrap();

    fs.mkfile("a.txt").unwrap();
    fs.write_file("a.txt", ["moved"]).unwrap();
    assert_eq!(fs.mv_file("a.txt", "dest"), Ok("dest".to_string()));

    assert_eq!(fs.ls(None), Ok("dest".to_string()));
    fs.cd("dest").unwrap();
    assert_eq!(fs.ls(None), Ok("a.txt a1.txt".to_string()));
    assert_eq!(fs.read_file("a1.txt"), Ok("moved".to_string()));
    assert_eq!(fs.read_file("a.txt"), Ok("already here".to_string()));
    assert_eq!(fs.find("a1.txt", true), vec!["/dest/a1.txt".to_string()]);
}

#[test]
fn test_move_with_relative_and_home_targets() {
    let mut fs = FileSystem::new();
    fs.mkdir("a").unwrap();
    fs.mkdir("a/b").unwrap();
    fs.cd("a/b").unwrap();
    fs.mkfile("f").unwrap();

    assert_eq!(fs.mv_file("f", ".."), Ok("..".to_string()));
    fs.cd("..").unwrap();
    assert_eq!(fs.ls(None), Ok("b f".to_string()));

    assert_eq!(fs.mv_file("f", "~"), Ok("~".to_string()));
    assert_eq!(fs.ls(Some("~")), Ok("a f".to_string()));
}

#[test]
fn test_move_into_same_directory_keeps_name() {
    let mut fs = FileSystem::new();
    fs.mkfile("same").unwrap();
    fs.write_file("same", ["data"]).unwrap();
    assert_eq!(fs.mv_file("same", "/"), Ok(String::new()));
    assert_eq!(fs.ls(None), Ok("same".to_string()));
    assert_eq!(fs.read_file("same"), Ok("data".to_string()));
}

#[test]
fn test_move_onto_directory_name_fails_cleanly() {
    let mut fs = FileSystem::new();
    fs.mkdir("dest").unwrap();
    fs.mkdir("dest/report").unwrap();
    fs.mkfile("report").unwrap();
    assert_eq!(fs.mv_file("report", "dest"), Err(Error::already_exists("report")));
    assert_eq!(fs.ls(None), Ok("dest report".to_string()));
}
