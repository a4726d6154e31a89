//! `exists` and `is_directory` against a real directory tree.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use wide_fs::{ErrorKind, WideFs, WideFsError};

fn s(p: &std::path::Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

#[test]
fn exists_reports_files_and_directories() {
    let td = TempDir::new().unwrap();
    let file = td.child("notes.txt");
    file.write_str("hello").unwrap();
    let dir = td.child("sub");
    dir.create_dir_all().unwrap();

    let fs = WideFs::default();
    assert!(fs.exists(s(file.path())).unwrap());
    assert!(fs.exists(s(dir.path())).unwrap());
}

#[test]
fn missing_paths_are_false_not_errors() {
    let td = TempDir::new().unwrap();
    let fs = WideFs::default();
    assert!(!fs.exists("/definitely/missing/path").unwrap());
    assert!(!fs.exists(s(&td.path().join("absent.txt"))).unwrap());
    assert!(!fs.exists(s(&td.path().join("no").join("such").join("dir"))).unwrap());
}

#[test]
fn exists_raises_for_failures_other_than_not_found() {
    let fs = WideFs::default();
    let err = fs.exists("bad\0name").unwrap_err();
    assert_eq!(err.op(), "file_exists");
    assert!(matches!(err, WideFsError::EncodingConversion { .. }));
}

#[cfg(unix)]
#[test]
fn exists_raises_permission_denied() {
    use std::os::unix::fs::PermissionsExt;
    // root bypasses directory permissions
    if unsafe { libc::geteuid() } == 0 {
        return;
    }
    let td = TempDir::new().unwrap();
    let locked = td.child("locked");
    locked.create_dir_all().unwrap();
    std::fs::set_permissions(locked.path(), std::fs::Permissions::from_mode(0o000)).unwrap();

    let result = WideFs::default().exists(s(&locked.path().join("inner")));
    std::fs::set_permissions(locked.path(), std::fs::Permissions::from_mode(0o700)).unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
}

#[test]
fn is_directory_distinguishes_files_and_directories() {
    let td = TempDir::new().unwrap();
    let file = td.child("a.bin");
    file.touch().unwrap();
    let dir = td.child("ünïcode dir");
    dir.create_dir_all().unwrap();

    let fs = WideFs::default();
    assert!(fs.is_directory(s(dir.path())).unwrap());
    assert!(!fs.is_directory(s(file.path())).unwrap());
}

#[test]
fn is_directory_on_missing_path_is_a_platform_error() {
    let td = TempDir::new().unwrap();
    let missing = td.path().join("ghost");
    let err = WideFs::default().is_directory(s(&missing)).unwrap_err();
    assert!(matches!(err, WideFsError::Platform { .. }));
    assert_eq!(err.op(), "is_directory");
    assert_eq!(err.path(), Some(s(&missing)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_still_exists() {
    let td = TempDir::new().unwrap();
    let link = td.path().join("dangling");
    std::os::unix::fs::symlink(td.path().join("gone"), &link).unwrap();

    let fs = WideFs::default();
    assert!(fs.exists(s(&link)).unwrap());
    assert!(!fs.is_directory(s(&link)).unwrap());
}

#[cfg(unix)]
#[test]
fn symlink_to_directory_is_a_directory() {
    let td = TempDir::new().unwrap();
    let dir = td.child("real");
    dir.create_dir_all().unwrap();
    let link = td.path().join("alias");
    std::os::unix::fs::symlink(dir.path(), &link).unwrap();

    assert!(WideFs::default().is_directory(s(&link)).unwrap());
}
