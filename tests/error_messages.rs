//! Error values carry op, path, a mapped kind and an actionable hint.

use std::io;

use tempfile::tempdir;
use wide_fs::maperr::{is_not_found_code, map_win32};
use wide_fs::win32;
use wide_fs::{ErrorKind, OpenFlags, WideFs, WideFsError};

#[test]
fn not_found_message_has_context_and_hint() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nothing.txt");
    let missing = missing.to_str().unwrap();

    let err = WideFs::default().open(missing, OpenFlags::READ_ONLY, 0).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with(&format!("open '{missing}': no such file or directory")), "{msg}");
    assert!(msg.contains("verify it exists"), "{msg}");
    assert_eq!(err.raw_os_error(), Some(win32::ERROR_FILE_NOT_FOUND));
}

#[test]
fn already_exists_message_suggests_unique_name() {
    let td = tempdir().unwrap();
    let path = td.path().join("dup.txt");
    std::fs::write(&path, b"x").unwrap();

    let err = WideFs::default()
        .open(path.to_str().unwrap(), OpenFlags::WRITE_ONLY | OpenFlags::CREATE | OpenFlags::EXCLUSIVE, 0o644)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert!(err.to_string().contains("pick a unique name"));
}

#[test]
fn converts_into_io_error_with_matching_kind() {
    let err = WideFs::default().is_directory("/definitely/missing/path").unwrap_err();
    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    assert!(io_err.get_ref().is_some_and(|inner| inner.is::<WideFsError>()));
}

#[test]
fn encoding_failures_are_invalid_input() {
    let err = WideFs::default().is_directory("nul\0inside").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(io::Error::from(err).kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn mapping_table_covers_common_codes() {
    assert_eq!(map_win32(win32::ERROR_TOO_MANY_OPEN_FILES), ErrorKind::TooManyOpenFiles);
    assert_eq!(map_win32(win32::ERROR_DIR_NOT_EMPTY), ErrorKind::DirectoryNotEmpty);
    assert_eq!(map_win32(win32::ERROR_BROKEN_PIPE), ErrorKind::BrokenPipe);
    assert_eq!(map_win32(win32::ERROR_NOT_ENOUGH_MEMORY), ErrorKind::OutOfMemory);
    assert_eq!(map_win32(win32::ERROR_INVALID_HANDLE), ErrorKind::BadHandle);
    assert_eq!(map_win32(win32::ERROR_LOCK_VIOLATION), ErrorKind::PermissionDenied);
    assert_eq!(map_win32(win32::ERROR_DIRECTORY), ErrorKind::NotADirectory);
    assert_eq!(map_win32(99_999), ErrorKind::Unknown(99_999));
    assert!(is_not_found_code(win32::ERROR_PATH_NOT_FOUND));
    assert!(!is_not_found_code(win32::ERROR_INVALID_NAME));
}
