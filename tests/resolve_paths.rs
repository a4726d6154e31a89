//! Full path resolution.

use std::env;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use serial_test::serial;
use tempfile::tempdir;
use wide_fs::WideFs;

fn s(p: &Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

fn assert_normalized(resolved: &str) {
    let p = Path::new(resolved);
    assert!(p.is_absolute(), "{resolved} is not absolute");
    assert!(
        !p.components().any(|c| matches!(c, Component::CurDir | Component::ParentDir)),
        "{resolved} still has dot segments"
    );
}

/// Restores the working directory when dropped.
struct CwdGuard(PathBuf);

impl CwdGuard {
    fn enter(dir: &Path) -> Self {
        let prev = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        CwdGuard(prev)
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

#[test]
fn dot_segments_are_folded_in_absolute_paths() {
    let td = tempdir().unwrap();
    let base = dunce::canonicalize(td.path()).unwrap();
    let sep = MAIN_SEPARATOR;
    let messy = format!("{}{sep}a{sep}.{sep}b{sep}..{sep}c", base.display());

    let resolved = WideFs::default().get_full_path_name(&messy).unwrap();
    assert_eq!(resolved, s(&base.join("a").join("c")));
    assert_normalized(&resolved);
}

#[test]
#[serial]
fn relative_paths_resolve_against_cwd() {
    let td = tempdir().unwrap();
    let base = dunce::canonicalize(td.path()).unwrap();
    let _cwd = CwdGuard::enter(&base);

    let fs = WideFs::default();
    let resolved = fs.get_full_path_name("sub/../x.txt").unwrap();
    assert_eq!(resolved, s(&base.join("x.txt")));
    assert_normalized(&resolved);

    assert_eq!(fs.get_full_path_name(".").unwrap(), s(&base));
}

#[test]
#[serial]
fn resolution_is_idempotent() {
    let td = tempdir().unwrap();
    let base = dunce::canonicalize(td.path()).unwrap();
    let _cwd = CwdGuard::enter(&base);

    let fs = WideFs::default();
    for input in ["a/b/../c", "./d", "ü/../ñ/😀", "x"] {
        let once = fs.get_full_path_name(input).unwrap();
        let twice = fs.get_full_path_name(&once).unwrap();
        assert_eq!(once, twice, "input {input}");
        assert_normalized(&once);
    }
}

#[test]
fn nonexistent_paths_still_resolve() {
    let td = tempdir().unwrap();
    let base = dunce::canonicalize(td.path()).unwrap();
    let ghost = base.join("does").join("not").join("exist.txt");
    assert_eq!(WideFs::default().get_full_path_name(s(&ghost)).unwrap(), s(&ghost));
}

#[test]
fn empty_path_is_an_error() {
    let err = WideFs::default().get_full_path_name("").unwrap_err();
    assert_eq!(err.op(), "get_full_path_name");
    assert_eq!(err.path(), Some(""));
}
