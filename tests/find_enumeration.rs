//! Wildcard directory enumeration.

use std::collections::BTreeSet;
use std::path::Path;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use wide_fs::{ErrorKind, SearchHandle, WideFs};

fn pattern(dir: &Path, mask: &str) -> String {
    dir.join(mask).to_str().expect("utf-8 temp path").to_owned()
}

/// Drain a search, counting the `find_next` calls that produced a name.
fn drain(fs: &WideFs, first: String, mut search: SearchHandle) -> (Vec<String>, usize) {
    let mut names = vec![first];
    let mut next_hits = 0;
    while let Some(name) = fs.find_next(&mut search).unwrap() {
        names.push(name);
        next_hits += 1;
    }
    search.close().unwrap();
    (names, next_hits)
}

#[test]
fn no_match_is_end_of_sequence() {
    let td = TempDir::new().unwrap();
    td.child("a.txt").touch().unwrap();
    let found = WideFs::default().find_first(&pattern(td.path(), "*.none")).unwrap();
    assert!(found.is_none());
}

#[test]
fn missing_directory_is_an_error() {
    let td = TempDir::new().unwrap();
    let err = WideFs::default()
        .find_first(&pattern(&td.path().join("nope"), "*"))
        .unwrap_err();
    assert_eq!(err.op(), "opendir");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn every_match_is_reported_once() {
    let td = TempDir::new().unwrap();
    let expected: BTreeSet<String> = ["one.txt", "two.txt", "three.txt", "fünf.txt", "😀.txt"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    for name in &expected {
        td.child(name).touch().unwrap();
    }
    td.child("skip.log").touch().unwrap();

    let fs = WideFs::default();
    let (first, search) = fs.find_first(&pattern(td.path(), "*.txt")).unwrap().expect("matches");
    let (names, next_hits) = drain(&fs, first, search);

    assert_eq!(next_hits, expected.len() - 1);
    assert_eq!(names.len(), expected.len());
    assert_eq!(names.into_iter().collect::<BTreeSet<_>>(), expected);
}

#[test]
fn star_lists_dot_entries_and_subdirectories() {
    let td = TempDir::new().unwrap();
    td.child("file").touch().unwrap();
    td.child("child").create_dir_all().unwrap();

    let fs = WideFs::default();
    let (first, search) = fs.find_first(&pattern(td.path(), "*")).unwrap().expect("entries");
    let (names, _) = drain(&fs, first, search);
    let names: BTreeSet<_> = names.into_iter().collect();
    let expected: BTreeSet<String> = [".", "..", "child", "file"].into_iter().map(str::to_owned).collect();
    assert_eq!(names, expected);
}

#[test]
fn question_mark_matches_one_character() {
    let td = TempDir::new().unwrap();
    for name in ["a1.rs", "a22.rs", "b1.rs"] {
        td.child(name).touch().unwrap();
    }
    let fs = WideFs::default();
    let (first, search) = fs.find_first(&pattern(td.path(), "a?.rs")).unwrap().expect("one match");
    let (names, next_hits) = drain(&fs, first, search);
    assert_eq!(names, vec!["a1.rs".to_owned()]);
    assert_eq!(next_hits, 0);
}

#[test]
fn exhausted_search_stays_exhausted() {
    let td = TempDir::new().unwrap();
    td.child("only.dat").touch().unwrap();
    let fs = WideFs::default();
    let (first, mut search) = fs.find_first(&pattern(td.path(), "*.dat")).unwrap().expect("one match");
    assert_eq!(first, "only.dat");
    assert_eq!(fs.find_next(&mut search).unwrap(), None);
    assert_eq!(fs.find_next(&mut search).unwrap(), None);
    search.close().unwrap();
}

#[test]
fn exact_name_pattern_finds_single_entry() {
    let td = TempDir::new().unwrap();
    td.child("report [final].pdf").touch().unwrap();
    let fs = WideFs::default();
    let (first, search) = fs
        .find_first(&pattern(td.path(), "report [final].pdf"))
        .unwrap()
        .expect("literal brackets match");
    assert_eq!(first, "report [final].pdf");
    search.close().unwrap();
}
