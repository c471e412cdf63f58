use std::error::Error;
use std::fs;

use twinpane::io::{FileSystem, StdFileSystem};
use twinpane::{EntryKind, PaneError};

#[test]
fn std_fs_lists_folders_first_with_hidden_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), b"hello").unwrap();
    fs::write(dir.path().join(".hidden"), b"").unwrap();
    fs::create_dir(dir.path().join("Zeta")).unwrap();
    fs::create_dir(dir.path().join("alpha")).unwrap();

    let listing = StdFileSystem.list_directory(dir.path()).unwrap();
    let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["alpha", "Zeta", ".hidden", "b.txt"]);

    let hidden = listing.iter().find(|e| e.name == ".hidden").unwrap();
    assert!(hidden.is_hidden);
    assert_eq!(hidden.kind, EntryKind::File);
    let file = listing.iter().find(|e| e.name == "b.txt").unwrap();
    assert_eq!(file.size, 5);
    assert_eq!(file.path, dir.path().join("b.txt"));
}

#[test]
fn std_fs_listing_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone");
    let err = StdFileSystem.list_directory(&missing).unwrap_err();
    assert!(matches!(err, PaneError::ListingFailed { ref path, .. } if *path == missing));
}

#[test]
fn std_fs_create_file_and_folder() {
    let dir = tempfile::tempdir().unwrap();
    let fs_impl = StdFileSystem;

    fs_impl
        .create_item("notes.txt", dir.path(), EntryKind::File)
        .unwrap();
    fs_impl
        .create_item("projects", dir.path(), EntryKind::Folder)
        .unwrap();

    assert!(dir.path().join("notes.txt").is_file());
    assert!(dir.path().join("projects").is_dir());

    let err = fs_impl
        .create_item("notes.txt", dir.path(), EntryKind::File)
        .unwrap_err();
    assert!(matches!(err, PaneError::CreateFailed { .. }));
}

#[test]
fn std_fs_rename_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"a").unwrap();
    fs::write(dir.path().join("b.txt"), b"b").unwrap();

    StdFileSystem
        .rename_item("a.txt", "c.txt", dir.path())
        .unwrap();
    assert!(!dir.path().join("a.txt").exists());
    assert!(dir.path().join("c.txt").exists());

    let err = StdFileSystem
        .rename_item("c.txt", "b.txt", dir.path())
        .unwrap_err();
    assert!(matches!(err, PaneError::RenameFailed { .. }));
    assert_eq!(fs::read(dir.path().join("b.txt")).unwrap(), b"b");
}

#[test]
fn std_fs_delete_missing_path_keeps_error_chain() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone.txt");
    let err = StdFileSystem.delete_item(&missing).unwrap_err();
    assert!(matches!(err, PaneError::DeleteFailed { ref path, .. } if *path == missing));
    assert!(err.source().is_some());
}
