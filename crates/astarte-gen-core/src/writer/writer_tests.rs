#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

#[test]
fn write_outputs___creates_both_files() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");
    let source = dir.path().join("gen.c");

    write_outputs(&[
        OutputFile::new(&header, "header"),
        OutputFile::new(&source, "source"),
    ])
    .unwrap();

    assert_eq!(fs::read_to_string(&header).unwrap(), "header");
    assert_eq!(fs::read_to_string(&source).unwrap(), "source");
}

#[test]
fn write_outputs___overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");
    fs::write(&header, "a much longer previous content").unwrap();

    write_outputs(&[OutputFile::new(&header, "new")]).unwrap();

    assert_eq!(fs::read_to_string(&header).unwrap(), "new");
}

#[test]
fn write_outputs___missing_directory___leaves_other_target_untouched() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");
    fs::write(&header, "previous").unwrap();
    let source = dir.path().join("missing").join("gen.c");

    let result = write_outputs(&[
        OutputFile::new(&header, "header"),
        OutputFile::new(&source, "source"),
    ]);

    assert!(matches!(result, Err(GenError::Io { .. })));
    assert_eq!(fs::read_to_string(&header).unwrap(), "previous");
    assert!(!source.exists());
}

#[test]
fn write_outputs___leaves_no_temporary_files() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");

    write_outputs(&[OutputFile::new(&header, "header")]).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[cfg(unix)]
#[test]
fn write_outputs___files_are_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");

    write_outputs(&[OutputFile::new(&header, "header")]).unwrap();

    let mode = fs::metadata(&header).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn check_outputs___matching_files___ok() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");
    fs::write(&header, "same").unwrap();

    let result = check_outputs(&[OutputFile::new(&header, "same")]);

    assert!(result.is_ok());
}

#[test]
fn check_outputs___different_content___returns_stale() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");
    fs::write(&header, "old").unwrap();

    let result = check_outputs(&[OutputFile::new(&header, "new")]);

    assert!(matches!(result, Err(GenError::Stale { ref path }) if path == &header));
}

#[test]
fn check_outputs___missing_file___returns_stale() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("gen.h");

    let result = check_outputs(&[OutputFile::new(&header, "new")]);

    assert!(matches!(result, Err(GenError::Stale { .. })));
}
