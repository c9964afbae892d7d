use dsc_fs::{EditPaths, io};
use std::fs;
use std::io::{Read, Write};
use tempfile::TempDir;

#[test]
fn test_open_source_reads_content() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("Board.dsc");
    fs::write(&file_path, "[Components]\n").unwrap();

    let mut reader = io::open_source(&file_path).unwrap();
    let mut content = String::new();
    reader.read_to_string(&mut content).unwrap();
    assert_eq!(content, "[Components]\n");
}

#[test]
fn test_create_destination_truncates_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("out.tmp");
    fs::write(&file_path, "stale content that is long").unwrap();

    let mut writer = io::create_destination(&file_path).unwrap();
    writer.write_all(b"fresh").unwrap();
    io::finish_destination(writer, &file_path).unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh");
}

#[test]
fn test_replace_with_backup_swaps_files() {
    let temp = TempDir::new().unwrap();
    let paths = EditPaths::for_source(temp.path().join("Board.dsc"));
    fs::write(&paths.source, "original").unwrap();
    fs::write(&paths.temp, "edited").unwrap();

    io::replace_with_backup(&paths).unwrap();

    assert_eq!(fs::read_to_string(&paths.source).unwrap(), "edited");
    assert_eq!(fs::read_to_string(&paths.backup).unwrap(), "original");
    assert!(!paths.temp.exists());
}

#[test]
fn test_replace_with_backup_overwrites_stale_backup() {
    let temp = TempDir::new().unwrap();
    let paths = EditPaths::for_source(temp.path().join("Board.dsc"));
    fs::write(&paths.source, "second").unwrap();
    fs::write(&paths.backup, "first").unwrap();
    fs::write(&paths.temp, "third").unwrap();

    io::replace_with_backup(&paths).unwrap();

    assert_eq!(fs::read_to_string(&paths.source).unwrap(), "third");
    assert_eq!(fs::read_to_string(&paths.backup).unwrap(), "second");
}

#[test]
fn test_replace_without_temp_restores_source() {
    let temp = TempDir::new().unwrap();
    let paths = EditPaths::for_source(temp.path().join("Board.dsc"));
    fs::write(&paths.source, "original").unwrap();

    let result = io::replace_with_backup(&paths);

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&paths.source).unwrap(), "original");
}

#[test]
fn test_discard_removes_partial_output() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("Board.dsc.tmp");
    fs::write(&file_path, "partial").unwrap();

    io::discard(&file_path);
    assert!(!file_path.exists());

    // Second call on a missing file is a no-op
    io::discard(&file_path);
}
