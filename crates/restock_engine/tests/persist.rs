use std::fs;

use restock_engine::write_atomic;
use tempfile::TempDir;

#[test]
fn creates_missing_parent_dir() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state").join("last_known.ron");
    assert!(!path.parent().unwrap().exists());

    write_atomic(&path, "hello").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
}

#[test]
fn replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("last_known.ron");

    write_atomic(&path, "first").unwrap();
    write_atomic(&path, "second").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "second");
}

#[test]
fn no_partial_file_when_parent_is_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let target = blocker.join("last_known.ron");
    let result = write_atomic(&target, "data");
    assert!(result.is_err());
    assert!(!target.exists());
}
