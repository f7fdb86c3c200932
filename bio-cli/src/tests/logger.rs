use crate::logger::open_log_file;

use std::io::Write;

use tempfile::TempDir;

#[test]
fn given_missing_log_directory_when_opened_then_created_and_appended() {
    // Given
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("bio.log");

    // When
    open_log_file(&path).unwrap().write_all(b"one\n").unwrap();
    open_log_file(&path).unwrap().write_all(b"two\n").unwrap();

    // Then
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}
