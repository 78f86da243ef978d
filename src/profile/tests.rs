//! Tests for ProfileStore

use super::store::write_or_remove;
use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use test_case::test_case;

fn sample_config() -> ClientConfig {
    ClientConfig::new("https://api.example.com", "key", "secret", "client-1")
}

// ============================================================================
// Path Tests
// ============================================================================

#[test]
fn test_default_profile_path() {
    let store = ProfileStore::new("/tmp/e3db");
    assert_eq!(
        store.path_for("").unwrap(),
        std::path::PathBuf::from("/tmp/e3db/e3db.json")
    );
}

#[test]
fn test_named_profile_path() {
    let store = ProfileStore::new("/tmp/e3db");
    assert_eq!(
        store.path_for("work").unwrap(),
        std::path::PathBuf::from("/tmp/e3db/work/e3db.json")
    );
}

#[test_case(".." ; "parent dir")]
#[test_case("." ; "current dir")]
#[test_case("a/b" ; "nested")]
#[test_case("/etc" ; "absolute")]
#[test_case("a\\b" ; "backslash")]
fn test_invalid_profile_names(name: &str) {
    let store = ProfileStore::new("/tmp/e3db");
    assert!(matches!(
        store.path_for(name),
        Err(Error::InvalidProfile { .. })
    ));
    assert!(!store.exists(name));
}

#[test]
fn test_display_name() {
    assert_eq!(display_name(""), "(default)");
    assert_eq!(display_name("work"), "work");
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let store = ProfileStore::new(dir.path());

    assert!(!store.exists("work"));
    store.save("work", &sample_config()).unwrap();
    assert!(store.exists("work"));
    assert!(!store.exists(""));

    let loaded = store.load("work").unwrap();
    assert_eq!(loaded, sample_config());
}

#[test]
fn test_save_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let store = ProfileStore::new(dir.path());

    store.save("", &sample_config()).unwrap();

    let mut other = sample_config();
    other.client_id = "client-2".to_string();
    let err = store.save("", &other).unwrap_err();
    assert!(matches!(err, Error::ProfileExists { ref name } if name == "(default)"));

    // Original contents survive
    assert_eq!(store.load("").unwrap().client_id, "client-1");
}

#[test]
fn test_failed_write_leaves_no_profile() {
    let dir = tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    let path = store.path_for("work").unwrap();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{\"version\":").unwrap();

    let err = write_or_remove(&path, || Err(std::io::Error::other("disk full"))).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!path.exists());
    assert!(!store.exists("work"));

    // The name is free for a retry
    store.save("work", &sample_config()).unwrap();
    assert_eq!(store.load("work").unwrap(), sample_config());
}

#[test]
fn test_successful_write_keeps_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("e3db.json");
    std::fs::write(&path, "{}").unwrap();

    write_or_remove(&path, || Ok(())).unwrap();
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn test_save_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    let path = store.save("", &sample_config()).unwrap();

    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_load_missing_profile() {
    let dir = tempdir().unwrap();
    let store = ProfileStore::new(dir.path());

    let err = store.load("missing").unwrap_err();
    assert!(matches!(err, Error::ProfileNotFound { ref name } if name == "missing"));
}

#[test]
fn test_load_invalid_profile_file() {
    let dir = tempdir().unwrap();
    let store = ProfileStore::new(dir.path());
    std::fs::write(dir.path().join("e3db.json"), "{not json").unwrap();

    let err = store.load("").unwrap_err();
    assert!(err.to_string().contains("Invalid profile file"));
}
