//! End-to-end lifecycle tests for the configuration engine.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use chat_logger::config::{self, decode, ConfigRecord, ConfigStore};
use chat_logger::{MODULE_VERSION, PROJECT_LINK};

fn document_path(base: &Path) -> PathBuf {
    base.join("config").join("config.json")
}

fn seed_document(base: &Path, text: &str) {
    let dir = base.join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), text).unwrap();
}

#[test]
fn test_first_load_writes_annotated_defaults() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new();

    let record = store.load(dir.path()).unwrap();
    assert_eq!(*record, ConfigRecord::default());

    let text = fs::read_to_string(document_path(dir.path())).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    let field_at = lines
        .iter()
        .position(|line| line.starts_with("  \"Locally_Enable\": 1"))
        .unwrap();
    let expected_comment = [
        "// Save Chat Messages Locally (In ../chat-logger/logs/)?",
        "// 1 = Yes, But Log When Player Chat Direct",
        "// 2 = Yes, But Log And Send All Messages When Round End (Recommended For Performance)",
        "// 3 = Yes, But Log And Send All Messages When Map End (Recommended For Performance)",
        "// 0 = No, Disable",
    ];
    assert_eq!(
        lines[field_at - expected_comment.len()..field_at],
        expected_comment
    );
}

#[test]
fn test_second_load_returns_identical_record() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new();

    let first = store.load(dir.path()).unwrap();
    let second = store.load(dir.path()).unwrap();

    assert_eq!(*first, *second);
}

#[test]
fn test_out_of_range_option_is_repaired_in_memory_and_on_disk() {
    let dir = TempDir::new().unwrap();
    seed_document(dir.path(), r#"{ "Locally_LogMessagesOnly": 9 }"#);

    let store = ConfigStore::new();
    let record = store.load(dir.path()).unwrap();

    assert_eq!(record.locally_log_messages_only, 1);
    // Absent fields zero-fill first; 0 is valid for Locally_Enable but not
    // for Discord_LogMessagesOnly, which gets repaired to its default.
    assert_eq!(record.locally_enable, 0);
    assert_eq!(record.discord_log_messages_only, 1);

    let text = fs::read_to_string(document_path(dir.path())).unwrap();
    assert!(text.contains("\"Locally_LogMessagesOnly\": 1,"));
}

#[test]
fn test_hand_edited_plain_file_gets_reannotated() {
    let dir = TempDir::new().unwrap();
    seed_document(
        dir.path(),
        "{\n  \"Locally_Enable\": 2,\n  \"EnableDebug\": true,\n}\n",
    );

    let store = ConfigStore::new();
    let record = store.load(dir.path()).unwrap();
    assert_eq!(record.locally_enable, 2);
    assert!(record.enable_debug);

    let text = fs::read_to_string(document_path(dir.path())).unwrap();
    assert!(text.contains("// Save Chat Messages Locally (In ../chat-logger/logs/)?"));
    assert!(text.contains("// ----------------------------[ ↓ Discord Config ↓ ]----------------------------"));
    assert!(text.contains("\"Locally_Enable\": 2,"));
    assert!(text.contains("\"EnableDebug\": true"));
}

#[test]
fn test_stale_version_and_link_are_pinned() {
    let dir = TempDir::new().unwrap();
    seed_document(
        dir.path(),
        r#"{ "Version": "0.0.1", "Link": "https://example.com/fork" }"#,
    );

    let store = ConfigStore::new();
    let record = store.load(dir.path()).unwrap();

    assert_eq!(record.version, MODULE_VERSION);
    assert_eq!(record.link, PROJECT_LINK);

    let text = fs::read_to_string(document_path(dir.path())).unwrap();
    assert!(text.contains(&format!("\"Version\": \"{MODULE_VERSION}\"")));
    assert!(text.contains(PROJECT_LINK));
}

#[test]
fn test_persisted_document_decodes_back_to_published_record() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::new();

    let record = store.load(dir.path()).unwrap();
    let text = fs::read_to_string(document_path(dir.path())).unwrap();

    assert_eq!(decode(&text).unwrap(), *record);
}

#[test]
fn test_global_store_lifecycle() {
    let dir = TempDir::new().unwrap();

    assert!(!config::is_loaded());
    assert!(config::get().is_err());

    let record = config::load(dir.path()).unwrap();
    assert!(config::is_loaded());
    assert_eq!(*config::get().unwrap(), *record);
}
