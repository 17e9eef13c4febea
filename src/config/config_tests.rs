use super::*;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage_path, None);
    assert_eq!(config.data_dir, None);
    assert_eq!(config.get_platform(), None);
}

#[test]
fn test_default_paths_are_expanded() {
    let config = Config::default();
    let storage = config.get_storage_path();
    assert!(!storage.to_string_lossy().starts_with('~'));
    assert!(storage.ends_with(".adobe-keys/storage.json"));
    assert!(config.get_data_dir().ends_with(".adobe-keys/data"));
}

#[test]
fn test_config_deserialization_camel_case() {
    let json = r#"{"storagePath": "/tmp/keys.json", "dataDir": "/srv/keys", "platform": "MacIntel"}"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.get_storage_path(), PathBuf::from("/tmp/keys.json"));
    assert_eq!(config.get_data_dir(), PathBuf::from("/srv/keys"));
    assert_eq!(config.get_platform(), Some("MacIntel"));
}

#[test]
fn test_blank_platform_is_ignored() {
    let config = Config {
        platform: Some("  ".to_string()),
        ..Default::default()
    };
    assert_eq!(config.get_platform(), None);
}

#[test]
fn test_serialization_skips_unset_fields() {
    let config = Config {
        data_dir: Some("/srv/keys".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"dataDir":"/srv/keys"}"#);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_valid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"platform": "Win32"}"#).unwrap();
    let config = load_config(&path);
    assert_eq!(config.get_platform(), Some("Win32"));
}

#[test]
fn test_load_invalid_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ storagePath: nope").unwrap();
    assert_eq!(load_config(&path), Config::default());
}

#[test]
fn test_default_config_path() {
    assert!(default_config_path().ends_with(".adobe-keys/config.json"));
}
