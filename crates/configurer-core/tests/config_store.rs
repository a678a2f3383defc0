use tempfile::TempDir;

use configurer_core::config::{ConfigDocument, ConfigValue, DocumentStore};

#[test]
fn read_missing_returns_empty_document() {
    let temp = TempDir::new().unwrap();

    let doc = DocumentStore.read(&temp.path().join("missing.toml"));

    assert!(doc.is_empty());
}

#[test]
fn read_corrupt_returns_empty_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();

    let doc = DocumentStore.read(&path);

    assert!(doc.is_empty());
}

#[test]
fn write_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("config.toml");

    DocumentStore.write(&path, &ConfigDocument::new()).unwrap();

    assert!(path.exists());
}

#[test]
fn write_then_read_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut doc = ConfigDocument::new();
    doc.insert("name", "configurer");
    doc.insert_path(
        &["server".to_string(), "port".to_string()],
        ConfigValue::Integer(8080),
    );
    DocumentStore.write(&path, &doc).unwrap();

    assert_eq!(DocumentStore.read(&path), doc);
}

#[test]
fn write_overwrites_previous_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "stale = true\n").unwrap();

    let mut doc = ConfigDocument::new();
    doc.insert("fresh", true);
    DocumentStore.write(&path, &doc).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.contains("fresh = true"));
}

#[test]
fn written_file_is_plain_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut doc = ConfigDocument::new();
    doc.insert_path(
        &["server".to_string(), "port".to_string()],
        ConfigValue::Integer(8080),
    );
    DocumentStore.write(&path, &doc).unwrap();

    let parsed: toml::Table = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["server"]["port"].as_integer(), Some(8080));
}
