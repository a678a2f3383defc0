use configurer_core::ConfigurerError;
use configurer_core::types::ConfigScope;

#[test]
fn parses_known_scopes_case_insensitively() {
    assert_eq!("local".parse::<ConfigScope>().unwrap(), ConfigScope::Local);
    assert_eq!("GLOBAL".parse::<ConfigScope>().unwrap(), ConfigScope::Global);
    assert_eq!("All".parse::<ConfigScope>().unwrap(), ConfigScope::All);
}

#[test]
fn unknown_scope_is_invalid() {
    let err = "shared".parse::<ConfigScope>().unwrap_err();
    assert!(matches!(err, ConfigurerError::InvalidScope(ref s) if s == "shared"));
}

#[test]
fn only_all_is_read_only() {
    assert!(ConfigScope::Local.is_writable());
    assert!(ConfigScope::Global.is_writable());
    assert!(!ConfigScope::All.is_writable());
    assert_eq!(ConfigScope::All.to_string(), "all");
}
