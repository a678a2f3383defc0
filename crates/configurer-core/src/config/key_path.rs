//! Dotted config name parsing.

use std::fmt;

use crate::error::{ConfigurerError, Result};
use crate::settings::InitSettings;

/// Ordered path segments addressing a value inside a config document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Split `name` on `.` after applying the case policy from `settings`.
    ///
    /// With `must_two_texts` enabled, names with a single segment are
    /// rejected with [`ConfigurerError::InvalidKeyFormat`].
    pub fn parse(name: &str, settings: &InitSettings) -> Result<Self> {
        let normalized = normalize_name(name, settings);
        let segments: Vec<String> = normalized.split('.').map(str::to_string).collect();

        if settings.must_two_texts && segments.len() < 2 {
            return Err(ConfigurerError::InvalidKeyFormat(name.to_string()));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Apply the `Case-sensitive` policy to a raw config name.
pub fn normalize_name(name: &str, settings: &InitSettings) -> String {
    if settings.case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_name() {
        let key = KeyPath::parse("server.http.port", &InitSettings::default()).unwrap();
        assert_eq!(key.segments(), ["server", "http", "port"]);
        assert_eq!(key.to_string(), "server.http.port");
    }

    #[test]
    fn test_parse_single_segment_allowed_by_default() {
        let key = KeyPath::parse("theme", &InitSettings::default()).unwrap();
        assert_eq!(key.segments(), ["theme"]);
    }

    #[test]
    fn test_parse_single_segment_rejected_with_must_two_texts() {
        let settings = InitSettings {
            must_two_texts: true,
            ..InitSettings::default()
        };

        let err = KeyPath::parse("single", &settings).unwrap_err();
        assert!(matches!(err, ConfigurerError::InvalidKeyFormat(ref name) if name == "single"));
        assert!(KeyPath::parse("a.b", &settings).is_ok());
    }

    #[test]
    fn test_parse_case_insensitive_lowercases() {
        let settings = InitSettings {
            case_sensitive: false,
            ..InitSettings::default()
        };

        let key = KeyPath::parse("Server.PORT", &settings).unwrap();
        assert_eq!(key.segments(), ["server", "port"]);
    }

    #[test]
    fn test_parse_keeps_case_by_default() {
        let key = KeyPath::parse("Server.PORT", &InitSettings::default()).unwrap();
        assert_eq!(key.segments(), ["Server", "PORT"]);
    }

    #[test]
    fn test_parse_preserves_empty_segments() {
        let key = KeyPath::parse("a..b", &InitSettings::default()).unwrap();
        assert_eq!(key.segments(), ["a", "", "b"]);
    }
}
