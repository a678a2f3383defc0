//! Init settings controlling path overrides and key policy.
//!
//! Settings are an explicit value threaded through [`crate::Configurer`];
//! they are only written to disk when [`SettingsStore::save`] is called.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::paths::settings_path;
use crate::error::{ConfigurerError, Result};
use crate::types::ConfigScope;

pub const LOCAL_CONFIG_PATH: &str = "local_config_path";
pub const GLOBAL_CONFIG_PATH: &str = "global_config_path";
pub const MUST_TWO_TEXTS: &str = "must_two_texts";
pub const CASE_SENSITIVE: &str = "Case-sensitive";
pub const DEFAULT_CONFIG_TYPE: &str = "default_config_type";

/// Behavioral options shared by every config operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_config_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_config_path: Option<PathBuf>,
    /// Require config names with at least two dotted segments.
    pub must_two_texts: bool,
    /// When false, config names are lowercased; keys already on disk are not.
    #[serde(rename = "Case-sensitive")]
    pub case_sensitive: bool,
    pub default_config_type: ConfigScope,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            local_config_path: None,
            global_config_path: None,
            must_two_texts: false,
            case_sensitive: true,
            default_config_type: ConfigScope::Local,
        }
    }
}

impl InitSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a single option by its textual name.
    pub fn init(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            LOCAL_CONFIG_PATH => self.local_config_path = Some(PathBuf::from(value)),
            GLOBAL_CONFIG_PATH => self.global_config_path = Some(PathBuf::from(value)),
            MUST_TWO_TEXTS => self.must_two_texts = parse_bool(key, value)?,
            CASE_SENSITIVE => self.case_sensitive = parse_bool(key, value)?,
            DEFAULT_CONFIG_TYPE => {
                self.default_config_type = value
                    .parse::<ConfigScope>()
                    .ok()
                    .filter(|scope| scope.is_writable())
                    .ok_or_else(|| invalid_value(key, value))?;
            }
            _ => return Err(ConfigurerError::UnknownSetting(key.to_string())),
        }
        debug!(key, value, "init setting updated");
        Ok(())
    }

    /// Apply several named overrides in order. Stops at the first invalid one.
    pub fn apply<I, K, V>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in overrides {
            self.init(key.as_ref(), value.as_ref())?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn invalid_value(key: &str, value: &str) -> ConfigurerError {
    ConfigurerError::InvalidSettingValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Explicit persistence for [`InitSettings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `<home>/.xystudio/configurer/settings.toml`.
    pub fn from_home(home_dir: &Path) -> Self {
        Self::new(settings_path(home_dir))
    }

    pub fn with_defaults() -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or(ConfigurerError::HomeDirUnavailable)?;
        Ok(Self::from_home(&home_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load persisted settings; a missing file yields the defaults.
    pub fn load(&self) -> Result<InitSettings> {
        if !self.path.exists() {
            return Ok(InitSettings::default());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ConfigurerError::io(&self.path, e))?;
        let settings: InitSettings =
            toml::from_str(&content).map_err(|source| ConfigurerError::SettingsParse {
                path: self.path.clone(),
                source,
            })?;

        if !settings.default_config_type.is_writable() {
            return Err(invalid_value(
                DEFAULT_CONFIG_TYPE,
                settings.default_config_type.as_str(),
            ));
        }
        Ok(settings)
    }

    pub fn save(&self, settings: &InitSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigurerError::io(parent, e))?;
        }
        let content =
            toml::to_string_pretty(settings).map_err(|source| ConfigurerError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        std::fs::write(&self.path, content).map_err(|e| ConfigurerError::io(&self.path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = InitSettings::default();
        assert!(settings.case_sensitive);
        assert!(!settings.must_two_texts);
        assert_eq!(settings.default_config_type, ConfigScope::Local);
        assert!(settings.local_config_path.is_none());
    }

    #[test]
    fn test_init_is_additive() {
        let mut settings = InitSettings::default();
        settings.init(MUST_TWO_TEXTS, "true").unwrap();
        settings.init(GLOBAL_CONFIG_PATH, "/tmp/global.toml").unwrap();

        assert!(settings.must_two_texts);
        assert_eq!(
            settings.global_config_path,
            Some(PathBuf::from("/tmp/global.toml"))
        );
        assert!(settings.case_sensitive);
    }

    #[test]
    fn test_init_rejects_unknown_key() {
        let mut settings = InitSettings::default();
        let err = settings.init("colour", "blue").unwrap_err();
        assert!(matches!(err, ConfigurerError::UnknownSetting(ref key) if key == "colour"));
    }

    #[test]
    fn test_init_rejects_bad_values() {
        let mut settings = InitSettings::default();
        assert!(matches!(
            settings.init(CASE_SENSITIVE, "yes"),
            Err(ConfigurerError::InvalidSettingValue { .. })
        ));
        assert!(matches!(
            settings.init(DEFAULT_CONFIG_TYPE, "all"),
            Err(ConfigurerError::InvalidSettingValue { .. })
        ));
    }

    #[test]
    fn test_apply_many() {
        let mut settings = InitSettings::default();
        settings
            .apply([(CASE_SENSITIVE, "false"), (DEFAULT_CONFIG_TYPE, "global")])
            .unwrap();

        assert!(!settings.case_sensitive);
        assert_eq!(settings.default_config_type, ConfigScope::Global);
    }

    #[test]
    fn test_store_roundtrip_uses_case_sensitive_key() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::from_home(temp.path());

        let mut settings = InitSettings::default();
        settings.init(CASE_SENSITIVE, "false").unwrap();
        store.save(&settings).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("Case-sensitive = false"));
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_store_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::new(temp.path().join("nope.toml"));
        assert_eq!(store.load().unwrap(), InitSettings::default());
    }

    #[test]
    fn test_store_corrupt_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(&path, "must_two_texts = [unclosed").unwrap();

        let err = SettingsStore::new(path).load().unwrap_err();
        assert!(matches!(err, ConfigurerError::SettingsParse { .. }));
    }

    #[test]
    fn test_store_rejects_all_as_default_config_type() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        std::fs::write(&path, "default_config_type = \"all\"\n").unwrap();

        let err = SettingsStore::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            ConfigurerError::InvalidSettingValue { ref key, ref value }
                if key == DEFAULT_CONFIG_TYPE && value == "all"
        ));
    }
}
