use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by configuration operations.
///
/// Missing or corrupt config documents and missing keys are never reported
/// here; they resolve to an empty document or the caller's default.
#[derive(Error, Debug)]
pub enum ConfigurerError {
    #[error("Invalid config scope '{0}': expected 'local' or 'global' (or 'all' for reads)")]
    InvalidScope(String),

    #[error("Config name '{0}' must have at least two dotted parts, example: 'a.b'")]
    InvalidKeyFormat(String),

    #[error("Unknown init setting '{0}'")]
    UnknownSetting(String),

    #[error("Invalid value '{value}' for init setting '{key}'")]
    InvalidSettingValue { key: String, value: String },

    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    #[error("IO error when accessing `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize TOML for `{}`", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to parse settings file `{}`", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigurerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigurerError>;
