//! Shared core types used across the resolver, store and operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurerError;

/// Configuration scope levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigScope {
    /// Project-local configuration under the current working directory.
    #[default]
    Local,
    /// User-wide configuration under the home directory.
    Global,
    /// Read-only union of global then local; local wins per top-level key.
    All,
}

impl ConfigScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigScope::Local => "local",
            ConfigScope::Global => "global",
            ConfigScope::All => "all",
        }
    }

    /// Whether the scope maps to a single on-disk document.
    pub fn is_writable(self) -> bool {
        !matches!(self, ConfigScope::All)
    }

    /// Rejects the `all` pseudo-scope for operations that need one file.
    pub fn require_writable(self) -> Result<Self, ConfigurerError> {
        if self.is_writable() {
            Ok(self)
        } else {
            Err(ConfigurerError::InvalidScope(self.as_str().to_string()))
        }
    }
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigScope {
    type Err = ConfigurerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(ConfigScope::Local),
            "global" => Ok(ConfigScope::Global),
            "all" => Ok(ConfigScope::All),
            _ => Err(ConfigurerError::InvalidScope(s.to_string())),
        }
    }
}
