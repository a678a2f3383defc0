//! Configuration context: set/get/remove against local and global documents.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ConfigDocument, ConfigValue, DocumentStore, KeyPath, normalize_name};
use crate::config::paths::config_path_for_scope;
use crate::error::{ConfigurerError, Result};
use crate::settings::InitSettings;
use crate::types::ConfigScope;

/// Name that addresses the whole document in [`Configurer::get`].
pub const ALL_SENTINEL: &str = "all";

/// Unified configuration context.
///
/// Frontends create this once and call operations on it. No document is
/// cached: every call re-reads its file, so the file is the source of truth.
#[derive(Debug, Clone)]
pub struct Configurer {
    settings: InitSettings,
    home_dir: PathBuf,
    project_root: PathBuf,
    store: DocumentStore,
}

impl Configurer {
    /// Create a context rooted at the user's home and the current directory.
    pub fn new(settings: InitSettings) -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or(ConfigurerError::HomeDirUnavailable)?;
        let project_root = std::env::current_dir().map_err(|e| ConfigurerError::io(".", e))?;
        Ok(Self::with_roots(settings, home_dir, project_root))
    }

    /// Create a context with explicit roots (for testing and embedding).
    pub fn with_roots(settings: InitSettings, home_dir: PathBuf, project_root: PathBuf) -> Self {
        Self {
            settings,
            home_dir,
            project_root,
            store: DocumentStore,
        }
    }

    pub fn settings(&self) -> &InitSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut InitSettings {
        &mut self.settings
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn default_scope(&self) -> ConfigScope {
        self.settings.default_config_type
    }

    /// Path of the document backing a file-backed scope.
    pub fn config_path(&self, scope: ConfigScope) -> Result<PathBuf> {
        config_path_for_scope(scope, &self.settings, &self.home_dir, &self.project_root)
    }

    /// Load the document for `scope`; `all` overlays local on top of global.
    pub fn document(&self, scope: ConfigScope) -> Result<ConfigDocument> {
        match scope {
            ConfigScope::All => {
                let mut merged = self.store.read(&self.config_path(ConfigScope::Global)?);
                merged.overlay_shallow(self.store.read(&self.config_path(ConfigScope::Local)?));
                Ok(merged)
            }
            scope => Ok(self.store.read(&self.config_path(scope)?)),
        }
    }

    /// Set `name` to `value` in `scope`, creating intermediate tables.
    pub fn set(&self, name: &str, value: impl Into<ConfigValue>, scope: ConfigScope) -> Result<()> {
        let scope = scope.require_writable()?;
        let key = KeyPath::parse(name, &self.settings)?;
        let path = self.config_path(scope)?;

        let mut document = self.store.read(&path);
        document.insert_path(key.segments(), value.into());
        self.store.write(&path, &document)?;

        debug!(%scope, key = %key, path = %path.display(), "config value set");
        Ok(())
    }

    /// Look up `name` in `scope`, returning `default` when it is not present.
    ///
    /// The name `all` returns the whole resolved document.
    pub fn get(
        &self,
        name: &str,
        default: Option<ConfigValue>,
        scope: ConfigScope,
    ) -> Result<Option<ConfigValue>> {
        if normalize_name(name, &self.settings) == ALL_SENTINEL {
            return Ok(Some(ConfigValue::Mapping(self.document(scope)?)));
        }

        let key = KeyPath::parse(name, &self.settings)?;
        let document = self.document(scope)?;
        let found = document.lookup(key.segments()).cloned();
        debug!(%scope, key = %key, found = found.is_some(), "config value lookup");

        Ok(found.or(default))
    }

    /// Like [`Configurer::get`] with a concrete default.
    pub fn get_or(
        &self,
        name: &str,
        default: impl Into<ConfigValue>,
        scope: ConfigScope,
    ) -> Result<ConfigValue> {
        Ok(self
            .get(name, None, scope)?
            .unwrap_or_else(|| default.into()))
    }

    /// Remove `name` from `scope`. Missing keys are a no-op; the document is
    /// always written back.
    pub fn remove(&self, name: &str, scope: ConfigScope) -> Result<()> {
        let scope = scope.require_writable()?;
        let key = KeyPath::parse(name, &self.settings)?;
        let path = self.config_path(scope)?;

        let mut document = self.store.read(&path);
        let removed = document.remove_path(key.segments());
        self.store.write(&path, &document)?;

        debug!(%scope, key = %key, removed = removed.is_some(), "config value removed");
        Ok(())
    }
}
