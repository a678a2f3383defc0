//! Config path resolution helpers.

use std::path::{Path, PathBuf};

use crate::error::{ConfigurerError, Result};
use crate::settings::InitSettings;
use crate::types::ConfigScope;

/// Directory, relative to the scope root, that holds configurer files.
pub const CONFIG_DIR: &str = ".xystudio/configurer";
pub const CONFIG_FILE: &str = "config.toml";
pub const SETTINGS_FILE: &str = "settings.toml";

/// Resolve the config document path for a file-backed scope.
///
/// `{scope}_config_path` overrides from `settings` are used verbatim.
pub fn config_path_for_scope(
    scope: ConfigScope,
    settings: &InitSettings,
    home_dir: &Path,
    project_root: &Path,
) -> Result<PathBuf> {
    let (override_path, root) = match scope {
        ConfigScope::Local => (settings.local_config_path.as_ref(), project_root),
        ConfigScope::Global => (settings.global_config_path.as_ref(), home_dir),
        ConfigScope::All => return Err(ConfigurerError::InvalidScope(scope.to_string())),
    };

    Ok(override_path
        .cloned()
        .unwrap_or_else(|| root.join(CONFIG_DIR).join(CONFIG_FILE)))
}

/// Default location of the persisted init settings.
pub fn settings_path(home_dir: &Path) -> PathBuf {
    home_dir.join(CONFIG_DIR).join(SETTINGS_FILE)
}
