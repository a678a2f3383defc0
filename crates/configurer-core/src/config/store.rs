//! Document store for loading and saving config.toml files.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ConfigurerError, Result};

use super::ConfigDocument;

/// Best-effort TOML document storage.
///
/// Reads never fail: a missing, unreadable or unparsable file is an empty
/// document. Writes replace the whole file.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn read(&self, path: &Path) -> ConfigDocument {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using empty document");
                return ConfigDocument::new();
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read config file, using empty document");
                return ConfigDocument::new();
            }
        };

        match toml::from_str::<toml::Table>(&content) {
            Ok(table) => ConfigDocument::from(table),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "invalid TOML in config file, using empty document");
                ConfigDocument::new()
            }
        }
    }

    pub fn write(&self, path: &Path, document: &ConfigDocument) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigurerError::io(parent, e))?;
        }

        let content = document
            .to_toml_string()
            .map_err(|source| ConfigurerError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;

        std::fs::write(path, content).map_err(|e| ConfigurerError::io(path, e))?;
        debug!(path = %path.display(), keys = document.len(), "wrote config file");
        Ok(())
    }
}
