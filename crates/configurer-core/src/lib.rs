//! Configurer Core Library
//!
//! A small local/global configuration store backed by TOML documents,
//! addressed with dotted key paths such as `server.port`.

pub mod config;
pub mod context;
pub mod error;
pub mod settings;
pub mod types;

pub use context::Configurer;
pub use error::{ConfigurerError, Result};

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::{ConfigDocument, ConfigValue, DocumentStore, KeyPath};
    pub use crate::context::Configurer;
    pub use crate::error::{ConfigurerError, Result};
    pub use crate::settings::{InitSettings, SettingsStore};
    pub use crate::types::ConfigScope;
}
