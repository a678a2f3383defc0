//! Configuration documents and their on-disk storage
//!
//! Supports two file-backed scopes:
//! - Local: `<cwd>/.xystudio/configurer/config.toml`
//! - Global: `<home>/.xystudio/configurer/config.toml`
//!
//! plus the read-only `all` view that overlays local on top of global.

pub mod document;
pub mod key_path;
pub mod paths;
pub mod store;

pub use document::{ConfigDocument, ConfigValue};
pub use key_path::{KeyPath, normalize_name};
pub use paths::config_path_for_scope;
pub use store::DocumentStore;
