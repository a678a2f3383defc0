//! Tagged config values and the nested document they live in.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// A single value stored in a config document.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    /// TOML datetime, kept verbatim so hand-written files survive a rewrite.
    Datetime(toml::value::Datetime),
    Array(Vec<ConfigValue>),
    Mapping(ConfigDocument),
}

impl ConfigValue {
    /// Coerce CLI text: `true`/`false` become booleans, everything else a string.
    pub fn from_cli_text(text: &str) -> Self {
        match text {
            "true" => ConfigValue::Boolean(true),
            "false" => ConfigValue::Boolean(false),
            other => ConfigValue::String(other.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&ConfigDocument> {
        match self {
            ConfigValue::Mapping(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    pub fn to_toml(&self) -> toml::Value {
        match self {
            ConfigValue::String(s) => toml::Value::String(s.clone()),
            ConfigValue::Boolean(b) => toml::Value::Boolean(*b),
            ConfigValue::Integer(i) => toml::Value::Integer(*i),
            ConfigValue::Float(f) => toml::Value::Float(*f),
            ConfigValue::Datetime(dt) => toml::Value::Datetime(*dt),
            ConfigValue::Array(items) => {
                toml::Value::Array(items.iter().map(ConfigValue::to_toml).collect())
            }
            ConfigValue::Mapping(doc) => toml::Value::Table(doc.to_toml()),
        }
    }

    /// Convert to a JSON value for machine-readable output.
    pub fn to_json(&self) -> Value {
        match self {
            ConfigValue::String(s) => Value::String(s.clone()),
            ConfigValue::Boolean(b) => Value::Bool(*b),
            ConfigValue::Integer(i) => Value::Number((*i).into()),
            // serde_json::Number doesn't support NaN/Infinity, fall back to string
            ConfigValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(f.to_string())),
            ConfigValue::Datetime(dt) => Value::String(dt.to_string()),
            ConfigValue::Array(items) => Value::Array(items.iter().map(ConfigValue::to_json).collect()),
            ConfigValue::Mapping(doc) => doc.to_json(),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Boolean(b) => write!(f, "{b}"),
            ConfigValue::Integer(i) => write!(f, "{i}"),
            ConfigValue::Float(v) => write!(f, "{v}"),
            ConfigValue::Datetime(dt) => write!(f, "{dt}"),
            other => write!(f, "{}", other.to_toml()),
        }
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => ConfigValue::String(s),
            toml::Value::Integer(i) => ConfigValue::Integer(i),
            toml::Value::Float(f) => ConfigValue::Float(f),
            toml::Value::Boolean(b) => ConfigValue::Boolean(b),
            toml::Value::Datetime(dt) => ConfigValue::Datetime(dt),
            toml::Value::Array(arr) => {
                ConfigValue::Array(arr.into_iter().map(ConfigValue::from).collect())
            }
            toml::Value::Table(table) => ConfigValue::Mapping(ConfigDocument::from(table)),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<ConfigDocument> for ConfigValue {
    fn from(value: ConfigDocument) -> Self {
        ConfigValue::Mapping(value)
    }
}

/// Nested mapping from string keys to config values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.entries.iter()
    }

    /// Walk `segments` through nested mappings.
    ///
    /// Stops with `None` as soon as a segment is missing or the current
    /// value is not a mapping.
    pub fn lookup(&self, segments: &[String]) -> Option<&ConfigValue> {
        let (first, rest) = segments.split_first()?;
        let value = self.entries.get(first)?;
        if rest.is_empty() {
            return Some(value);
        }
        match value {
            ConfigValue::Mapping(child) => child.lookup(rest),
            _ => None,
        }
    }

    /// Set the value at `segments`, creating intermediate mappings.
    ///
    /// An intermediate that holds a non-mapping value is replaced by an
    /// empty mapping; the leaf is overwritten whatever it held.
    pub fn insert_path(&mut self, segments: &[String], value: ConfigValue) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        if rest.is_empty() {
            self.entries.insert(first.clone(), value);
            return;
        }

        let slot = self
            .entries
            .entry(first.clone())
            .or_insert_with(|| ConfigValue::Mapping(ConfigDocument::new()));
        if !slot.is_mapping() {
            *slot = ConfigValue::Mapping(ConfigDocument::new());
        }
        if let ConfigValue::Mapping(child) = slot {
            child.insert_path(rest, value);
        }
    }

    /// Remove the value at `segments`. Missing intermediates are a no-op.
    pub fn remove_path(&mut self, segments: &[String]) -> Option<ConfigValue> {
        let (first, rest) = segments.split_first()?;
        if rest.is_empty() {
            return self.entries.remove(first);
        }
        match self.entries.get_mut(first)? {
            ConfigValue::Mapping(child) => child.remove_path(rest),
            _ => None,
        }
    }

    /// Top-level overlay: every key of `layer` replaces the key in `self`.
    ///
    /// Nested mappings are not merged recursively.
    pub fn overlay_shallow(&mut self, layer: ConfigDocument) {
        self.entries.extend(layer.entries);
    }

    pub fn to_toml(&self) -> toml::Table {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_toml()))
            .collect()
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&self.to_toml())
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl From<toml::Table> for ConfigDocument {
    fn from(table: toml::Table) -> Self {
        Self {
            entries: table
                .into_iter()
                .map(|(key, value)| (key, ConfigValue::from(value)))
                .collect(),
        }
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
