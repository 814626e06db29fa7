//! Document syntaxes understood by the loader.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::error::ParseFailure;

/// Syntax of a settings document, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Toml,
}

impl Format {
    /// Picks the format for `path`.
    ///
    /// Only a `.toml` extension (any case) selects TOML. Everything else,
    /// including files without an extension, is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }

    /// Parses `contents` into a generic value tree.
    ///
    /// YAML merge keys (`<<: *anchor`) are expanded. Duplicate keys in a
    /// YAML mapping are a syntax error. The shape of the result is not
    /// checked here.
    pub fn parse(self, contents: &str) -> Result<Value, ParseFailure> {
        match self {
            Format::Yaml => {
                let mut value: Value = serde_yaml::from_str(contents)?;
                value.apply_merge()?;
                Ok(value)
            }
            Format::Toml => {
                let table: toml::Table = toml::from_str(contents)?;
                Ok(Value::Mapping(table_to_mapping(table)))
            }
        }
    }

    /// Lowercase name of the format, as used in log events.
    pub fn name(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

fn table_to_mapping(table: toml::Table) -> Mapping {
    table
        .into_iter()
        .map(|(key, value)| (Value::String(key), toml_to_value(value)))
        .collect()
}

fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        // Datetimes have no YAML counterpart in the value tree; keep the RFC 3339 text.
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Sequence(arr.into_iter().map(toml_to_value).collect()),
        toml::Value::Table(t) => Value::Mapping(table_to_mapping(t)),
    }
}
