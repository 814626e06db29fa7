use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use super::nested::{get_nested, join_key_path};
use super::SettingsError;

/// Parsed settings document.
///
/// The root is always a mapping. `Settings` is never modified after it is
/// built, so a shared reference can be read from any number of threads.
///
/// ## Example
///
/// ```no_run
/// use settings_loader::load_settings;
///
/// let settings = load_settings("src/config/settings.yaml")?;
/// let base_path = settings.get_str(&["storage", "base_path"])?;
/// println!("writing to {base_path}");
/// # Ok::<(), settings_loader::SettingsError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    root: Value,
}

impl Settings {
    /// Returns the top-level mapping.
    pub fn as_mapping(&self) -> &Mapping {
        match &self.root {
            Value::Mapping(mapping) => mapping,
            _ => unreachable!("settings root is checked to be a mapping on construction"),
        }
    }

    /// Returns the root as a generic value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consumes the settings and returns the top-level mapping.
    pub fn into_mapping(self) -> Mapping {
        match self.root {
            Value::Mapping(mapping) => mapping,
            _ => unreachable!("settings root is checked to be a mapping on construction"),
        }
    }

    /// Looks up a key path from the root. See [`get_nested`](crate::config::get_nested).
    pub fn get_nested<K: AsRef<str>>(&self, keys: &[K]) -> Result<&Value, SettingsError> {
        get_nested(&self.root, keys)
    }

    /// Looks up a key path whose value must be a string.
    ///
    /// Other scalars are reported as a type mismatch, not converted.
    pub fn get_str<K: AsRef<str>>(&self, keys: &[K]) -> Result<&str, SettingsError> {
        self.get_nested(keys)?
            .as_str()
            .ok_or_else(|| SettingsError::UnexpectedType {
                key_path: join_key_path(keys),
                expected: "string",
            })
    }

    /// Deserializes the value at a key path into `T`.
    pub fn get_as<T, K>(&self, keys: &[K]) -> Result<T, SettingsError>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
    {
        let value = self.get_nested(keys)?;
        serde_yaml::from_value(value.clone()).map_err(|source| SettingsError::DeserializeError {
            key_path: join_key_path(keys),
            source,
        })
    }
}

impl TryFrom<Value> for Settings {
    type Error = SettingsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(_) => Ok(Self { root: value }),
            other => Err(SettingsError::NotAMapping {
                found: kind_name(&other),
            }),
        }
    }
}

impl From<Mapping> for Settings {
    fn from(mapping: Mapping) -> Self {
        Self {
            root: Value::Mapping(mapping),
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
