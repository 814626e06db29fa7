use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read settings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: ParseFailure,
    },

    #[error("settings document did not yield a mapping (found {found}); the top level must be a set of `key: value` entries")]
    NotAMapping { found: &'static str },

    #[error("key path not found in settings: {0}")]
    KeyPathNotFound(String),

    #[error("value at '{key_path}' is not a {expected}")]
    UnexpectedType {
        key_path: String,
        expected: &'static str,
    },

    #[error("failed to deserialize value at '{key_path}': {source}")]
    DeserializeError {
        key_path: String,
        source: serde_yaml::Error,
    },
}

/// Syntax error from whichever parser handled the document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseFailure {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
