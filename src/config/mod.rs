//! Settings loading and nested-key lookup.

mod error;
mod format;
mod loader;
mod nested;
mod settings;

pub use error::{ParseFailure, SettingsError};
pub use format::Format;
pub use loader::{load_default_settings, load_settings, DEFAULT_SETTINGS_PATH};
pub use nested::{get_nested, join_key_path, KEY_PATH_SEPARATOR};
pub use settings::Settings;
