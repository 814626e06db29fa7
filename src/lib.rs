pub mod config;

pub use config::{
    get_nested, load_default_settings, load_settings, Settings, SettingsError,
    DEFAULT_SETTINGS_PATH,
};
