//! Loading settings documents from disk.

use std::path::{Path, PathBuf};

use super::format::Format;
use super::settings::Settings;
use super::SettingsError;

/// Conventional location of the project settings, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "src/config/settings.yaml";

/// Loads settings from [`DEFAULT_SETTINGS_PATH`].
pub fn load_default_settings() -> Result<Settings, SettingsError> {
    load_settings(DEFAULT_SETTINGS_PATH)
}

/// Reads and parses the settings file at `path`.
///
/// Files ending in `.toml` are parsed as TOML, anything else as YAML. Errors
/// report the absolute form of `path`. The parsed document must have a mapping
/// at its top level.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    let resolved = absolute_path(path);
    let format = Format::from_path(path);

    tracing::debug!(path = %resolved.display(), format = format.name(), "loading settings");

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        // A path under a regular file fails with NotADirectory but still does not exist.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound || !path.exists() => {
            return Err(SettingsError::FileNotFound(resolved));
        }
        Err(e) => {
            return Err(SettingsError::ReadError {
                path: resolved,
                source: e,
            });
        }
    };

    let value = format
        .parse(&contents)
        .map_err(|source| SettingsError::ParseError {
            path: resolved.clone(),
            source,
        })?;
    let settings = Settings::try_from(value)?;

    tracing::debug!(
        path = %resolved.display(),
        keys = settings.as_mapping().len(),
        "settings loaded"
    );
    Ok(settings)
}

/// Lexically absolute form of `path`, for diagnostics only.
fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile, TempDir};

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_loads_valid_file() {
        let file = yaml_file(
            r#"
project:
  name: bus-positions
storage:
  base_path: data/raw
datasets:
  realtime_bus_positions:
    dataset_page: https://example.org/datasets/realtime-bus-positions
"#,
        );

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.get_str(&["project", "name"]).unwrap(), "bus-positions");
        assert_eq!(settings.get_str(&["storage", "base_path"]).unwrap(), "data/raw");
        assert_eq!(
            settings
                .get_str(&["datasets", "realtime_bus_positions", "dataset_page"])
                .unwrap(),
            "https://example.org/datasets/realtime-bus-positions"
        );
    }

    #[test]
    fn test_loaded_mapping_equals_parsed_document() {
        let contents = "a: {b: 1}\nlist: [1, two, 3.0]\nflag: true\nnothing: ~\n";
        let file = yaml_file(contents);

        let settings = load_settings(file.path()).unwrap();
        let expected: serde_yaml::Value = serde_yaml::from_str(contents).unwrap();
        assert_eq!(settings.as_value(), &expected);
        assert_eq!(settings.get_nested(&["a", "b"]).unwrap().as_i64(), Some(1));
    }

    #[test]
    fn test_missing_file_reports_absolute_path() {
        let err = load_settings("nope.yaml").unwrap_err();

        let expected = std::env::current_dir().unwrap().join("nope.yaml");
        match &err {
            SettingsError::FileNotFound(path) => assert_eq!(path, &expected),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn test_missing_file_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("settings.yaml");

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_path_below_regular_file_is_not_found() {
        let file = yaml_file("a: 1\n");
        let path = file.path().join("settings.yaml");

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, SettingsError::FileNotFound(p) if p == path));
    }

    #[test]
    fn test_merge_key_values_reachable() {
        let file = yaml_file(
            r#"
defaults: &defaults
  base_path: data
storage:
  <<: *defaults
"#,
        );

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.get_str(&["storage", "base_path"]).unwrap(), "data");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let file = yaml_file("a: 1\na: 2\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::ParseError {
                source: crate::config::ParseFailure::Yaml(_),
                ..
            }
        ));
    }

    #[test]
    fn test_non_mapping_documents_rejected() {
        for contents in ["- a\n- b\n", "hello\n", "3.14\n", "", "# only a comment\n"] {
            let file = yaml_file(contents);
            let err = load_settings(file.path()).unwrap_err();
            assert!(
                matches!(err, SettingsError::NotAMapping { .. }),
                "expected NotAMapping for {contents:?}, got {err:?}"
            );
            assert!(err.to_string().contains("did not yield a mapping"));
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let file = yaml_file("project: {name: [unclosed\n");
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::ParseError { .. }));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_settings(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::ReadError { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let mut file = yaml_file("");
        file.write_all(&[b'a', b':', b' ', 0xff, 0xfe, b'\n']).unwrap();
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::ReadError { .. }));
    }

    #[test]
    fn test_loads_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[storage]\nbase_path = \"data\"").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.get_str(&["storage", "base_path"]).unwrap(), "data");
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[storage\nbase_path = ").unwrap();

        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::ParseError {
                source: crate::config::ParseFailure::Toml(_),
                ..
            }
        ));
    }

    #[test]
    fn test_default_settings_file_is_loadable() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SETTINGS_PATH);
        let settings = load_settings(path).unwrap();
        assert!(settings.get_str(&["project", "name"]).is_ok());
    }
}
