//! Key-path lookup through nested mappings.

use serde_yaml::Value;

use super::SettingsError;

/// Separator used when displaying a key path.
pub const KEY_PATH_SEPARATOR: &str = "/";

/// Joins `keys` into their display form, e.g. `storage/base_path`.
pub fn join_key_path<K: AsRef<str>>(keys: &[K]) -> String {
    keys.iter()
        .map(|k| k.as_ref())
        .collect::<Vec<_>>()
        .join(KEY_PATH_SEPARATOR)
}

/// Follows `keys` from `root` and returns the value they lead to.
///
/// Each key must name an entry of a mapping. If a key is absent, or the value
/// reached so far is not a mapping, the error carries the whole requested
/// path rather than the failing segment. An empty key slice returns `root`.
pub fn get_nested<'a, K: AsRef<str>>(
    root: &'a Value,
    keys: &[K],
) -> Result<&'a Value, SettingsError> {
    tracing::trace!(key_path = %join_key_path(keys), "looking up settings key path");

    let mut current = root;
    for key in keys {
        current = current
            .as_mapping()
            .and_then(|mapping| mapping.get(key.as_ref()))
            .ok_or_else(|| SettingsError::KeyPathNotFound(join_key_path(keys)))?;
    }

    Ok(current)
}
