//! Schema helpers for config validation.
//!
//! Uses JsonSchema to derive valid keys for unknown key detection.

use schemars::SchemaGenerator;

use super::file::ConfigFile;

/// All valid top-level keys, derived from the JsonSchema of [`ConfigFile`].
fn valid_config_keys() -> Vec<String> {
    let schema = SchemaGenerator::default().into_root_schema_for::<ConfigFile>();

    schema
        .as_object()
        .and_then(|obj| obj.get("properties"))
        .and_then(|p| p.as_object())
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default()
}

/// Top-level keys in `contents` that the config does not recognize.
///
/// Unparseable content yields no keys; the real parse reports the error.
pub fn find_unknown_keys(contents: &str) -> Vec<String> {
    let Ok(table) = contents.parse::<toml::Table>() else {
        return Vec::new();
    };

    let valid_keys = valid_config_keys();

    table
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| !valid_keys.contains(key))
        .collect()
}
