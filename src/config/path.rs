//! Config path management.
//!
//! Determines the config file location across platforms, with support for
//! a CLI override and an environment variable.

use std::path::PathBuf;
use std::sync::OnceLock;

use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// Environment variable naming the config file (also used by tests).
const CONFIG_PATH_ENV: &str = "GITSUMMARY_CONFIG_PATH";

/// Override for the config path, set via the --config CLI flag
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the config path override (called from CLI --config flag)
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

/// Whether the path was given with --config.
///
/// A missing file is only an error when the user asked for it explicitly;
/// the environment variable is commonly pointed at a non-existent file to
/// isolate tests from the user's config.
pub fn is_config_path_explicit() -> bool {
    CONFIG_PATH.get().is_some()
}

/// Get the config file path.
///
/// Priority:
/// 1. CLI --config flag (set via `set_config_path`)
/// 2. GITSUMMARY_CONFIG_PATH environment variable
/// 3. Platform-specific default location
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    // XDG on Linux and macOS (~/.config), %APPDATA% on Windows
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("gitsummary").join("config.toml"))
}
