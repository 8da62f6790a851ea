//! Centralized path definitions for cotemplate
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.cotemplate/
//! └── config.toml               # Default template path
//! ```
//!
//! Nothing is stored per repository. Templates themselves live wherever the
//! user keeps them (often the file named by git's `commit.template`).

use std::path::PathBuf;

/// Global config directory name
pub const GLOBAL_DIR: &str = ".cotemplate";

/// Global config filename
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Path argument meaning "read the template from stdin"
pub const STDIN_PATH: &str = "-";

/// Get the global cotemplate directory.
///
/// Returns `~/.cotemplate/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.cotemplate/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
