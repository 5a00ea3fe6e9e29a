//! Path resolution for lyg-conference configuration files.

use std::path::PathBuf;

use conference_core::error::{ConferenceError, Result};

const APP_DIR: &str = "lyg-conference";
const CONFIG_FILE: &str = "config.toml";

/// Platform-specific locations used by the application.
///
/// ```text
/// ~/.config/lyg-conference/     # Config directory (XDG on Linux)
/// └── config.toml               # Application configuration
/// ```
pub struct ConferencePaths;

impl ConferencePaths {
    /// Returns the application configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ConferenceError::config("Cannot determine config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
