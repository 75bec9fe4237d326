//! Configuration for the yamledit CLI.
//!
//! Settings are loaded from `yamledit/config.toml` under the platform config
//! directory (for example `~/.config/yamledit/config.toml` on Linux). A
//! missing or unreadable file falls back to defaults, so the tool works with
//! no configuration at all.
//!
//! # Example
//!
//! ```
//! use yamledit::config::Config;
//!
//! let config = Config::default();
//! assert!(!config.create_backup);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Configuration for the yamledit CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Create a .bak copy before overwriting an existing output file
    #[serde(default)]
    pub create_backup: bool,
}

impl Config {
    /// Loads configuration from the default path, falling back to defaults
    /// when the file is missing or malformed.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Returns the path to the configuration file, if a platform config
    /// directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("yamledit").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.create_backup);
    }

    #[test]
    fn test_parse_from_toml() {
        let config: Config = toml::from_str("create_backup = true\n").unwrap();
        assert!(config.create_backup);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.create_backup);
    }
}
