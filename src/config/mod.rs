//! Configuration system for yamlpick.
//!
//! Settings are read from `~/.config/yamlpick/config.toml` when present, and
//! command-line flags override them. Every field has a default, so a config
//! file only needs the settings it changes.
//!
//! # Example
//!
//! ```
//! use yamlpick::config::Config;
//! use yamlpick::pick::Strategy;
//!
//! let config = Config::default();
//! assert_eq!(config.strategy, Strategy::Indifferent);
//!
//! let custom: Config = toml::from_str("strategy = \"object\"").unwrap();
//! assert_eq!(custom.strategy, Strategy::Object);
//! assert_eq!(custom.missing_exit_code, 1);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::document::Format;
use crate::pick::Strategy;

/// Configuration for the yamlpick command.
///
/// # Fields
///
/// * `strategy` - Lookup policy (default: indifferent)
/// * `output` - Format used to print the found value (default: yaml)
/// * `missing_exit_code` - Exit status when the path isn't found (default: 1)
/// * `all_documents` - Search every document of a YAML stream (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Lookup policy
    #[serde(default)]
    pub strategy: Strategy,

    /// Output format for found values
    #[serde(default)]
    pub output: Format,

    /// Exit status when the path isn't found
    #[serde(default = "default_missing_exit_code")]
    pub missing_exit_code: i32,

    /// Search every document of a multi-document YAML stream
    #[serde(default)]
    pub all_documents: bool,
}

/// Returns the default exit status for a missing path.
fn default_missing_exit_code() -> i32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            output: Format::default(),
            missing_exit_code: default_missing_exit_code(),
            all_documents: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlpick/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlpick");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring config file: {:#}", err);
                Self::default()
            }
        }
    }

    /// Loads configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], problems with the file are reported.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
