//! Configuration for twofy.
//!
//! Two layers exist. [`Config`] holds persistent defaults loaded from
//! `~/.config/twofy/config.toml`. [`RunConfig`] is the immutable set of
//! settings for a single conversion, built once from the command line and the
//! loaded [`Config`], then passed down the pipeline.
//!
//! # Example
//!
//! ```
//! use twofy::config::Config;
//!
//! let config: Config = toml::from_str("pretty = true").unwrap();
//! assert!(config.pretty);
//! assert!(!config.debug);
//! ```

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persistent defaults.
///
/// * `debug` - Log at debug level on every run (default: false)
/// * `pretty` - Indent JSON output (default: false)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log at debug level on every run
    #[serde(default)]
    pub debug: bool,

    /// Indent JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/twofy/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("twofy");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), "ignoring invalid config file: {}", err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Source file; `None` reads piped stdin.
    pub input: Option<PathBuf>,
    /// Destination file; `None` writes stdout.
    pub output: Option<PathBuf>,
    /// Path query; empty selects the whole document.
    pub query: String,
    pub format: OutputFormat,
    /// Indent JSON output.
    pub pretty: bool,
}

impl RunConfig {
    /// A run converting stdin to stdout with no query.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            input: None,
            output: None,
            query: String::new(),
            format,
            pretty: false,
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
