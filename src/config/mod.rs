//! TOML configuration loading.
//!
//! Separated from struct definitions so the loading logic stays independent
//! of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, JsonConfig, PublisherConfig};

use crate::internal;
use crate::severity::{Severity, SeverityMask};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// An absent or empty config file must still produce a working publisher —
/// `#[serde(default)]` on every section keeps zero-config working.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Flush interval and severity filter apply to the engine as a whole.
    pub publisher: PublisherConfig,
    /// Each sink carries its own section so they can be toggled
    /// independently.
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub json: JsonConfig,
}

impl Config {
    /// Loads from the default platform location; a missing file yields
    /// defaults.
    ///
    /// # Errors
    /// Fails when the config directory can't be determined or TOML parsing
    /// hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads from an explicit path instead of the default location —
    /// useful for tests and non-standard deployments.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Platform config path, e.g. `~/.config/logcast/config.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "logcast")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}

impl PublisherConfig {
    /// Config stores the interval in milliseconds for TOML ergonomics.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Unknown names are skipped with a warning; an empty list enables all
    /// severities, since a config that lists nothing never means "filter
    /// everything out".
    #[must_use]
    pub fn parse_severities(&self) -> SeverityMask {
        if self.severities.is_empty() {
            return SeverityMask::ALL;
        }

        let mut mask = SeverityMask::NONE;
        for name in &self.severities {
            match name.parse::<Severity>() {
                Ok(severity) => mask |= severity,
                Err(e) => internal::warn("CONFIG", &e.to_string()),
            }
        }
        mask
    }
}
