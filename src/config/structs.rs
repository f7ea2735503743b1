//! Configuration struct definitions.

use serde::Deserialize;

/// Engine settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Flush interval in milliseconds.
    pub delay_ms: u64,
    /// Accepted severity names; an empty list means all severities.
    pub severities: Vec<String>,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            delay_ms: 10,
            severities: Vec::new(),
        }
    }
}

/// Console sink settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable the console sink.
    pub enabled: bool,
    /// Enable ANSI colors.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
        }
    }
}

/// File sink settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Enable the file sink.
    pub enabled: bool,
    /// Target file; `None` uses the timestamped default location.
    pub path: Option<String>,
}

/// JSONL sink settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct JsonConfig {
    /// Enable the JSONL sink.
    pub enabled: bool,
    /// Target file; `None` uses the default location.
    pub path: Option<String>,
}
