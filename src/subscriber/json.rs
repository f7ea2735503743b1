//! JSONL sink — one JSON object per entry, grep/jq-friendly.

use super::Subscriber;
use crate::entry::Entry;
use crate::error::Error;
use crate::internal;
use crate::publisher::StopSignal;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use ulid::Ulid;

/// Flat schema optimized for JSONL consumers.
#[derive(Debug, Serialize)]
struct JsonRecord {
    /// ULID is time-sortable and unique across concurrent writers.
    id: String,
    /// RFC 3339 keeps the timestamp machine-readable.
    ts: String,
    severity: String,
    /// Markup stripped; JSONL consumers expect clean text.
    text: String,
}

/// Append-only JSONL file — a queryable record of everything published,
/// without the complexity of a real database engine.
#[derive(Debug, Clone)]
pub struct JsonSubscriber {
    path: PathBuf,
}

impl Default for JsonSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSubscriber {
    /// Default target under the platform state directory.
    #[must_use]
    pub fn new() -> Self {
        let path = directories::ProjectDirs::from("", "", "logcast").map_or_else(
            || PathBuf::from("logcast.jsonl"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("db")
                    .join("logcast.jsonl")
            },
        );

        Self { path }
    }

    /// The default location doesn't work for every deployment.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Config values use `~` for portability; the OS needs an absolute
    /// path.
    fn resolve_path(&self) -> PathBuf {
        let raw = self.path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
    }
}

impl Subscriber for JsonSubscriber {
    fn deliver(&self, batch: &[Entry], _stop: &StopSignal) -> Result<(), Error> {
        if batch.is_empty() {
            return Ok(());
        }

        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::error(
                    "JSON",
                    &format!("Failed to create directory {}: {}", parent.display(), e),
                );
                return Err(e.into());
            }
            internal::debug("JSON", &format!("Created directory: {}", parent.display()));
        }

        let mut content = String::new();
        for entry in batch {
            let record = JsonRecord {
                id: Ulid::new().to_string(),
                ts: entry.created().to_rfc3339(),
                severity: entry.severity().name().to_string(),
                text: entry.plain_text(),
            };
            let line = serde_json::to_string(&record)
                .map_err(|e| Error::Format(format!("JSON serialization failed: {e}")))?;
            content.push_str(&line);
            content.push('\n');
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }
}
