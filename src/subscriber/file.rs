//! Plain-text file sink.

use super::Subscriber;
use crate::entry::Entry;
use crate::error::Error;
use crate::internal;
use crate::publisher::StopSignal;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Appends each batch as UTF-8 text, one line per entry
/// (`[HH:MM:SS][HEADER] text`), markup stripped. The whole batch goes out
/// in a single write.
#[derive(Debug, Clone)]
pub struct FileSubscriber {
    path: PathBuf,
    timestamp_format: String,
}

impl Default for FileSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSubscriber {
    /// Default target: a file named after the construction time
    /// (`YYYY-MM-DD_HH-MM-SS.log`) under the platform state directory, so
    /// each process run gets its own file.
    #[must_use]
    pub fn new() -> Self {
        let dir = directories::ProjectDirs::from("", "", "logcast").map_or_else(
            || PathBuf::from("logs"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
            },
        );
        let filename = Local::now().format("%Y-%m-%d_%H-%M-%S.log").to_string();

        Self {
            path: dir.join(filename),
            timestamp_format: "%H:%M:%S".to_string(),
        }
    }

    /// The default location doesn't work for every deployment.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Config values use `~` for portability; the OS needs an absolute
    /// path.
    fn resolve_path(&self) -> PathBuf {
        let raw = self.path.to_string_lossy();
        PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
    }

    fn format_line(&self, entry: &Entry) -> String {
        format!(
            "[{}][{}] {}",
            entry.created().format(&self.timestamp_format),
            entry.severity_header(),
            entry.plain_text()
        )
    }
}

impl Subscriber for FileSubscriber {
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
                    "FILE",
                    &format!("Failed to create directory {}: {}", parent.display(), e),
                );
                return Err(e.into());
            }
            internal::debug("FILE", &format!("Created directory: {}", parent.display()));
        }

        let mut content = String::new();
        for entry in batch {
            content.push_str(&self.format_line(entry));
            content.push('\n');
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }
}
