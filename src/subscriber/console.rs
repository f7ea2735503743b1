//! Styled stdout sink.

use super::Subscriber;
use crate::entry::Entry;
use crate::error::Error;
use crate::markup::{self, Color};
use crate::publisher::StopSignal;
use crate::severity::Severity;
use std::collections::HashMap;
use std::io::{self, Write};

/// Renders each entry as `[HH:MM:SS][HEADER] text`, the header colorized by
/// severity and the whole line interpreted through the markup renderer.
#[derive(Debug, Clone)]
pub struct ConsoleSubscriber {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
    /// Foreground/background pair per severity, applied to the header.
    severity_colors: HashMap<Severity, (Color, Color)>,
    timestamp_format: String,
}

impl Default for ConsoleSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSubscriber {
    #[must_use]
    pub fn new() -> Self {
        let mut severity_colors = HashMap::new();
        severity_colors.insert(Severity::Debug, (Color::green(), Color::black()));
        severity_colors.insert(Severity::Info, (Color::white(), Color::black()));
        severity_colors.insert(Severity::Warning, (Color::yellow(), Color::black()));
        severity_colors.insert(Severity::Error, (Color::red(), Color::black()));
        severity_colors.insert(Severity::Exception, (Color::purple(), Color::black()));
        severity_colors.insert(Severity::Fatal, (Color::dark_red(), Color::dark_yellow()));

        Self {
            colors_enabled: true,
            severity_colors,
            timestamp_format: "%H:%M:%S".to_string(),
        }
    }

    /// Disabling colors strips every tag instead of interpreting it.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Default pairs may clash with the user's terminal theme.
    #[must_use]
    pub fn severity_color(mut self, severity: Severity, fg: Color, bg: Color) -> Self {
        self.severity_colors.insert(severity, (fg, bg));
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// The line as markup text, before any ANSI interpretation. The header
    /// is wrapped in a tag of its own so severity coloring flows through
    /// the same grammar as the entry text.
    #[must_use]
    pub fn format_entry(&self, entry: &Entry) -> String {
        let (fg, bg) = self
            .severity_colors
            .get(&entry.severity())
            .copied()
            .unwrap_or((Color::white(), Color::black()));

        format!(
            "[{}][<color fg={fg} bg={bg}>{}</color>] {}",
            entry.created().format(&self.timestamp_format),
            entry.severity_header(),
            entry.text()
        )
    }
}

impl Subscriber for ConsoleSubscriber {
    fn deliver(&self, batch: &[Entry], _stop: &StopSignal) -> Result<(), Error> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        for entry in batch {
            let line = self.format_entry(entry);
            if self.colors_enabled {
                writeln!(out, "{}", markup::render(&markup::parse(&line)))?;
            } else {
                writeln!(out, "{}", markup::strip(&line))?;
            }
        }

        Ok(())
    }
}
