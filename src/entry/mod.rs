//! One buffered log record awaiting delivery.

use crate::markup;
use crate::severity::Severity;
use chrono::{DateTime, Local};

/// Immutable once constructed: the buffer and every subscriber observe the
/// same record, so nothing may change after `new` stamps it. Subscribers
/// receive a read-only slice of entries, never the live buffer.
#[derive(Debug, Clone)]
pub struct Entry {
    created: DateTime<Local>,
    severity: Severity,
    text: String,
}

impl Entry {
    /// Stamps the creation time; called synchronously inside
    /// [`Publisher::write`](crate::Publisher::write).
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            created: Local::now(),
            severity,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// The raw, markup-bearing text as written.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text with every markup tag replaced by its content. Derived on
    /// demand, not stored.
    #[must_use]
    pub fn plain_text(&self) -> String {
        markup::strip(&self.text)
    }

    /// The severity name padded to the enumeration-wide header width.
    #[must_use]
    pub fn severity_header(&self) -> String {
        self.severity.header()
    }
}
