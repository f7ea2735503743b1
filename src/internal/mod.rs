//! The crate's own diagnostics.
//!
//! The publishing pipeline cannot carry them: the flush worker would be
//! feeding entries back into the buffer it drains. Diagnostics therefore
//! write straight to stderr, gated by a severity mask fixed at init time.
//!
//! Uses `OnceLock` so initialization happens exactly once even if multiple
//! entry points race to call `init`; calls before `init` vanish silently.

use crate::severity::{Severity, SeverityMask};
use std::io::{self, Write};
use std::sync::OnceLock;

static DIAGNOSTICS: OnceLock<SeverityMask> = OnceLock::new();

/// Enables diagnostics for the given severities.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are
/// no-ops.
pub fn init(mask: SeverityMask) {
    DIAGNOSTICS.get_or_init(|| mask);
}

/// Diagnostics must never fail the operation that emitted them; a write
/// error on stderr is dropped.
fn log(severity: Severity, scope: &str, msg: &str) {
    let Some(mask) = DIAGNOSTICS.get() else {
        return;
    };
    if !mask.contains(severity) {
        return;
    }

    let _ = writeln!(io::stderr(), "[{}] {scope}: {msg}", severity.header());
}

/// Startup and teardown breadcrumbs — worker lifecycle, config loading.
pub fn debug(scope: &str, msg: &str) {
    log(Severity::Debug, scope, msg);
}

/// Normal operational milestones.
pub fn info(scope: &str, msg: &str) {
    log(Severity::Info, scope, msg);
}

/// Non-fatal anomalies — unknown severity names in config, etc.
pub fn warn(scope: &str, msg: &str) {
    log(Severity::Warning, scope, msg);
}

/// Failures surfaced alongside the error return — delivery failures,
/// directory creation, etc.
pub fn error(scope: &str, msg: &str) {
    log(Severity::Error, scope, msg);
}
