//! Severity flags that gate which writes enter the publishing pipeline.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Discriminants are distinct powers of two so each level can be enabled or
/// disabled in a [`SeverityMask`] independently. An entry always carries
/// exactly one flag, never a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Development-time diagnostics, too noisy for normal operation.
    Debug = 1,
    /// Normal operational milestones.
    Info = 2,
    /// Non-fatal anomalies that may need attention.
    Warning = 4,
    /// Failures that prevent an operation from completing.
    Error = 8,
    /// Failures carrying a captured error value, usually via
    /// [`Publisher::write_error`](crate::Publisher::write_error).
    Exception = 16,
    /// Failures the process cannot recover from.
    Fatal = 32,
}

/// Width of the widest severity name, fixed at compile time so headers line
/// up without recomputing the maximum per render.
pub const HEADER_WIDTH: usize = widest_name_len();

const fn widest_name_len() -> usize {
    let all = Severity::all();
    let mut widest = 0;
    let mut i = 0;
    while i < all.len() {
        let len = all[i].name().len();
        if len > widest {
            widest = len;
        }
        i += 1;
    }
    widest
}

impl Severity {
    /// The flag's position in a [`SeverityMask`].
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Display name, also used as the header text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Exception => "Exception",
            Self::Fatal => "Fatal",
        }
    }

    /// Convenience for iteration — used by the header width, the demo
    /// driver, and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Exception,
            Self::Fatal,
        ]
    }

    /// The name centered to [`HEADER_WIDTH`], sitting left of center when
    /// the padding splits unevenly. `"UNKNOWN"` stands in for a severity
    /// with no name.
    #[must_use]
    pub fn header(self) -> String {
        let name = self.name();
        if name.is_empty() {
            return "UNKNOWN".to_string();
        }

        let len = name.chars().count();
        if len >= HEADER_WIDTH {
            return name.to_string();
        }

        let padding = HEADER_WIDTH - len;
        let left = padding / 2;
        let right = padding - left;
        format!("{}{}{}", " ".repeat(left), name, " ".repeat(right))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from
/// other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "exception" => Ok(Self::Exception),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Bitwise combination of enabled severities, used to filter writes.
///
/// A write passes the filter when the intersection of the configured mask
/// and the entry's flag is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeverityMask(u8);

impl SeverityMask {
    /// Rejects every write.
    pub const NONE: Self = Self(0);

    /// Accepts every severity in the enumeration.
    pub const ALL: Self = Self(
        Severity::Debug.bits()
            | Severity::Info.bits()
            | Severity::Warning.bits()
            | Severity::Error.bits()
            | Severity::Exception.bits()
            | Severity::Fatal.bits(),
    );

    /// Rebuilds a mask from its raw bits; bits outside the enumeration are
    /// carried but never match any severity.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bits, for storage in an atomic.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bitwise intersection test against a single flag.
    #[must_use]
    pub const fn contains(self, severity: Severity) -> bool {
        self.0 & severity.bits() != 0
    }

    #[must_use]
    pub const fn with(self, severity: Severity) -> Self {
        Self(self.0 | severity.bits())
    }

    #[must_use]
    pub const fn without(self, severity: Severity) -> Self {
        Self(self.0 & !severity.bits())
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Severity> for SeverityMask {
    fn from(severity: Severity) -> Self {
        Self(severity.bits())
    }
}

impl BitOr for SeverityMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Severity> for SeverityMask {
    type Output = Self;

    fn bitor(self, rhs: Severity) -> Self {
        self.with(rhs)
    }
}

impl BitOr for Severity {
    type Output = SeverityMask;

    fn bitor(self, rhs: Self) -> SeverityMask {
        SeverityMask(self.bits() | rhs.bits())
    }
}

impl BitOr<SeverityMask> for Severity {
    type Output = SeverityMask;

    fn bitor(self, rhs: SeverityMask) -> SeverityMask {
        rhs.with(self)
    }
}

impl BitOrAssign for SeverityMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<Severity> for SeverityMask {
    fn bitor_assign(&mut self, rhs: Severity) {
        self.0 |= rhs.bits();
    }
}
