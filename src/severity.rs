//! Severity vocabulary for the logging front end.

use std::fmt;

/// Severity of a log record.
///
/// Severities are ordered from least to most severe, with [`Severity::Off`]
/// as a sentinel that disables logging entirely. The sentinel sorts above
/// every real severity so that threshold filters built on `>=` naturally
/// reject everything when the threshold is `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Verbose diagnostic detail
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// General information
    Information = 2,
    /// Warning messages
    Warning = 3,
    /// Error messages
    Error = 4,
    /// Unrecoverable failures
    Critical = 5,
    /// Sentinel: never log
    Off = 6,
}

impl Severity {
    /// Converts from the raw u8 representation.
    ///
    /// Returns `None` for values outside the known range. Callers bridging
    /// from a host front end normalize unknown values with
    /// `.unwrap_or(Severity::Information)`.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Information),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Critical),
            6 => Some(Self::Off),
            _ => None,
        }
    }

    /// Returns the severity name for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
