//! Well-known log priority definitions
//!
//! The formatter itself treats priorities as opaque `i32` values and passes
//! them through unchanged; this vocabulary exists for callers and sinks.

use std::fmt;
use std::str::FromStr;

/// The conventional transport priorities, in ascending severity.
///
/// Values match the numeric levels of the console log transport the default
/// sink mimics, so a raw `i32` from foreign code maps cleanly via
/// [`Priority::from_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Default)]
#[repr(i32)]
pub enum Priority {
    Verbose = 2,
    #[default]
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
    /// "What a Terrible Failure": conditions that should never happen.
    Assert = 7,
}

impl Priority {
    /// The raw wire value carried through the formatter and sinks.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Map a raw priority back to a well-known level, if it is one.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            2 => Some(Priority::Verbose),
            3 => Some(Priority::Debug),
            4 => Some(Priority::Info),
            5 => Some(Priority::Warn),
            6 => Some(Priority::Error),
            7 => Some(Priority::Assert),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Priority::Verbose => "VERBOSE",
            Priority::Debug => "DEBUG",
            Priority::Info => "INFO",
            Priority::Warn => "WARN",
            Priority::Error => "ERROR",
            Priority::Assert => "ASSERT",
        }
    }

    /// Single-letter form used by the console sink's `L/tag:` layout.
    pub const fn letter(self) -> &'static str {
        match self {
            Priority::Verbose => "V",
            Priority::Debug => "D",
            Priority::Info => "I",
            Priority::Warn => "W",
            Priority::Error => "E",
            Priority::Assert => "A",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Priority::Verbose => BrightBlack,
            Priority::Debug => Blue,
            Priority::Info => Green,
            Priority::Warn => Yellow,
            Priority::Error => Red,
            Priority::Assert => BrightRed,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VERBOSE" => Ok(Priority::Verbose),
            "DEBUG" => Ok(Priority::Debug),
            "INFO" => Ok(Priority::Info),
            "WARN" | "WARNING" => Ok(Priority::Warn),
            "ERROR" => Ok(Priority::Error),
            "ASSERT" | "WTF" => Ok(Priority::Assert),
            _ => Err(format!("Invalid priority: '{}'", s)),
        }
    }
}
