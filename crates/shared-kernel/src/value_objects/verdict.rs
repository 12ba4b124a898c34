// crates/shared-kernel/src/value_objects/verdict.rs
use std::fmt;

use serde::Serialize;

pub const FOUND_MESSAGE: &str = "Password found in range";
pub const NOT_FOUND_MESSAGE: &str = "Password not found in range";
pub const INVALID_RANGE_MESSAGE: &str = "Invalid range";

/// Result of one range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// `value` is the integer whose decimal form equals the password.
    Found(i64),
    NotFound,
    InvalidRange,
}

impl Verdict {
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound | Self::InvalidRange => None,
        }
    }

    pub const fn tint(self) -> Tint {
        match self {
            Self::Found(_) => Tint::Green,
            Self::NotFound | Self::InvalidRange => Tint::Red,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Found(_) => FOUND_MESSAGE,
            Self::NotFound => NOT_FOUND_MESSAGE,
            Self::InvalidRange => INVALID_RANGE_MESSAGE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::InvalidRange => "invalid_range",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color tag of the result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Green,
    Red,
}

impl Tint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }

    /// SGR foreground code.
    pub const fn ansi_code(self) -> u8 {
        match self {
            Self::Green => 32,
            Self::Red => 31,
        }
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display state written after a check: message text plus its color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub color: Tint,
    pub verdict: Verdict,
}

impl Outcome {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            message: verdict.message().to_string(),
            color: verdict.tint(),
            verdict,
        }
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        Self::new(verdict)
    }
}
