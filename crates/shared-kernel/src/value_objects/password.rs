// crates/shared-kernel/src/value_objects/password.rs
use std::fmt;

/// Candidate value typed by the user.
///
/// Kept verbatim: no trimming, no numeric normalisation. `"05"` and `"5"` are
/// different passwords.
#[derive(Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Passwords stay out of logs by default.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.chars().count())
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
