// crates/shared-kernel/src/value_objects/form.rs
use super::Password;

/// The three text fields exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckForm {
    pub password: Password,
    pub start: String,
    pub end: String,
}

impl CheckForm {
    pub fn new(
        password: impl Into<Password>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            password: password.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}
