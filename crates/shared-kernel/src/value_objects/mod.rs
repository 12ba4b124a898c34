// crates/shared-kernel/src/value_objects/mod.rs
pub mod form;
pub mod password;
pub mod range;
pub mod verdict;

pub use form::CheckForm;
pub use password::Password;
pub use range::ScanRange;
pub use verdict::{Outcome, Tint, Verdict};
