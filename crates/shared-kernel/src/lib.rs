// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    BoundField, DomainError, DomainResult, ErrorContext, PresentationError, PresentationResult,
    RangeMatchError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{CheckForm, Outcome, Password, ScanRange, Tint, Verdict};
pub use value_objects::verdict::{FOUND_MESSAGE, INVALID_RANGE_MESSAGE, NOT_FOUND_MESSAGE};
