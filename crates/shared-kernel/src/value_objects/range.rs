// crates/shared-kernel/src/value_objects/range.rs
use std::{fmt, ops::RangeInclusive};

/// Inclusive integer interval `[start, end]`.
///
/// `start > end` is allowed and denotes an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanRange {
    start: i64,
    end: i64,
}

impl ScanRange {
    #[inline]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start > self.end
    }

    /// Number of integers in the range, or `None` when it covers every `i64`.
    pub fn len(self) -> Option<u64> {
        if self.is_empty() {
            return Some(0);
        }
        let span = self.end.abs_diff(self.start);
        span.checked_add(1)
    }

    pub fn iter(self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl IntoIterator for ScanRange {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ScanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
