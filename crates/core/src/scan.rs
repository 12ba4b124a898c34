use range_match_shared_kernel::ScanRange;

/// What a scan saw before it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanReport {
    /// First integer whose decimal form equals the password.
    pub matched: Option<i64>,
    /// Candidates rendered and compared, including the match.
    pub examined: u64,
}

/// Walks `range` in ascending order and compares each integer's decimal
/// rendering with `password`, stopping at the first exact match.
///
/// Comparison is on strings, so `"05"` never matches `5`. Range size is not
/// bounded.
pub fn scan(password: &str, range: ScanRange) -> ScanReport {
    let mut report = ScanReport::default();

    for candidate in range {
        report.examined = report.examined.saturating_add(1);
        if candidate.to_string() == password {
            report.matched = Some(candidate);
            break;
        }
    }

    report
}
