//! Entry point for one check: three raw fields in, one display state out.

use range_match_shared_kernel::{
    BoundField, CheckForm, DomainResult, Outcome, ScanRange, Verdict,
};
use tracing::debug;

use crate::{parser::parse_bound, scan::scan};

/// Parses both bounds, start first.
pub fn parse_range(form: &CheckForm) -> DomainResult<ScanRange> {
    let start = parse_bound(BoundField::Start, &form.start)?;
    let end = parse_bound(BoundField::End, &form.end)?;
    Ok(ScanRange::new(start, end))
}

/// Runs the check. A bad bound short-circuits to `InvalidRange` without
/// scanning.
pub fn evaluate(form: &CheckForm) -> Verdict {
    let range = match parse_range(form) {
        Ok(range) => range,
        Err(err) => {
            debug!(error = %err, "rejecting range");
            return Verdict::InvalidRange;
        }
    };

    debug!(%range, size = ?range.len(), "scanning range");
    let report = scan(form.password.as_str(), range);
    let verdict = report.matched.map_or(Verdict::NotFound, Verdict::Found);
    debug!(
        examined = report.examined,
        verdict = %verdict,
        "scan finished"
    );
    verdict
}

pub fn check(form: &CheckForm) -> Outcome {
    Outcome::from(evaluate(form))
}
