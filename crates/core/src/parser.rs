use range_match_shared_kernel::{BoundField, DomainError, DomainResult};

/// Parses one range bound as a signed base-10 integer.
///
/// Surrounding ASCII whitespace is ignored and a single leading `+` or `-` is
/// accepted. Everything else (empty input, fractions, exponents, trailing
/// garbage, values outside `i64`) is rejected.
pub fn parse_bound(field: BoundField, input: &str) -> DomainResult<i64> {
    input
        .trim_ascii()
        .parse::<i64>()
        .map_err(|e| DomainError::InvalidBound {
            field,
            input: input.to_string(),
            reason: e.to_string(),
        })
}
