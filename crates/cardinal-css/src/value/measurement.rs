//! Measurement normalization
//!
//! Canonical text for `<length>` and `<percentage>` values, per the
//! serialization conventions of
//! [CSSOM § 6.7.2](https://drafts.csswg.org/cssom/#serializing-css-values):
//! the numeric part is re-serialized through its numeric value, which
//! collapses redundant signs, leading zeros, and trailing fraction zeros
//! (`"+1.50px"` becomes `"1.5px"`). Normalization is idempotent.

use super::{ValueType, value_type};

/// Normalize a length or percentage to canonical text.
///
/// Returns `None` when the input is neither; rejected input produces no
/// output rather than an error, matching the permissive declaration
/// parsing contract.
#[must_use]
pub fn parse_measurement(val: &str) -> Option<String> {
    parse_length(val).or_else(|| parse_percent(val))
}

/// Normalize a `<length>` to canonical text.
///
/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// A bare `"0"` serializes as `"0px"`.
#[must_use]
pub fn parse_length(val: &str) -> Option<String> {
    if val == "0" {
        return Some("0px".to_string());
    }
    if value_type(val) != Some(ValueType::Length) {
        return None;
    }
    let unit_start = val.find(|c: char| c.is_ascii_alphabetic())?;
    let (number, unit) = val.split_at(unit_start);
    Some(format!("{}{unit}", canonical_number(number)?))
}

/// Normalize a `<percentage>` to canonical text.
///
/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
#[must_use]
pub fn parse_percent(val: &str) -> Option<String> {
    if value_type(val) != Some(ValueType::Percent) {
        return None;
    }
    let number = val.strip_suffix('%')?;
    Some(format!("{}%", canonical_number(number)?))
}

/// Re-serialize a numeric part through `f64`.
///
/// `-0` serializes as `0` so the sign cannot survive a round trip.
fn canonical_number(number: &str) -> Option<f64> {
    let n: f64 = number.parse().ok()?;
    // IEEE 754: -0.0 + 0.0 is +0.0, discarding a negative zero's sign.
    Some(n + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_forms() {
        assert_eq!(parse_length("+1.50px"), Some("1.5px".to_string()));
        assert_eq!(parse_length(".5em"), Some("0.5em".to_string()));
        assert_eq!(parse_length("0"), Some("0px".to_string()));
        assert_eq!(parse_length("-0px"), Some("0px".to_string()));
        assert_eq!(parse_percent("050%"), Some("50%".to_string()));
        assert_eq!(parse_measurement("banana"), None);
    }

    #[test]
    fn test_idempotent() {
        for input in ["3ex", "+1.50px", "0", "12.25%", "-4rem"] {
            let once = parse_measurement(input).unwrap();
            let twice = parse_measurement(&once).unwrap();
            assert_eq!(once, twice);
        }
    }
}
