//! CSS value classification
//!
//! Lexical classification of raw declaration value text per:
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Classification is a pure function of the input text. It never looks at
//! the property the value is destined for; property-specific grammar checks
//! live in [`crate::property`].

use serde::Serialize;
use strum_macros::Display;

mod color;
pub mod measurement;

pub use color::NAMED_COLORS;
pub use measurement::{parse_length, parse_measurement, parse_percent};

use color::FunctionMatch;

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// The length units the classifier recognizes. Note that `ex` is a
/// first-class unit here ([§ 5.1.1](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
/// "Equal to the used x-height of the first available font"); host CSS
/// object models have historically dropped it.
pub const LENGTH_UNITS: [&str; 14] = [
    "in", "cm", "mm", "pt", "pc", "px", "em", "ex", "ch", "rem", "vh", "vw", "vmin", "vmax",
];

/// [§ 6.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
const ANGLE_UNITS: [&str; 3] = ["deg", "grad", "rad"];

/// The lexical category of a single CSS declaration value.
///
/// Exactly one category is assigned to any classifiable value; text that
/// reaches a color-function shape but fails its internal checks classifies
/// as nothing at all (`value_type` returns `None`), never as a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum ValueType {
    /// [§ 4.1 Integers](https://www.w3.org/TR/css-values-4/#integers)
    /// "one or more decimal digits 0 through 9 ... optionally preceded
    /// by a single + or - sign"
    Integer,
    /// [§ 4.2 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
    /// A signed decimal with a fractional part.
    Number,
    /// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    /// A decimal immediately followed by one of [`LENGTH_UNITS`], or a
    /// bare unitless `0`.
    Length,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "a <number> immediately followed by a percent sign '%'"
    Percent,
    /// [§ 3.4 URLs](https://www.w3.org/TR/css-values-4/#urls)
    /// `url( ... )`, whitespace-tolerant inside the parentheses.
    Url,
    /// [§ 3.3 Strings](https://www.w3.org/TR/css-values-4/#strings)
    /// A double- or single-quoted string.
    QuotedString,
    /// [§ 6.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
    /// A decimal immediately followed by `deg`, `grad`, or `rad`.
    Angle,
    /// [CSS Color 4 § 4](https://www.w3.org/TR/css-color-4/#color-syntax)
    /// Hex notation, a well-formed `rgb()`/`rgba()` function, or a
    /// recognized color keyword.
    Color,
    /// [§ 3.1 Pre-defined Keywords](https://www.w3.org/TR/css-values-4/#keywords)
    /// Any other text; the catch-all category.
    Keyword,
    /// The empty value. Assigning it to a property removes the property.
    NullOrEmpty,
}

/// Classify raw declaration value text into its lexical [`ValueType`].
///
/// Rules are tried in a fixed priority order because several patterns
/// overlap: `"0"` is an [`ValueType::Integer`] even though the length
/// grammar also admits a bare zero.
///
/// Returns `None` for text that matches an `rgb()`/`rgba()` function shape
/// but fails its internal part-count or part-type checks. Callers that
/// branch on type membership must treat `None` as unconditionally invalid,
/// not fall through to [`ValueType::Keyword`].
#[must_use]
pub fn value_type(val: &str) -> Option<ValueType> {
    if val.is_empty() {
        return Some(ValueType::NullOrEmpty);
    }
    if is_integer(val) {
        return Some(ValueType::Integer);
    }
    if is_number(val) {
        return Some(ValueType::Number);
    }
    if is_length(val) {
        return Some(ValueType::Length);
    }
    if is_percent(val) {
        return Some(ValueType::Percent);
    }
    if is_url(val) {
        return Some(ValueType::Url);
    }
    if is_quoted_string(val) {
        return Some(ValueType::QuotedString);
    }
    if is_angle(val) {
        return Some(ValueType::Angle);
    }
    if color::is_hex_color(val) {
        return Some(ValueType::Color);
    }
    // rgb()/rgba() shapes are terminal: a match that fails the internal
    // checks is invalid, never a keyword.
    match color::match_rgb_function(val) {
        FunctionMatch::Valid => return Some(ValueType::Color),
        FunctionMatch::Invalid => return None,
        FunctionMatch::NotAFunction => {}
    }
    match color::match_rgba_function(val) {
        FunctionMatch::Valid => return Some(ValueType::Color),
        FunctionMatch::Invalid => return None,
        FunctionMatch::NotAFunction => {}
    }
    if color::is_named_color(val) {
        return Some(ValueType::Color);
    }
    Some(ValueType::Keyword)
}

/// [§ 4.1 Integers](https://www.w3.org/TR/css-values-4/#integers)
///
/// `[-+]?[0-9]+` — digits only, optionally signed, no fractional part.
pub(crate) fn is_integer(val: &str) -> bool {
    let digits = val.strip_prefix(['+', '-']).unwrap_or(val);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// [§ 4.2 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
///
/// `[-+]?[0-9]*\.[0-9]+` — a decimal point and fraction digits are
/// required; `"1."` and `"1"` are not numbers in this grammar.
pub(crate) fn is_number(val: &str) -> bool {
    let v = val.strip_prefix(['+', '-']).unwrap_or(val);
    let Some((int, frac)) = v.split_once('.') else {
        return false;
    };
    int.bytes().all(|b| b.is_ascii_digit())
        && !frac.is_empty()
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// `[-+]?[0-9]*\.?[0-9]+` — the numeric part shared by the length,
/// percentage, and angle grammars (decimal point optional).
fn is_decimal(val: &str) -> bool {
    let v = val.strip_prefix(['+', '-']).unwrap_or(val);
    match v.split_once('.') {
        Some((int, frac)) => {
            int.bytes().all(|b| b.is_ascii_digit())
                && !frac.is_empty()
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit()),
    }
}

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// A bare `0`, or a decimal immediately followed by one of
/// [`LENGTH_UNITS`]. Unit matching is case-sensitive.
fn is_length(val: &str) -> bool {
    if val == "0" {
        return true;
    }
    // Every unit must be tried: "10vmin" ends with "in" too, but only the
    // "vmin" suffix leaves a valid decimal prefix.
    LENGTH_UNITS
        .iter()
        .any(|&unit| val.strip_suffix(unit).is_some_and(is_decimal))
}

/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
pub(crate) fn is_percent(val: &str) -> bool {
    val.strip_suffix('%').is_some_and(is_decimal)
}

/// [§ 6.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
fn is_angle(val: &str) -> bool {
    // Each suffix is checked against the decimal grammar, so "1grad"
    // never misclassifies through the shorter "rad" suffix.
    ANGLE_UNITS
        .iter()
        .any(|&unit| val.strip_suffix(unit).is_some_and(is_decimal))
}

/// [§ 3.4 URLs](https://www.w3.org/TR/css-values-4/#urls)
///
/// `url( ... )` with anything but a closing parenthesis inside.
fn is_url(val: &str) -> bool {
    val.strip_prefix("url(")
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(|inner| !inner.contains(')'))
}

/// [§ 3.3 Strings](https://www.w3.org/TR/css-values-4/#strings)
///
/// A double- or single-quoted string with no embedded quote of the same
/// kind.
fn is_quoted_string(val: &str) -> bool {
    for quote in ['"', '\''] {
        if let Some(inner) = val
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return !inner.contains(quote);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_forms() {
        assert!(is_decimal("10"));
        assert!(is_decimal("1.5"));
        assert!(is_decimal(".5"));
        assert!(is_decimal("+.5"));
        assert!(is_decimal("-10"));
        assert!(!is_decimal(""));
        assert!(!is_decimal("+"));
        assert!(!is_decimal("1."));
        assert!(!is_decimal("1.2.3"));
    }

    #[test]
    fn test_length_suffix_overlap() {
        // "10vmin" ends with the "in" unit as well; only "vmin" is the
        // real suffix.
        assert!(is_length("10vmin"));
        assert!(is_length("2in"));
        assert!(!is_length("10vm"));
    }

    #[test]
    fn test_unit_case_sensitivity() {
        // Units are matched case-sensitively, as the source grammar does.
        assert!(!is_length("10PX"));
        assert!(is_length("10px"));
    }
}
