//! CSS color lexical checks
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Only the lexical shapes matter here: hex notation, the legacy
//! comma-separated `rgb()`/`rgba()` functions, and the keyword tables.
//! Channel values are never range-checked; [§ 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions)
//! "Values outside these ranges are not invalid, but are clamped ... at
//! parsed-value time", and this engine stores declared values, not
//! parsed-value colors.

use super::{is_integer, is_number, is_percent};

/// [CSS Color 4 § 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
/// [CSS Color 3 § 4.5.1 CSS2 system colors](https://www.w3.org/TR/css-color-3/#css-system)
///
/// The 17 CSS1/CSS2.1 color keywords followed by the system color
/// keywords deprecated in CSS3. Matching is ASCII case-insensitive.
pub const NAMED_COLORS: [&str; 45] = [
    "maroon",
    "red",
    "orange",
    "yellow",
    "olive",
    "purple",
    "fuchsia",
    "white",
    "lime",
    "green",
    "navy",
    "blue",
    "aqua",
    "teal",
    "black",
    "silver",
    "gray",
    // Deprecated in CSS3
    "activeborder",
    "activecaption",
    "appworkspace",
    "background",
    "buttonface",
    "buttonhighlight",
    "buttonshadow",
    "buttontext",
    "captiontext",
    "graytext",
    "highlight",
    "highlighttext",
    "inactiveborder",
    "inactivecaption",
    "inactivecaptiontext",
    "infobackground",
    "infotext",
    "menu",
    "menutext",
    "scrollbar",
    "threeddarkshadow",
    "threedface",
    "threedhighlight",
    "threedlightshadow",
    "threedshadow",
    "window",
    "windowframe",
    "windowtext",
];

/// Outcome of matching a value against a color-function shape.
///
/// The distinction between `Invalid` and `NotAFunction` is load-bearing:
/// a value that looks like `rgb(...)` but fails the internal checks is
/// rejected outright, while a value that never matched the shape falls
/// through to the remaining classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FunctionMatch {
    /// Matched the shape and passed the part checks.
    Valid,
    /// Matched the shape but the parts are malformed.
    Invalid,
    /// Did not match the shape at all.
    NotAFunction,
}

/// [CSS Color 4 § 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// `#RGB` or `#RRGGBB`. The 4- and 8-digit alpha forms are not part of
/// this grammar.
pub(crate) fn is_hex_color(val: &str) -> bool {
    let Some(digits) = val.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// [CSS Color 4 § 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// Legacy comma-separated `rgb(a, b, c)`: exactly three parts, all
/// percentages or all integers. Mixed forms are malformed.
pub(crate) fn match_rgb_function(val: &str) -> FunctionMatch {
    let Some(inner) = function_body(val, "rgb(") else {
        return FunctionMatch::NotAFunction;
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return FunctionMatch::Invalid;
    }
    if parts.iter().all(|p| is_percent(p)) || parts.iter().all(|p| is_integer(p)) {
        return FunctionMatch::Valid;
    }
    FunctionMatch::Invalid
}

/// [CSS Color 4 § 4.1 The RGB Functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// Legacy comma-separated `rgba(a, b, c, d)`: exactly four parts, the
/// first three all percentages or all integers (no mixing), the fourth
/// matching the plain number grammar. The alpha is not range-checked.
pub(crate) fn match_rgba_function(val: &str) -> FunctionMatch {
    let Some(inner) = function_body(val, "rgba(") else {
        return FunctionMatch::NotAFunction;
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return FunctionMatch::Invalid;
    }
    let channels = &parts[..3];
    let channels_ok =
        channels.iter().all(|p| is_percent(p)) || channels.iter().all(|p| is_integer(p));
    if channels_ok && is_number(parts[3]) {
        return FunctionMatch::Valid;
    }
    FunctionMatch::Invalid
}

/// [CSS Color 4 § 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// "all of these keywords are ASCII case-insensitive"
pub(crate) fn is_named_color(val: &str) -> bool {
    NAMED_COLORS
        .iter()
        .any(|name| val.eq_ignore_ascii_case(name))
}

/// Extract the text between `prefix` and a trailing `)`, rejecting any
/// nested closing parenthesis.
fn function_body<'a>(val: &'a str, prefix: &str) -> Option<&'a str> {
    val.strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(')'))
        .filter(|inner| !inner.contains(')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_mixed_parts_is_invalid_not_keyword() {
        assert_eq!(match_rgb_function("rgb(10%,20,30)"), FunctionMatch::Invalid);
        assert_eq!(match_rgb_function("rgb(10,20,30)"), FunctionMatch::Valid);
        assert_eq!(
            match_rgb_function("rgb(10%,20%,30%)"),
            FunctionMatch::Valid
        );
        assert_eq!(match_rgb_function("maroon"), FunctionMatch::NotAFunction);
    }

    #[test]
    fn test_rgb_part_count() {
        assert_eq!(match_rgb_function("rgb(10,20)"), FunctionMatch::Invalid);
        assert_eq!(
            match_rgb_function("rgb(10,20,30,40)"),
            FunctionMatch::Invalid
        );
    }

    #[test]
    fn test_rgba_alpha_must_be_number() {
        // The alpha part follows the number grammar (fraction digits
        // required); its range is deliberately unchecked.
        assert_eq!(
            match_rgba_function("rgba(10,20,30,0.5)"),
            FunctionMatch::Valid
        );
        assert_eq!(
            match_rgba_function("rgba(10,20,30,7.5)"),
            FunctionMatch::Valid
        );
        assert_eq!(
            match_rgba_function("rgba(10,20,30,1)"),
            FunctionMatch::Invalid
        );
    }

    #[test]
    fn test_hex_color_lengths() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#AbCdEf"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color("fff"));
    }
}
