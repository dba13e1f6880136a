//! Integration tests for CSS value classification.

use cardinal_css::{LENGTH_UNITS, ValueType, value_type};

#[test]
fn test_empty_is_null_or_empty() {
    assert_eq!(value_type(""), Some(ValueType::NullOrEmpty));
}

#[test]
fn test_integer() {
    assert_eq!(value_type("50"), Some(ValueType::Integer));
    assert_eq!(value_type("+7"), Some(ValueType::Integer));
    assert_eq!(value_type("-12"), Some(ValueType::Integer));
}

#[test]
fn test_number_requires_fraction() {
    assert_eq!(value_type("1.0"), Some(ValueType::Number));
    assert_eq!(value_type("-.5"), Some(ValueType::Number));
    // No fraction digits: an integer, not a number.
    assert_eq!(value_type("1"), Some(ValueType::Integer));
}

#[test]
fn test_every_length_unit() {
    // [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
    // The full unit set, ex included; dropping ex is the classic host
    // object model defect this engine exists to avoid.
    for unit in LENGTH_UNITS {
        let value = format!("3{unit}");
        assert_eq!(
            value_type(&value),
            Some(ValueType::Length),
            "unit {unit} must classify as a length"
        );
    }
    assert_eq!(value_type("3ex"), Some(ValueType::Length));
    assert_eq!(value_type("10px"), Some(ValueType::Length));
    assert_eq!(value_type("1.5rem"), Some(ValueType::Length));
}

#[test]
fn test_unitless_zero_classifies_as_integer() {
    // The integer rule is tried before the length rule, so a bare "0"
    // never reaches the length grammar. "0px" is a plain length.
    assert_eq!(value_type("0"), Some(ValueType::Integer));
    assert_eq!(value_type("0px"), Some(ValueType::Length));
}

#[test]
fn test_percent() {
    assert_eq!(value_type("50%"), Some(ValueType::Percent));
    assert_eq!(value_type("-2.5%"), Some(ValueType::Percent));
    assert_eq!(value_type("%"), Some(ValueType::Keyword));
}

#[test]
fn test_url() {
    assert_eq!(value_type("url(foo.png)"), Some(ValueType::Url));
    assert_eq!(value_type("url(  spaced.png  )"), Some(ValueType::Url));
    // A closing parenthesis inside the body breaks the shape.
    assert_eq!(value_type("url(a)b)"), Some(ValueType::Keyword));
}

#[test]
fn test_quoted_string() {
    assert_eq!(value_type("\"hello\""), Some(ValueType::QuotedString));
    assert_eq!(value_type("'hello'"), Some(ValueType::QuotedString));
    // Mismatched quotes fall through to keyword.
    assert_eq!(value_type("\"hello'"), Some(ValueType::Keyword));
}

#[test]
fn test_angle() {
    assert_eq!(value_type("45deg"), Some(ValueType::Angle));
    assert_eq!(value_type("1.5rad"), Some(ValueType::Angle));
    assert_eq!(value_type("-200grad"), Some(ValueType::Angle));
}

#[test]
fn test_hex_color() {
    assert_eq!(value_type("#fff"), Some(ValueType::Color));
    assert_eq!(value_type("#FFAA00"), Some(ValueType::Color));
    assert_eq!(value_type("#ffff"), Some(ValueType::Keyword));
}

#[test]
fn test_rgb_function() {
    assert_eq!(value_type("rgb(10,20,30)"), Some(ValueType::Color));
    assert_eq!(value_type("rgb(10%, 20%, 30%)"), Some(ValueType::Color));
}

#[test]
fn test_rgb_mixed_parts_are_invalid() {
    // A malformed color function is invalid outright, never a keyword;
    // validators that branch on type membership depend on this.
    assert_eq!(value_type("rgb(10%,20,30)"), None);
    assert_eq!(value_type("rgb(10,20)"), None);
    assert_eq!(value_type("rgb(10,20,30,40)"), None);
}

#[test]
fn test_rgba_function() {
    assert_eq!(value_type("rgba(10,20,30,0.5)"), Some(ValueType::Color));
    assert_eq!(
        value_type("rgba(10%,20%,30%,0.5)"),
        Some(ValueType::Color)
    );
    // Mixed channel forms are rejected.
    assert_eq!(value_type("rgba(10%,20,30,0.5)"), None);
    // The alpha must match the number grammar (fraction digits
    // required); its range is deliberately unchecked.
    assert_eq!(value_type("rgba(10,20,30,7.5)"), Some(ValueType::Color));
    assert_eq!(value_type("rgba(10,20,30,1)"), None);
}

#[test]
fn test_named_colors_case_insensitive() {
    assert_eq!(value_type("maroon"), Some(ValueType::Color));
    assert_eq!(value_type("MAROON"), Some(ValueType::Color));
    assert_eq!(value_type("WindowText"), Some(ValueType::Color));
    assert_eq!(value_type("threedface"), Some(ValueType::Color));
}

#[test]
fn test_keyword_fallback() {
    assert_eq!(value_type("inherit"), Some(ValueType::Keyword));
    assert_eq!(value_type("banana"), Some(ValueType::Keyword));
    assert_eq!(value_type("not-a-length"), Some(ValueType::Keyword));
}
