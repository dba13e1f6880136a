//! Governed properties: validators and accessors
//!
//! [CSS Box Model Level 4 § 6](https://www.w3.org/TR/css-box-4/#margins)
//! [CSS 2.1 § 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
//! [CSS 2.1 § 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
//!
//! One getter/setter pair per governed property: `width`, `padding`,
//! `margin`, and the eight directional side properties. Setters accept
//! text or a number coercible to text, and are silent no-ops on invalid
//! input; prior stored state is never touched by a rejected assignment.

use serde::Serialize;
use strum_macros::Display;

use cardinal_common::warning::warn_once;

use crate::declaration::{PropertyValue, StyleDeclaration};
use crate::value::{ValueType, parse_measurement, value_type};

pub mod shorthand;

use shorthand::{implicit_setter, sub_implicit_setter};

/// [CSS Values 4 § 3.1.1 CSS-wide keywords](https://www.w3.org/TR/css-values-4/#common-keywords)
///
/// "inherit, initial, and unset ... are accepted by all properties."
/// Matched case-insensitively; the empty string travels the same path
/// because assigning it clears the property group.
const CSS_WIDE_KEYWORDS: [&str; 3] = ["inherit", "initial", "unset"];

/// The two four-sided shorthand groups this engine reconciles.
///
/// [CSS Cascade 4 § 2.3 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
/// "Some properties are shorthand properties, meaning that they allow
/// authors to specify the values of several properties with a single
/// property."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum BoxShorthand {
    /// [§ 8.4](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    /// "Value: `<padding-width>`{1,4}" where
    /// "`<padding-width>` = `<length>` | `<percentage>`"
    Padding,
    /// [§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    /// "Value: `<margin-width>`{1,4}" where
    /// "`<margin-width>` = `<length>` | `<percentage>` | auto"
    Margin,
}

impl BoxShorthand {
    /// The shorthand's own property name, also the prefix of its four
    /// side properties.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Margin => "margin",
        }
    }

    /// Whether a single candidate part is legal for this group.
    ///
    /// Classification is strict: a bare `"0"` is an integer, not a
    /// length, and is rejected here exactly as the value grammar orders
    /// the overlapping patterns.
    #[must_use]
    pub fn is_valid(self, v: &str) -> bool {
        if self == Self::Margin && v.eq_ignore_ascii_case("auto") {
            return true;
        }
        matches!(
            value_type(v),
            Some(ValueType::Length | ValueType::Percent)
        )
    }

    /// Normalize one accepted part. Margin's `auto` passes through
    /// unparsed; everything else goes through measurement
    /// normalization.
    #[must_use]
    pub fn parse(self, v: &str) -> Option<String> {
        if self == Self::Margin && v.eq_ignore_ascii_case("auto") {
            return Some("auto".to_string());
        }
        parse_measurement(v)
    }
}

/// One of the four directional sides of a box shorthand, in the fixed
/// top-right-bottom-left order the shorthand serializes in.
///
/// [§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties)
/// "If there are four values they apply to top, right, bottom and left
/// respectively."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Side {
    /// The `-top` longhand.
    Top,
    /// The `-right` longhand.
    Right,
    /// The `-bottom` longhand.
    Bottom,
    /// The `-left` longhand.
    Left,
}

impl Side {
    /// All four sides in shorthand serialization order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The suffix this side contributes to a longhand property name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl StyleDeclaration {
    /// The stored `width` text (empty if unset).
    #[must_use]
    pub fn width(&self) -> String {
        self.get_property_value("width")
    }

    /// Set `width`.
    ///
    /// [CSS 2.1 § 10.2](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
    /// "Value: `<length>` | `<percentage>` | auto | inherit"
    ///
    /// `auto` (case-insensitive, trimmed) is stored literally; anything
    /// else is measurement-normalized. Unparseable input is a no-op.
    pub fn set_width(&mut self, v: impl Into<PropertyValue>) {
        let v = v.into().into_text();
        let Some(parsed) = parse_width(&v) else {
            warn_once("CSS", &format!("invalid value '{v}' for 'width'"));
            return;
        };
        self.store("width", &parsed);
    }

    /// The stored `padding` shorthand text (empty if unset).
    #[must_use]
    pub fn padding(&self) -> String {
        self.get_property_value("padding")
    }

    /// Set the `padding` shorthand; see [`BoxShorthand::Padding`].
    pub fn set_padding(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_shorthand(BoxShorthand::Padding, v);
    }

    /// The stored `margin` shorthand text (empty if unset).
    #[must_use]
    pub fn margin(&self) -> String {
        self.get_property_value("margin")
    }

    /// Set the `margin` shorthand; see [`BoxShorthand::Margin`].
    pub fn set_margin(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_shorthand(BoxShorthand::Margin, v);
    }

    /// The stored `padding-top` text (answers from inside a collapsed
    /// shorthand too).
    #[must_use]
    pub fn padding_top(&self) -> String {
        self.get_property_value("padding-top")
    }

    /// Set `padding-top`, reconciling the shorthand afterwards.
    pub fn set_padding_top(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Padding, Side::Top, v);
    }

    /// The stored `padding-right` text.
    #[must_use]
    pub fn padding_right(&self) -> String {
        self.get_property_value("padding-right")
    }

    /// Set `padding-right`, reconciling the shorthand afterwards.
    pub fn set_padding_right(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Padding, Side::Right, v);
    }

    /// The stored `padding-bottom` text.
    #[must_use]
    pub fn padding_bottom(&self) -> String {
        self.get_property_value("padding-bottom")
    }

    /// Set `padding-bottom`, reconciling the shorthand afterwards.
    pub fn set_padding_bottom(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Padding, Side::Bottom, v);
    }

    /// The stored `padding-left` text.
    #[must_use]
    pub fn padding_left(&self) -> String {
        self.get_property_value("padding-left")
    }

    /// Set `padding-left`, reconciling the shorthand afterwards.
    pub fn set_padding_left(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Padding, Side::Left, v);
    }

    /// The stored `margin-top` text.
    #[must_use]
    pub fn margin_top(&self) -> String {
        self.get_property_value("margin-top")
    }

    /// Set `margin-top`, reconciling the shorthand afterwards.
    pub fn set_margin_top(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Margin, Side::Top, v);
    }

    /// The stored `margin-right` text.
    #[must_use]
    pub fn margin_right(&self) -> String {
        self.get_property_value("margin-right")
    }

    /// Set `margin-right`, reconciling the shorthand afterwards.
    pub fn set_margin_right(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Margin, Side::Right, v);
    }

    /// The stored `margin-bottom` text.
    #[must_use]
    pub fn margin_bottom(&self) -> String {
        self.get_property_value("margin-bottom")
    }

    /// Set `margin-bottom`, reconciling the shorthand afterwards.
    pub fn set_margin_bottom(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Margin, Side::Bottom, v);
    }

    /// The stored `margin-left` text.
    #[must_use]
    pub fn margin_left(&self) -> String {
        self.get_property_value("margin-left")
    }

    /// Set `margin-left`, reconciling the shorthand afterwards.
    pub fn set_margin_left(&mut self, v: impl Into<PropertyValue>) {
        self.set_box_side(BoxShorthand::Margin, Side::Left, v);
    }

    /// Shared shorthand setter body for padding and margin.
    ///
    /// The CSS-wide keywords and the empty string bypass validation and
    /// broadcast (lowercased) to all four sides and the shorthand
    /// itself; everything else runs the group's grammar.
    fn set_box_shorthand(&mut self, group: BoxShorthand, v: impl Into<PropertyValue>) {
        let v = v.into().into_text();
        let lower = v.to_ascii_lowercase();
        if lower.is_empty() || CSS_WIDE_KEYWORDS.contains(&lower.as_str()) {
            // Global setter path: always succeeds, no classification.
            let _ = implicit_setter(self, group.prefix(), &lower, |_| true, |s| {
                Some(s.to_string())
            });
            return;
        }
        if implicit_setter(
            self,
            group.prefix(),
            &v,
            |part| group.is_valid(part),
            |part| group.parse(part),
        )
        .is_none()
        {
            warn_once(
                "CSS",
                &format!("invalid value '{v}' for '{}'", group.prefix()),
            );
        }
    }

    /// Shared side setter body; see
    /// [`shorthand::sub_implicit_setter`] for the reconciliation rule.
    fn set_box_side(&mut self, group: BoxShorthand, side: Side, v: impl Into<PropertyValue>) {
        let v = v.into().into_text();
        if sub_implicit_setter(
            self,
            group.prefix(),
            side,
            &v,
            |part| group.is_valid(part),
            |part| group.parse(part),
        )
        .is_none()
        {
            warn_once(
                "CSS",
                &format!(
                    "invalid value '{v}' for '{}-{}'",
                    group.prefix(),
                    side.as_str()
                ),
            );
        }
    }
}

/// [CSS 2.1 § 10.2](https://www.w3.org/TR/CSS2/visudet.html#the-width-property)
///
/// `auto` stored literally, otherwise measurement-normalized.
fn parse_width(v: &str) -> Option<String> {
    if v.trim().eq_ignore_ascii_case("auto") {
        return Some("auto".to_string());
    }
    parse_measurement(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_grammar() {
        assert!(BoxShorthand::Padding.is_valid("10px"));
        assert!(BoxShorthand::Padding.is_valid("50%"));
        assert!(!BoxShorthand::Padding.is_valid("auto"));
        // "0" classifies as an integer before the length rule is tried.
        assert!(!BoxShorthand::Padding.is_valid("0"));
        assert!(!BoxShorthand::Padding.is_valid("banana"));
    }

    #[test]
    fn test_margin_grammar_accepts_auto() {
        assert!(BoxShorthand::Margin.is_valid("AUTO"));
        assert_eq!(
            BoxShorthand::Margin.parse("AUTO"),
            Some("auto".to_string())
        );
        assert_eq!(
            BoxShorthand::Margin.parse("+1.50px"),
            Some("1.5px".to_string())
        );
    }

    #[test]
    fn test_width_parse() {
        assert_eq!(parse_width(" AUTO "), Some("auto".to_string()));
        assert_eq!(parse_width("10px"), Some("10px".to_string()));
        assert_eq!(parse_width("not-a-length"), None);
    }
}
