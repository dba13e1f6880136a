//! Shorthand reconciliation
//!
//! [CSS Cascade 4 § 2.3 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
//!
//! "When a shorthand is set ... it sets all of its longhands."
//!
//! The inverse direction is this module's reason to exist: after every
//! individual side write, the four sides are checked and, the moment all
//! four hold a value, collapsed back into the shorthand. The invariant
//! maintained throughout: the shorthand is declared with the
//! space-joined normalized side values **iff** all four sides hold a
//! value; no partial shorthand is ever synthesized.

use crate::declaration::StyleDeclaration;
use crate::property::Side;

/// Set a whole shorthand from up to four whitespace-separated parts.
///
/// [§ 8.3](https://www.w3.org/TR/CSS2/box.html#margin-properties)
/// "If there is only one component value, it applies to all sides. If
/// there are two values, the top and bottom ... are set to the first
/// value and the right and left ... are set to the second. If there are
/// three values, the top is set to the first value, the left and right
/// are set to the second, and the bottom is set to the third."
///
/// Every part must satisfy `is_valid` and normalize through `parser`;
/// otherwise the whole assignment is rejected and nothing changes. On
/// acceptance the shorthand is declared with the joined parsed parts,
/// and each side's slot in the raw value map is overwritten while its
/// individual declaration is removed.
///
/// Returns the stored shorthand text, or `None` on rejection.
pub(crate) fn implicit_setter<V, P>(
    decl: &mut StyleDeclaration,
    prefix: &str,
    v: &str,
    is_valid: V,
    parser: P,
) -> Option<String>
where
    V: Fn(&str) -> bool,
    P: Fn(&str) -> Option<String>,
{
    // The empty string is a single empty part: it broadcasts emptiness
    // to all four sides and removes the shorthand.
    let parts: Vec<&str> = if v.is_empty() {
        vec![""]
    } else {
        v.split_whitespace().collect()
    };
    if parts.is_empty() || parts.len() > 4 {
        return None;
    }
    if !parts.iter().all(|part| is_valid(part)) {
        return None;
    }
    let parsed = parts
        .iter()
        .map(|part| parser(part))
        .collect::<Option<Vec<String>>>()?;
    let joined = parsed.join(" ");

    // [§ 8.3] expansion of 1/2/3-part forms to the four sides.
    let indices: [usize; 4] = match parsed.len() {
        1 => [0, 0, 0, 0],
        2 => [0, 1, 0, 1],
        3 => [0, 1, 2, 1],
        _ => [0, 1, 2, 3],
    };

    for (side, &index) in Side::ALL.iter().zip(indices.iter()) {
        let property = side_property(prefix, *side);
        let _ = decl.remove_property(&property);
        // An empty part means the side is cleared; leave no raw slot
        // behind rather than storing an inert empty entry.
        if !parsed[index].is_empty() {
            decl.set_raw(&property, &parsed[index]);
        }
    }
    decl.store(prefix, &joined);
    Some(joined)
}

/// Set one side of a shorthand, then reconcile.
///
/// The side value is validated and normalized exactly like a shorthand
/// part, stored at `prefix-side`, and then the four side slots are read
/// in top-right-bottom-left order. If all four hold a non-empty value,
/// the four individual declarations are removed (their raw-map slots
/// are preserved) and the shorthand is declared as the space-joined
/// four values. If any side is still unset, the shorthand stays absent.
///
/// This runs after *every* side write, not only the fourth, so the
/// collapse fires exactly once, at the moment the fourth distinct side
/// becomes populated, regardless of assignment order.
///
/// Returns the normalized value stored on the side, or `None` on
/// rejection (a no-op that leaves prior state untouched).
pub(crate) fn sub_implicit_setter<V, P>(
    decl: &mut StyleDeclaration,
    prefix: &str,
    side: Side,
    v: &str,
    is_valid: V,
    parser: P,
) -> Option<String>
where
    V: Fn(&str) -> bool,
    P: Fn(&str) -> Option<String>,
{
    if !is_valid(v) {
        return None;
    }
    let parsed = parser(v)?;
    decl.store(&side_property(prefix, side), &parsed);

    let mut filled = Vec::with_capacity(4);
    for s in Side::ALL {
        match decl.raw_value(&side_property(prefix, s)) {
            Some(value) if !value.is_empty() => filled.push(value.to_string()),
            _ => break,
        }
    }
    if filled.len() == 4 {
        for (s, value) in Side::ALL.iter().zip(filled.iter()) {
            let property = side_property(prefix, *s);
            let _ = decl.remove_property(&property);
            decl.set_raw(&property, value);
        }
        decl.store(prefix, &filled.join(" "));
    }
    Some(parsed)
}

/// The longhand property name for one side of a shorthand group.
fn side_property(prefix: &str, side: Side) -> String {
    format!("{prefix}-{}", side.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_property_names() {
        assert_eq!(side_property("padding", Side::Top), "padding-top");
        assert_eq!(side_property("margin", Side::Left), "margin-left");
    }

    #[test]
    fn test_empty_broadcast_leaves_no_raw_side_slots() {
        let mut decl = StyleDeclaration::new();
        let identity = |s: &str| Some(s.to_string());
        let _ = implicit_setter(&mut decl, "padding", "1px 2px 3px 4px", |_| true, identity);
        let _ = implicit_setter(&mut decl, "padding", "", |_| true, identity);
        for side in Side::ALL {
            assert_eq!(decl.raw_value(&side_property("padding", side)), None);
        }
        assert!(decl.is_empty());
    }
}
