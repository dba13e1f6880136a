//! CSS value classification, measurement normalization, and shorthand
//! reconciliation for inline style declarations.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value Classification** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Integers, numbers, lengths (every unit, `ex` included), percentages
//!   - URLs, quoted strings, angles
//!   - Colors: hex notation, legacy `rgb()`/`rgba()`, named and system colors
//!   - Keyword fallback, with malformed color functions rejected outright
//!
//! - **Measurement Normalization** ([CSSOM § 6.7.2](https://drafts.csswg.org/cssom/#serializing-css-values))
//!   - Canonical text for lengths and percentages (`"+1.50px"` → `"1.5px"`)
//!   - Idempotent by construction
//!
//! - **Style Declarations** ([CSSOM § 6.6](https://drafts.csswg.org/cssom/#css-declaration-blocks))
//!   - A first-class declaration block: get/set/remove by name, declared-order
//!     serialization, indexed access, change notification with a re-entrancy
//!     guard, read-only blocks
//!
//! - **Shorthand Reconciliation** ([CSS Cascade 4 § 2.3](https://www.w3.org/TR/css-cascade-4/#shorthand))
//!   - Validating accessors for `width`, `padding`, `margin`, and the eight
//!     side properties
//!   - Bidirectional consistency: setting the shorthand expands to the four
//!     sides; populating the fourth side collapses back into the shorthand
//!
//! # Not Implemented
//!
//! - Cascade, specificity, and selector matching
//! - Layout
//! - Stylesheet parsing (only single declaration values and declaration
//!   lists)
//!
//! # Error Handling
//!
//! Invalid declaration values are dropped silently, matching CSS's
//! permissive declaration parsing; setters are no-ops on rejection and
//! nothing is ever escalated to a panic. The only fallible operation is
//! replacing the text of a read-only declaration block.

/// Style declaration blocks per [CSSOM § 6.6](https://drafts.csswg.org/cssom/#css-declaration-blocks).
pub mod declaration;
/// Governed property accessors and shorthand reconciliation per [CSS Cascade 4 § 2.3](https://www.w3.org/TR/css-cascade-4/#shorthand).
pub mod property;
/// Value classification and measurement normalization per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod value;

// Re-exports for convenience
pub use declaration::{PropertyValue, StyleDeclaration, StyleError};
pub use property::{BoxShorthand, Side};
pub use value::{
    LENGTH_UNITS, NAMED_COLORS, ValueType, parse_length, parse_measurement, parse_percent,
    value_type,
};
