//! Inline style declaration blocks
//!
//! [CSSOM § 6.5 CSS Declarations](https://drafts.csswg.org/cssom/#css-declarations)
//! [CSSOM § 6.6 CSS Declaration Blocks](https://drafts.csswg.org/cssom/#css-declaration-blocks)
//!
//! "Each CSS declaration has the following associated properties:
//! property name, value, important flag, case-sensitive flag."
//!
//! [`StyleDeclaration`] is the backing store every validator and the
//! shorthand coordinator operate against: a (property name → value text)
//! association with get/set/remove by name, declared-order serialization,
//! and an optional change callback.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Errors produced by declaration-block mutation.
///
/// Rejected *values* are never errors; they are silent no-ops
/// ([CSS Syntax 3 § 2.2](https://www.w3.org/TR/css-syntax-3/#error-handling)
/// "the properties containing these invalid values are ignored").
/// The only failure a caller can observe is attempting to replace the
/// text of a read-only block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext)
    /// "If the computed flag is set, then throw a NoModificationAllowedError."
    #[error("cannot modify a read-only style declaration")]
    NoModificationAllowed,
}

/// A value accepted by property setters: text, or a number coerced to
/// text the way a host object model would stringify it (`10` → `"10"`,
/// `1.5` → `"1.5"`).
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Raw value text.
    Text(String),
    /// A number, stringified on use.
    Number(f64),
}

impl PropertyValue {
    /// Coerce to the text form every parser and validator consumes.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

/// [CSSOM § 6.6.1 The CSSStyleDeclaration interface](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
///
/// A mutable block of CSS declarations keyed by property name.
///
/// Two layers of storage back the block:
///
/// - the *declared list* (`properties`), which drives serialization and
///   indexed access, and
/// - the *raw value map* (`values`), which may retain entries for side
///   properties that have been collapsed into their shorthand and are no
///   longer declared. Getters read the raw map, so `padding_top()` still
///   answers after `padding-top` collapsed into `padding`.
#[derive(Default)]
pub struct StyleDeclaration {
    /// Declared property names in insertion order.
    properties: Vec<String>,
    /// Raw property values, including retained collapsed-side values.
    values: HashMap<String, String>,
    /// Change callback, invoked with the serialized declaration text.
    on_change: Option<Box<dyn FnMut(&str)>>,
    /// Set while the block repopulates itself from text, suppressing
    /// per-declaration change notification.
    updating: bool,
    /// [CSSOM § 6.6](https://drafts.csswg.org/cssom/#css-declaration-blocks)
    /// The computed flag; mutation of such a block is rejected.
    read_only: bool,
}

impl fmt::Debug for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleDeclaration")
            .field("properties", &self.properties)
            .field("values", &self.values)
            .field("updating", &self.updating)
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}

impl StyleDeclaration {
    /// Create an empty, mutable declaration block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty block with the computed flag set; all mutation is
    /// rejected.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Register the change callback. It receives the serialized
    /// declaration text after every notifying mutation.
    pub fn set_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    ///
    /// "Return the value of the property ... or the empty string."
    ///
    /// Reads the raw value map, so collapsed side properties still
    /// answer with the value preserved inside their shorthand.
    #[must_use]
    pub fn get_property_value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty)
    ///
    /// Remove a property from the declared list and the raw map,
    /// returning its previous value (empty if it was not set).
    pub fn remove_property(&mut self, name: &str) -> String {
        if self.read_only {
            return String::new();
        }
        let prev = self.values.remove(name).unwrap_or_default();
        self.properties.retain(|p| p != name);
        prev
    }

    /// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// Set a property by name. An empty value removes the property,
    /// before any validation. Otherwise, names the engine governs
    /// (`width`, `padding`, `margin`, and the eight side properties)
    /// are routed through their validating setters; anything else is
    /// stored verbatim.
    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        let name = name.to_ascii_lowercase();
        let text = value.into().into_text();
        if text.is_empty() {
            self.store(&name, "");
            return;
        }
        match name.as_str() {
            "width" => self.set_width(text),
            "padding" => self.set_padding(text),
            "margin" => self.set_margin(text),
            "padding-top" => self.set_padding_top(text),
            "padding-right" => self.set_padding_right(text),
            "padding-bottom" => self.set_padding_bottom(text),
            "padding-left" => self.set_padding_left(text),
            "margin-top" => self.set_margin_top(text),
            "margin-right" => self.set_margin_right(text),
            "margin-bottom" => self.set_margin_bottom(text),
            "margin-left" => self.set_margin_left(text),
            _ => self.store(&name, &text),
        }
    }

    /// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-length)
    ///
    /// "The number of CSS declarations in the declarations."
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the declared list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-item)
    ///
    /// "Return the property name of the CSS declaration at position
    /// index."
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&str> {
        self.properties.get(index).map(String::as_str)
    }

    /// [CSSOM § 6.7.2 Serializing CSS values](https://drafts.csswg.org/cssom/#serialize-a-css-declaration-block)
    ///
    /// Serialize the declared list as `name: value;` pairs in declared
    /// order.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for name in &self.properties {
            if let Some(value) = self.values.get(name) {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(name);
                out.push_str(": ");
                out.push_str(value);
                out.push(';');
            }
        }
        out
    }

    /// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext)
    ///
    /// Replace the whole block by parsing a declaration list. Malformed
    /// declarations are skipped silently
    /// ([CSS Syntax 3 § 2.2](https://www.w3.org/TR/css-syntax-3/#error-handling));
    /// a single change notification fires after the block is rebuilt.
    ///
    /// # Errors
    ///
    /// [`StyleError::NoModificationAllowed`] if the computed flag is set.
    pub fn set_css_text(&mut self, text: &str) -> Result<(), StyleError> {
        if self.read_only {
            return Err(StyleError::NoModificationAllowed);
        }
        self.updating = true;
        self.properties.clear();
        self.values.clear();
        for declaration in text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            self.set_property(name, value);
        }
        self.updating = false;
        self.notify();
        Ok(())
    }

    /// Store a property without dispatching through the validating
    /// setters (the notification-bearing internal write every validator
    /// ends in). An empty value removes the property.
    pub(crate) fn store(&mut self, name: &str, value: &str) {
        if self.read_only {
            return;
        }
        if value.is_empty() {
            let _ = self.remove_property(name);
            self.notify();
            return;
        }
        if !self.properties.iter().any(|p| p == name) {
            self.properties.push(name.to_string());
        }
        let _ = self.values.insert(name.to_string(), value.to_string());
        self.notify();
    }

    /// Write the raw value map only, leaving the declared list alone.
    /// Used by the shorthand coordinator to preserve collapsed side
    /// values that are no longer declared.
    pub(crate) fn set_raw(&mut self, name: &str, value: &str) {
        if self.read_only {
            return;
        }
        let _ = self.values.insert(name.to_string(), value.to_string());
    }

    /// Read the raw value map directly.
    pub(crate) fn raw_value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Invoke the change callback with the serialized text, unless the
    /// block is mid-update.
    fn notify(&mut self) {
        if self.updating {
            return;
        }
        if self.on_change.is_some() {
            let text = self.css_text();
            if let Some(callback) = self.on_change.as_mut() {
                callback(&text);
            }
        }
    }
}
