//! Engine warnings with colored terminal output.
//!
//! Rejected declaration values are silent no-ops by contract, so this is
//! the only place a rejection becomes visible. Messages are deduplicated:
//! a style system can rediscover the same bad value thousands of times per
//! document, and once is enough.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, keyed by component + text.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about a rejected or unsupported value (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "invalid value 'banana' for 'padding'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if WARNED.lock().unwrap().insert(key) {
        eprintln!("{YELLOW}[Cardinal {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when resetting a document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}
