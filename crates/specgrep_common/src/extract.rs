//! Named-capture extraction from raw command output.
//!
//! Applies a compiled pattern to the first matching position in the text and
//! hands back the named groups. A miss is an empty map, never an error;
//! callers treat absence as "unknown".

use regex::Regex;
use std::collections::HashMap;

/// All named groups of the first match, or an empty map when the pattern
/// does not match or the input is blank.
pub fn captures(pattern: &Regex, raw: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    if raw.trim().is_empty() {
        return values;
    }
    if let Some(caps) = pattern.captures(raw) {
        for name in pattern.capture_names().flatten() {
            if let Some(m) = caps.name(name) {
                values.insert(name.to_string(), m.as_str().to_string());
            }
        }
    }
    values
}

/// Single named group from the first match, or `None` on a miss.
pub fn capture(pattern: &Regex, raw: &str, group: &str) -> Option<String> {
    captures(pattern, raw).remove(group)
}
