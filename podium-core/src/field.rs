//! Lookup of named fields in signaling payloads.
//!
//! Payloads are otherwise opaque to the broker, so a lookup never fails: a
//! missing field, a non-string value and a payload that is not a JSON object
//! all read as the empty string.

use serde_json::{Map, Value};

/// Returns the string value of top-level field `name`, or `""`.
pub fn extract_field(payload: &[u8], name: &str) -> String {
    let Ok(object) = serde_json::from_slice::<Map<String, Value>>(payload) else {
        return String::new();
    };

    match object.get(name) {
        Some(Value::String(value)) => value.clone(),
        _ => String::new(),
    }
}
