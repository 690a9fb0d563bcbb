//! Document-key canonicalization.

use serde_json::Value;

/// Convert a record's identifier value to its canonical document-key string.
///
/// Strings are used verbatim, integers render as base-10 digit strings with no
/// leading zeros or locale formatting, and booleans render as `true`/`false`.
/// Returns `None` for non-scalar values (arrays, objects, null), which are not
/// usable as document keys.
pub fn document_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                Some(n.to_string())
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
