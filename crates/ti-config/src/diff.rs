//! Minimal structural diffs between configuration documents.
//!
//! The diff is the smallest partial document that, deep-merged onto the
//! base, reconstructs the current document exactly. It is what gets written
//! to the persisted slot and to exported files, so saved overrides stay
//! small no matter how large the base document grows.

use serde_json::{Map, Value};

/// Compute the minimal diff turning `base` into `current`.
///
/// - Sequences compare by equality and diff as a whole (matching the merge
///   policy of whole-sequence replacement).
/// - Mappings recurse over the union of keys, emitting only keys whose
///   recursive diff is non-empty.
/// - Anything else (scalars, type-mismatched nodes) diffs to `current`
///   when unequal.
///
/// Returns `None` when the documents are identical. Keys present in `base`
/// but absent from `current` produce no entry: deletion is not
/// representable, which mirrors the merge's inability to remove keys.
pub fn minimal_diff(base: &Value, current: &Value) -> Option<Value> {
    match (base, current) {
        (Value::Array(b), Value::Array(c)) => (b != c).then(|| current.clone()),
        (Value::Object(b), Value::Object(c)) => {
            let mut out = Map::new();
            let union = b.keys().chain(c.keys().filter(|k| !b.contains_key(*k)));
            for key in union {
                let entry = match (b.get(key), c.get(key)) {
                    (Some(bv), Some(cv)) => minimal_diff(bv, cv),
                    (None, Some(cv)) => Some(cv.clone()),
                    (Some(_), None) | (None, None) => None,
                };
                if let Some(changed) = entry {
                    out.insert(key.clone(), changed);
                }
            }
            (!out.is_empty()).then(|| Value::Object(out))
        }
        _ => (base != current).then(|| current.clone()),
    }
}
