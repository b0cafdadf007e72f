//! Deep merge of partial override documents onto a base document.
//!
//! The merge policy is asymmetric and must stay that way: sequences replace
//! wholesale, mappings merge recursively, scalars overwrite. Keys present
//! only in the target are preserved untouched. This is what lets a partial
//! override document coexist with an evolving base schema.

use serde_json::{Map, Value};

/// Merge `source` onto `target`, mutating `target` in place.
///
/// For every key in `source`:
/// - sequence values replace the target's value wholesale (never merged
///   element-wise);
/// - mapping values merge recursively, creating an empty mapping at the
///   target when absent or not itself a mapping;
/// - scalar values overwrite.
///
/// A non-mapping `source` contributes no keys and leaves `target` unchanged.
pub fn deep_merge(target: &mut Value, source: &Value) {
    let Value::Object(source) = source else {
        return;
    };
    if source.is_empty() {
        return;
    }
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Value::Object(target) = target else {
        return;
    };
    for (key, sv) in source {
        match sv {
            Value::Array(_) => {
                target.insert(key.clone(), sv.clone());
            }
            Value::Object(_) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                // Coerce here, not in the recursive call: an empty mapping
                // in the source still converts a scalar slot to a mapping.
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                deep_merge(slot, sv);
            }
            _ => {
                target.insert(key.clone(), sv.clone());
            }
        }
    }
}
