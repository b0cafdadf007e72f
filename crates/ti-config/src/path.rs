//! Dotted-path access into nested configuration documents.
//!
//! Paths are dot-separated key strings such as `"audit.heading"`. Every
//! segment except the last must resolve to a mapping; the last segment holds
//! the leaf value. A miss anywhere along the way is a valid, silent outcome,
//! not an error.

use serde_json::{Map, Value};

/// Look up the value at `path` inside `doc`.
///
/// Returns `None` when any intermediate segment is missing, is not a
/// mapping, or the final key is absent.
pub fn get_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cur = doc;
    for segment in path.split('.') {
        cur = cur.as_object()?.get(segment)?;
    }
    Some(cur)
}

/// Assign `value` at `path` inside `doc`, creating intermediate mappings
/// as needed.
///
/// Non-final segments that are missing or hold a non-mapping value are
/// replaced with empty mappings before descending. Single-segment paths
/// assign a top-level key directly. Mutates `doc` in place.
pub fn set_path(doc: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut cur = doc;
    for segment in parents {
        if !cur.is_object() {
            *cur = Value::Object(Map::new());
        }
        cur = match cur {
            Value::Object(map) => map
                .entry((*segment).to_string())
                .or_insert_with(|| Value::Object(Map::new())),
            _ => return,
        };
    }
    if !cur.is_object() {
        *cur = Value::Object(Map::new());
    }
    if let Value::Object(map) = cur {
        map.insert((*last).to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_builds_nested_mappings_from_empty() {
        let mut doc = json!({});
        set_path(&mut doc, "a.b.c", json!(5));
        assert_eq!(doc, json!({"a": {"b": {"c": 5}}}));
        assert_eq!(get_path(&doc, "a.b.c"), Some(&json!(5)));
    }

    #[test]
    fn get_miss_returns_none() {
        let mut doc = json!({});
        set_path(&mut doc, "a.b.c", json!(5));
        assert_eq!(get_path(&doc, "a.x.y"), None);
        assert_eq!(get_path(&doc, "a.b.c.d"), None);
        assert_eq!(get_path(&doc, "missing"), None);
    }

    #[test]
    fn set_single_segment_path() {
        let mut doc = json!({"keep": 1});
        set_path(&mut doc, "title", json!("TaxIntegrity"));
        assert_eq!(doc, json!({"keep": 1, "title": "TaxIntegrity"}));
    }

    #[test]
    fn set_overwrites_non_mapping_intermediates() {
        let mut doc = json!({"a": "scalar"});
        set_path(&mut doc, "a.b", json!(2));
        assert_eq!(doc, json!({"a": {"b": 2}}));

        let mut doc = json!({"a": [1, 2, 3]});
        set_path(&mut doc, "a.b", json!(2));
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }

    #[test]
    fn set_preserves_sibling_keys() {
        let mut doc = json!({"site": {"title": "T", "tagline": ""}});
        set_path(&mut doc, "site.tagline", json!("new"));
        assert_eq!(doc, json!({"site": {"title": "T", "tagline": "new"}}));
    }

    #[test]
    fn get_through_non_mapping_is_none() {
        let doc = json!({"a": [1, 2, 3]});
        assert_eq!(get_path(&doc, "a.0"), None);
    }
}
