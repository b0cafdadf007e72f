//! The override store: live configuration state with best-effort persistence.
//!
//! A [`ConfigStore`] owns the active document and is the single mutation
//! point for it. The base document is never mutated; every merge targets a
//! fresh deep copy. Storage I/O is `Result`-typed inside the backends, and
//! the "ignore and fall back" policy lives here, at the boundary, where it
//! is visible and testable: a missing or corrupt persisted slot falls back
//! to the defaults, and write failures are logged and swallowed.

use crate::diff::minimal_diff;
use crate::merge::deep_merge;
use crate::path::{get_path, set_path};
use crate::storage::OverrideStorage;
use serde_json::{Map, Value};
use ti_common::{Error, Result};
use tracing::{debug, warn};

/// Live configuration state over a storage backend.
pub struct ConfigStore<S: OverrideStorage> {
    base: Value,
    active: Value,
    storage: S,
}

impl<S: OverrideStorage> ConfigStore<S> {
    /// Initialize from the base document plus whatever the storage slot
    /// holds.
    ///
    /// A readable slot with a well-formed override document is merged onto
    /// a copy of the base. An absent slot, an unreadable slot, or a
    /// malformed document all land on a plain copy of the base; none of
    /// them is an error to the caller.
    pub fn load(base: Value, storage: S) -> Self {
        let mut active = base.clone();
        match storage.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
                Ok(overrides) => deep_merge(&mut active, &overrides),
                Err(err) => {
                    warn!(error = %err, "persisted overrides are malformed, using defaults");
                }
            },
            Ok(None) => {}
            Err(err) => {
                debug!(error = %err, "override storage unavailable, using defaults");
            }
        }
        Self {
            base,
            active,
            storage,
        }
    }

    /// The value at `path` in the active document, if present.
    pub fn current_value(&self, path: &str) -> Option<&Value> {
        get_path(&self.active, path)
    }

    /// The active document.
    pub fn active(&self) -> &Value {
        &self.active
    }

    /// The immutable base document.
    pub fn base(&self) -> &Value {
        &self.base
    }

    /// Set the value at `path` and persist the updated minimal diff.
    pub fn edit_field(&mut self, path: &str, value: Value) {
        set_path(&mut self.active, path, value);
        self.persist();
    }

    /// Clear the persisted slot and reinstate the base document.
    pub fn reset_to_default(&mut self) {
        if let Err(err) = self.storage.clear() {
            warn!(error = %err, "failed to clear persisted overrides");
        }
        self.active = self.base.clone();
    }

    /// Merge a raw override document onto a fresh copy of the base.
    ///
    /// Malformed input returns [`Error::Parse`] and leaves the active
    /// document untouched. On success the result is persisted.
    pub fn import_document(&mut self, raw: &str) -> Result<()> {
        let parsed: Value =
            serde_json::from_str(raw).map_err(|err| Error::Parse(err.to_string()))?;
        let mut next = self.base.clone();
        deep_merge(&mut next, &parsed);
        self.active = next;
        self.persist();
        Ok(())
    }

    /// The minimal override document reproducing the active state from the
    /// base. Empty mapping when nothing has been edited.
    pub fn overrides_document(&self) -> Value {
        minimal_diff(&self.base, &self.active).unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Serialized minimal diff, identical in shape to the persisted slot,
    /// so export and storage formats are interchangeable.
    pub fn export_snapshot(&self) -> String {
        serialize_overrides(&self.overrides_document())
    }

    fn persist(&mut self) {
        let payload = self.export_snapshot();
        if let Err(err) = self.storage.save(&payload) {
            warn!(error = %err, "failed to persist overrides");
        }
    }
}

fn serialize_overrides(doc: &Value) -> String {
    // Serializing a Value cannot produce invalid UTF-8 or fail on depth;
    // the fallback keeps the no-fatal-paths contract literal.
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn base() -> Value {
        json!({
            "site": {"title": "TaxIntegrity", "tagline": ""},
            "signals": {"ev_income": [{"t": "a", "d": "b"}]}
        })
    }

    #[test]
    fn load_without_slot_uses_base() {
        let store = ConfigStore::load(base(), MemoryStorage::new());
        assert_eq!(store.active(), &base());
        assert_eq!(store.overrides_document(), json!({}));
    }

    #[test]
    fn load_merges_persisted_diff() {
        let storage = MemoryStorage::with_slot(r#"{"site":{"tagline":"saved"}}"#);
        let store = ConfigStore::load(base(), storage);
        assert_eq!(
            store.current_value("site.tagline"),
            Some(&json!("saved"))
        );
        assert_eq!(store.current_value("site.title"), Some(&json!("TaxIntegrity")));
    }

    #[test]
    fn load_with_corrupt_slot_falls_back_to_base() {
        let storage = MemoryStorage::with_slot("not json {{{");
        let store = ConfigStore::load(base(), storage);
        assert_eq!(store.active(), &base());
    }

    #[test]
    fn load_with_unreadable_slot_falls_back_to_base() {
        let mut storage = MemoryStorage::new();
        storage.fail_reads = true;
        let store = ConfigStore::load(base(), storage);
        assert_eq!(store.active(), &base());
    }

    #[test]
    fn edit_persists_minimal_diff() {
        let mut store = ConfigStore::load(base(), MemoryStorage::new());
        store.edit_field("site.tagline", json!("edited"));

        assert_eq!(store.current_value("site.tagline"), Some(&json!("edited")));
        let persisted: Value =
            serde_json::from_str(store.storage.slot().expect("slot written")).expect("json");
        assert_eq!(persisted, json!({"site": {"tagline": "edited"}}));
    }

    #[test]
    fn edit_survives_storage_write_failure() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes = true;
        let mut store = ConfigStore::load(base(), storage);

        store.edit_field("site.tagline", json!("edited"));
        assert_eq!(store.current_value("site.tagline"), Some(&json!("edited")));
        assert!(store.storage.slot().is_none());
    }

    #[test]
    fn reset_clears_slot_and_restores_base() {
        let mut store = ConfigStore::load(base(), MemoryStorage::new());
        store.edit_field("site.tagline", json!("edited"));
        store.reset_to_default();

        assert_eq!(store.active(), &base());
        assert!(store.storage.slot().is_none());
    }

    #[test]
    fn import_replaces_prior_edits() {
        let mut store = ConfigStore::load(base(), MemoryStorage::new());
        store.edit_field("site.tagline", json!("edited"));
        store
            .import_document(r#"{"site":{"title":"Imported"}}"#)
            .expect("import");

        // Import merges onto a fresh copy of the base, so the earlier edit
        // is gone unless the imported document carries it.
        assert_eq!(store.current_value("site.title"), Some(&json!("Imported")));
        assert_eq!(store.current_value("site.tagline"), Some(&json!("")));
    }

    #[test]
    fn malformed_import_leaves_state_unchanged() {
        let mut store = ConfigStore::load(base(), MemoryStorage::new());
        store.edit_field("site.tagline", json!("edited"));

        let err = store.import_document("{broken").expect_err("must fail");
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(store.current_value("site.tagline"), Some(&json!("edited")));
    }

    #[test]
    fn export_matches_persisted_form() {
        let mut store = ConfigStore::load(base(), MemoryStorage::new());
        store.edit_field("signals.ev_income", json!([{"t": "x", "d": "y"}]));

        assert_eq!(store.export_snapshot(), store.storage.slot().expect("slot"));
    }

    #[test]
    fn export_of_untouched_store_is_empty_document() {
        let store = ConfigStore::load(base(), MemoryStorage::new());
        let exported: Value = serde_json::from_str(&store.export_snapshot()).expect("json");
        assert_eq!(exported, json!({}));
    }
}
