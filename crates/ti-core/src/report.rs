//! Exportable demo report.
//!
//! The report bundles the site title, a timestamp, the adoption level, and
//! the progress snapshot into the same JSON shape the demo page downloads.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use ti_config::{ConfigStore, OverrideStorage};
use ti_sim::{progress, ProgressSnapshot};

/// Fallback site title when the configuration has been edited into a
/// non-string value.
const DEFAULT_SITE_TITLE: &str = "TaxIntegrity";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    pub site: String,
    pub timestamp: String,
    pub adoption_level: i64,
    pub progress: ProgressSnapshot,
    pub note: String,
}

/// Assemble the report for the current configuration and adoption level.
pub fn build_report<S: OverrideStorage>(store: &ConfigStore<S>, adoption_pct: f64) -> DemoReport {
    let site = store
        .current_value("site.title")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_SITE_TITLE)
        .to_string();

    DemoReport {
        site,
        timestamp: Utc::now().to_rfc3339(),
        adoption_level: adoption_pct.clamp(0.0, 100.0).round() as i64,
        progress: progress(adoption_pct),
        note: "Educational demo report (synthetic).".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use ti_config::{default_config, MemoryStorage};

    #[test]
    fn report_uses_configured_site_title() {
        let mut store = ConfigStore::load(default_config(), MemoryStorage::new());
        store.edit_field("site.title", json!("Renamed"));

        let report = build_report(&store, 35.0);
        assert_eq!(report.site, "Renamed");
        assert_eq!(report.adoption_level, 35);
        assert_eq!(report.progress, progress(35.0));
    }

    #[test]
    fn non_string_title_falls_back() {
        let mut store = ConfigStore::load(default_config(), MemoryStorage::new());
        store.edit_field("site.title", json!({"oops": 1}));

        let report = build_report(&store, 0.0);
        assert_eq!(report.site, DEFAULT_SITE_TITLE);
    }

    #[test]
    fn adoption_is_clamped_in_the_header() {
        let store = ConfigStore::load(default_config(), MemoryStorage::new());
        assert_eq!(build_report(&store, 250.0).adoption_level, 100);
        assert_eq!(build_report(&store, -3.0).adoption_level, 0);
    }
}
