//! Display-only metrics derived from the raw adoption level.
//!
//! Unlike [`crate::impact::simulate`], these use plain clamped linear
//! formulas (no easing): they back the progress meters and KPI tiles, which
//! track the slider directly.

use serde::{Deserialize, Serialize};

fn scaled(base: f64, slope: f64, adoption: f64, max: f64) -> i64 {
    (base + adoption * slope).round().clamp(0.0, max) as i64
}

/// Progress-meter snapshot: detection percentages plus scaled absolute
/// counts for the captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub hidden_income_detected_pct: i64,
    pub offshore_accounts_found_pct: i64,
    pub fraud_schemes_uncovered_pct: i64,
    pub hidden_income_found_b: i64,
    pub offshore_accounts: i64,
    pub fraud_schemes: i64,
}

/// Compute the progress meters for an adoption level.
pub fn progress(adoption_pct: f64) -> ProgressSnapshot {
    let a = adoption_pct.clamp(0.0, 100.0);
    ProgressSnapshot {
        hidden_income_detected_pct: scaled(35.0, 0.47, a, 95.0),
        offshore_accounts_found_pct: scaled(22.0, 0.45, a, 92.0),
        fraud_schemes_uncovered_pct: scaled(28.0, 0.50, a, 93.0),
        hidden_income_found_b: scaled(0.8, 0.03, a, 10.0),
        offshore_accounts: scaled(80.0, 3.2, a, 600.0),
        fraud_schemes: scaled(220.0, 10.5, a, 2_500.0),
    }
}

/// KPI tiles on the audit page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditKpis {
    pub cases_triaged: i64,
    pub high_risk_flagged: i64,
    pub hours_saved_per_day: i64,
    pub explainability_pct: f64,
    pub false_positive_control_pct: f64,
}

/// Compute the audit KPI tiles for an adoption level.
pub fn audit_kpis(adoption_pct: f64) -> AuditKpis {
    let a = adoption_pct.clamp(0.0, 100.0);
    AuditKpis {
        cases_triaged: (1_200.0 + a * 38.0).round() as i64,
        high_risk_flagged: (42.0 + a * 1.1).round() as i64,
        hours_saved_per_day: (8.0 + a * 0.26).round() as i64,
        explainability_pct: (70.0 + a * 0.2).clamp(0.0, 100.0),
        false_positive_control_pct: (55.0 + a * 0.25).clamp(0.0, 100.0),
    }
}
