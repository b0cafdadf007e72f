//! Impact simulation over the adoption level.
//!
//! Baselines are real published figures (IRS tax-gap projections for
//! TY 2022); everything derived from them is synthetic demo math. Recovery
//! is capped through the fixed recoverable share to avoid runaway numbers.

use crate::ease::ease_in_out;
use serde::{Deserialize, Serialize};

/// Gross tax gap baseline, $B.
pub const GROSS_TAX_GAP_B: f64 = 696.0;

/// Net tax gap baseline, $B.
pub const NET_TAX_GAP_B: f64 = 606.0;

/// Share of the net gap assumed recoverable at full adoption.
const RECOVERABLE_SHARE: f64 = 0.18;

/// Fixed caveats echoed into every result.
const RESULT_NOTES: [&str; 3] = [
    "Demo-only: uses real baselines + synthetic adoption assumptions.",
    "Human-in-the-loop: AI recommends; trained staff decide.",
    "Fairness: explainable drivers and monitoring are required.",
];

/// Fixed public baselines echoed into every result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baselines {
    pub gross_tax_gap_b: f64,
    pub net_tax_gap_b: f64,
}

/// Audit-side improvements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditImpact {
    pub recovered_revenue_b: i64,
    pub hit_rate_uplift_pct: i64,
    pub time_to_case_faster_pct: i64,
}

/// Evasion-signal detection improvements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvasionImpact {
    pub hidden_income_detected_pct: i64,
    pub offshore_accounts_found_pct: i64,
    pub fraud_schemes_uncovered_pct: i64,
}

/// Immutable result of one simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub adoption_level: i64,
    pub baselines: Baselines,
    pub audit: AuditImpact,
    pub evasion: EvasionImpact,
    pub notes: Vec<String>,
}

/// Map an adoption level to the derived demo metrics.
///
/// Input is clamped to `[0, 100]`. Deterministic and idempotent: the same
/// input always yields the same result.
pub fn simulate(adoption_pct: f64) -> SimulationResult {
    let a = adoption_pct.clamp(0.0, 100.0) / 100.0;
    let e = ease_in_out(a);

    SimulationResult {
        adoption_level: (a * 100.0).round() as i64,
        baselines: Baselines {
            gross_tax_gap_b: GROSS_TAX_GAP_B,
            net_tax_gap_b: NET_TAX_GAP_B,
        },
        audit: AuditImpact {
            recovered_revenue_b: (NET_TAX_GAP_B * RECOVERABLE_SHARE * e).round() as i64,
            hit_rate_uplift_pct: (8.0 + 32.0 * e).round() as i64,
            time_to_case_faster_pct: (10.0 + 55.0 * e).round() as i64,
        },
        evasion: EvasionImpact {
            hidden_income_detected_pct: (12.0 + 58.0 * e).round() as i64,
            offshore_accounts_found_pct: (6.0 + 44.0 * e).round() as i64,
            fraud_schemes_uncovered_pct: (5.0 + 35.0 * e).round() as i64,
        },
        notes: RESULT_NOTES.iter().map(|note| note.to_string()).collect(),
    }
}
