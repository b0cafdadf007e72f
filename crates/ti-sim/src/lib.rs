//! TaxIntegrity impact-simulation math.
//!
//! Pure, stateless functions mapping the 0-100 "adoption level" slider to
//! synthetic demo metrics. All figures are illustrative: fixed public
//! baselines scaled by hardcoded assumptions, with no real tax or audit
//! computation behind them.

pub mod ease;
pub mod impact;
pub mod progress;

pub use ease::ease_in_out;
pub use impact::{simulate, AuditImpact, Baselines, EvasionImpact, SimulationResult};
pub use progress::{audit_kpis, progress, AuditKpis, ProgressSnapshot};
