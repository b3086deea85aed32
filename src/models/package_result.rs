//! Package result model.
//!
//! This module contains [`PackageResult`], the complete output of one
//! pay package calculation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, DailyRates, ScenarioResult};

/// The complete result of a pay package calculation.
///
/// Scenarios appear in the same order as the configured margin list.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::{AuditTrace, DailyRates, PackageResult};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PackageResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     scenarios: vec![],
///     state_minimum_wage: Decimal::new(725, 2),
///     daily_rates: DailyRates::default(),
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert!(result.scenarios.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// One result per configured margin scenario, in configured order.
    pub scenarios: Vec<ScenarioResult>,
    /// The resolved minimum wage for the contract's state.
    pub state_minimum_wage: Decimal,
    /// The per-diem rates the stipend was sized from.
    pub daily_rates: DailyRates,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
