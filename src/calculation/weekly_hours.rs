//! Weekly overtime detection functionality.
//!
//! This module splits scheduled weekly hours into regular hours (up to the
//! baseline week) and overtime hours (any hours beyond it).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Hours in the standard work week before overtime applies.
///
/// Per the Fair Labor Standards Act, 29 U.S.C. 207(a)(1).
pub const STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The split of scheduled weekly hours into regular and overtime hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursSplit {
    /// Hours up to the baseline week.
    pub regular_hours: Decimal,
    /// Hours exceeding the baseline week.
    pub overtime_hours: Decimal,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits scheduled weekly hours at the baseline week.
///
/// # Arguments
///
/// * `hours_per_week` - Scheduled hours per week
/// * `baseline_hours` - Hours in the baseline week (typically 40)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{split_weekly_hours, STANDARD_WEEKLY_HOURS};
/// use rust_decimal::Decimal;
///
/// let split = split_weekly_hours(Decimal::new(48, 0), STANDARD_WEEKLY_HOURS, 1);
/// assert_eq!(split.regular_hours, Decimal::new(40, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(8, 0));
///
/// let split = split_weekly_hours(Decimal::new(36, 0), STANDARD_WEEKLY_HOURS, 1);
/// assert_eq!(split.regular_hours, Decimal::new(36, 0));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_weekly_hours(
    hours_per_week: Decimal,
    baseline_hours: Decimal,
    step_number: u32,
) -> WeeklyHoursSplit {
    let regular_hours = hours_per_week.min(baseline_hours);
    let overtime_hours = (hours_per_week - baseline_hours).max(Decimal::ZERO);

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} scheduled hours exceeds the {} hour week by {} hours, paid at the overtime rate",
            hours_per_week.normalize(),
            baseline_hours.normalize(),
            overtime_hours.normalize()
        )
    } else {
        format!(
            "{} scheduled hours is within the {} hour week, no overtime",
            hours_per_week.normalize(),
            baseline_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_hours_split".to_string(),
        rule_name: "Weekly Hours Split".to_string(),
        policy_ref: "FLSA 29 U.S.C. 207(a)(1)".to_string(),
        input: serde_json::json!({
            "hours_per_week": hours_per_week.normalize().to_string(),
            "baseline_hours": baseline_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    WeeklyHoursSplit {
        regular_hours,
        overtime_hours,
        audit_step,
    }
}
