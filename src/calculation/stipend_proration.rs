//! Part-time stipend proration.
//!
//! Workers scheduled at or above the full-stipend threshold receive the full
//! weekly stipend. Below it, the stipend is prorated linearly against the
//! baseline week.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Scheduled weekly hours at or above which the full stipend is paid.
pub const FULL_STIPEND_THRESHOLD_HOURS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The stipend payable for the scheduled hours.
#[derive(Debug, Clone)]
pub struct StipendProrationResult {
    /// Weekly stipend after proration.
    pub weekly_stipend: Decimal,
    /// True when the stipend was prorated.
    pub prorated: bool,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Prorates the weekly stipend for part-time schedules.
///
/// # Arguments
///
/// * `weekly_stipend` - Stipend payable for the baseline week
/// * `hours_per_week` - Scheduled hours per week
/// * `threshold_hours` - Hours at or above which no proration applies
/// * `baseline_hours` - Hours in the baseline week proration is measured against
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{
///     prorate_stipend, FULL_STIPEND_THRESHOLD_HOURS, STANDARD_WEEKLY_HOURS,
/// };
/// use rust_decimal::Decimal;
///
/// let full = prorate_stipend(
///     Decimal::new(1085, 0), Decimal::new(36, 0),
///     FULL_STIPEND_THRESHOLD_HOURS, STANDARD_WEEKLY_HOURS, 1,
/// );
/// assert_eq!(full.weekly_stipend, Decimal::new(1085, 0));
///
/// let half = prorate_stipend(
///     Decimal::new(1085, 0), Decimal::new(20, 0),
///     FULL_STIPEND_THRESHOLD_HOURS, STANDARD_WEEKLY_HOURS, 1,
/// );
/// assert_eq!(half.weekly_stipend, Decimal::new(5425, 1));
/// ```
pub fn prorate_stipend(
    weekly_stipend: Decimal,
    hours_per_week: Decimal,
    threshold_hours: Decimal,
    baseline_hours: Decimal,
    step_number: u32,
) -> StipendProrationResult {
    let prorated = hours_per_week < threshold_hours;

    let (final_stipend, reasoning) = if prorated {
        let stipend = weekly_stipend * hours_per_week / baseline_hours;
        (
            stipend,
            format!(
                "{} hours is below the {} hour threshold: ${} x {}/{} = ${}",
                hours_per_week.normalize(),
                threshold_hours.normalize(),
                weekly_stipend.normalize(),
                hours_per_week.normalize(),
                baseline_hours.normalize(),
                stipend.normalize()
            ),
        )
    } else {
        (
            weekly_stipend,
            format!(
                "{} hours meets the {} hour threshold, full stipend of ${}",
                hours_per_week.normalize(),
                threshold_hours.normalize(),
                weekly_stipend.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "stipend_proration".to_string(),
        rule_name: "Stipend Proration".to_string(),
        policy_ref: "Part-time stipend policy".to_string(),
        input: serde_json::json!({
            "weekly_stipend": weekly_stipend.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string(),
            "threshold_hours": threshold_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly_stipend": final_stipend.normalize().to_string(),
            "prorated": prorated
        }),
        reasoning,
    };

    StipendProrationResult {
        weekly_stipend: final_stipend,
        prorated,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::STANDARD_WEEKLY_HOURS;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn prorate(stipend: &str, hours: &str) -> StipendProrationResult {
        prorate_stipend(
            dec(stipend),
            dec(hours),
            FULL_STIPEND_THRESHOLD_HOURS,
            STANDARD_WEEKLY_HOURS,
            1,
        )
    }

    #[test]
    fn test_full_time_gets_full_stipend() {
        let result = prorate("1085", "40");

        assert_eq!(result.weekly_stipend, dec("1085"));
        assert!(!result.prorated);
    }

    #[test]
    fn test_threshold_hours_get_full_stipend() {
        let result = prorate("1085", "30");

        assert_eq!(result.weekly_stipend, dec("1085"));
        assert!(!result.prorated);
        assert!(result.audit_step.reasoning.contains("meets the 30 hour threshold"));
    }

    #[test]
    fn test_overtime_schedule_gets_full_stipend_not_more() {
        let result = prorate("1085", "48");

        assert_eq!(result.weekly_stipend, dec("1085"));
    }

    #[test]
    fn test_twenty_hours_gets_half() {
        let result = prorate("1085", "20");

        assert_eq!(result.weekly_stipend, dec("542.5"));
        assert!(result.prorated);
    }

    #[test]
    fn test_twenty_nine_hours_prorated() {
        let result = prorate("1000", "29");

        assert_eq!(result.weekly_stipend, dec("725"));
        assert!(result.prorated);
        assert!(result.audit_step.reasoning.contains("$1000 x 29/40 = $725"));
    }

    #[test]
    fn test_zero_stipend_stays_zero() {
        let result = prorate("0", "12");

        assert_eq!(result.weekly_stipend, Decimal::ZERO);
    }
}
