//! Weekly stipend sizing.
//!
//! The stipend reimburses duplicated living expenses at the work location,
//! sized from the daily lodging and M&IE rates for that location and month.

use rust_decimal::Decimal;

use crate::models::{AuditStep, DailyRates};

/// Days of per-diem paid per week.
pub const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// The full weekly stipend before minimum-wage and proration adjustments.
#[derive(Debug, Clone)]
pub struct WeeklyStipendResult {
    /// `(daily lodging + daily meals) x 7`, or zero for a local contract.
    pub weekly_stipend: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sizes the weekly stipend from daily per-diem rates.
///
/// A local contract carries no duplicated expense, so its stipend is zero
/// and the whole blended rate is paid as taxable wages.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_weekly_stipend;
/// use pay_package_engine::models::DailyRates;
/// use rust_decimal::Decimal;
///
/// let result = calculate_weekly_stipend(&DailyRates::default(), false, 1);
/// assert_eq!(result.weekly_stipend, Decimal::new(1085, 0));
///
/// let local = calculate_weekly_stipend(&DailyRates::default(), true, 1);
/// assert_eq!(local.weekly_stipend, Decimal::ZERO);
/// ```
pub fn calculate_weekly_stipend(
    rates: &DailyRates,
    is_local_contract: bool,
    step_number: u32,
) -> WeeklyStipendResult {
    let daily_total = rates.daily_total();

    let (weekly_stipend, policy_ref, reasoning) = if is_local_contract {
        (
            Decimal::ZERO,
            "IRS Publication 463 (tax home)",
            "Local contract: no duplicated living expense, stipend is $0".to_string(),
        )
    } else {
        let weekly = daily_total * DAYS_PER_WEEK;
        (
            weekly,
            "GSA per diem, 41 CFR 301-11",
            format!(
                "(${} lodging + ${} meals) x {} days = ${}",
                rates.daily_lodging.normalize(),
                rates.daily_meals.normalize(),
                DAYS_PER_WEEK,
                weekly.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_stipend".to_string(),
        rule_name: "Weekly Stipend".to_string(),
        policy_ref: policy_ref.to_string(),
        input: serde_json::json!({
            "daily_lodging": rates.daily_lodging.normalize().to_string(),
            "daily_meals": rates.daily_meals.normalize().to_string(),
            "is_standard_rate": rates.is_standard_rate,
            "is_local_contract": is_local_contract
        }),
        output: serde_json::json!({
            "weekly_stipend": weekly_stipend.normalize().to_string()
        }),
        reasoning,
    };

    WeeklyStipendResult {
        weekly_stipend,
        audit_step,
    }
}
