//! Minimum wage resolution and the taxable-wage floor.
//!
//! The taxable portion of a package must pay at least the state minimum
//! wage across the baseline week. When the blended rate leaves too little
//! after the stipend, the taxable wage is raised to the floor and the
//! stipend absorbs the difference.

use rust_decimal::Decimal;

use crate::config::MinimumWageTable;
use crate::models::AuditStep;

/// U.S. federal minimum wage, used for unknown state codes.
pub const FEDERAL_MINIMUM_WAGE: Decimal = Decimal::from_parts(725, 0, 0, false, 2);

/// The minimum wage resolved for a state code.
#[derive(Debug, Clone)]
pub struct MinimumWageResolution {
    /// Hourly minimum wage.
    pub minimum_wage: Decimal,
    /// True when the state was not in the table and the federal floor applied.
    pub is_federal_default: bool,
    /// The audit step recording the lookup.
    pub audit_step: AuditStep,
}

/// Resolves the hourly minimum wage for a state code.
///
/// The code is uppercased before lookup; absent or unrecognized codes
/// resolve to the table's federal floor rather than failing.
pub fn resolve_minimum_wage(
    table: &MinimumWageTable,
    state_code: &str,
    step_number: u32,
) -> MinimumWageResolution {
    let state = state_code.trim().to_uppercase();
    let (minimum_wage, is_federal_default) = match table.lookup(&state) {
        Some(wage) => (wage, false),
        None => (table.federal, true),
    };

    let reasoning = if is_federal_default {
        format!(
            "No state minimum wage for '{}', using federal minimum ${}",
            state, minimum_wage
        )
    } else {
        format!("{} minimum wage is ${}", state, minimum_wage)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "minimum_wage_resolution".to_string(),
        rule_name: "State Minimum Wage".to_string(),
        policy_ref: format!("State minimum wage schedule effective {}", table.effective_date),
        input: serde_json::json!({
            "state": state
        }),
        output: serde_json::json!({
            "minimum_wage": minimum_wage.to_string(),
            "is_federal_default": is_federal_default
        }),
        reasoning,
    };

    MinimumWageResolution {
        minimum_wage,
        is_federal_default,
        audit_step,
    }
}

/// The baseline-week taxable wage and stipend after the minimum-wage floor.
#[derive(Debug, Clone)]
pub struct MinimumWageFloorResult {
    /// Taxable wages for the baseline week.
    pub base_weekly_taxable: Decimal,
    /// Stipend actually payable for the baseline week. Never negative.
    pub actual_weekly_stipend: Decimal,
    /// True when the taxable wage was raised to the floor.
    pub floor_applied: bool,
    /// True when the floor consumed the entire stipend and the package
    /// costs more than the blended rate allows.
    pub stipend_exhausted: bool,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Splits the baseline-week gross into taxable wages and stipend, raising
/// taxable wages to the minimum-wage floor when needed.
///
/// Minimum-wage compliance takes priority over the full stipend. If the
/// floor alone exceeds the baseline gross, the stipend is floored at zero
/// and `stipend_exhausted` is set.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::apply_minimum_wage_floor;
/// use rust_decimal::Decimal;
///
/// // $60 blended x 40 hours, $1085 stipend, $7.25 minimum wage
/// let result = apply_minimum_wage_floor(
///     Decimal::new(2400, 0),
///     Decimal::new(1085, 0),
///     Decimal::new(725, 2),
///     Decimal::new(40, 0),
///     1,
/// );
/// assert_eq!(result.base_weekly_taxable, Decimal::new(1315, 0));
/// assert_eq!(result.actual_weekly_stipend, Decimal::new(1085, 0));
/// assert!(!result.floor_applied);
/// ```
pub fn apply_minimum_wage_floor(
    base_weekly_gross: Decimal,
    weekly_stipend: Decimal,
    minimum_wage: Decimal,
    baseline_hours: Decimal,
    step_number: u32,
) -> MinimumWageFloorResult {
    let minimum_weekly_taxable = minimum_wage * baseline_hours;
    let raw_weekly_taxable = base_weekly_gross - weekly_stipend;

    let floor_applied = raw_weekly_taxable < minimum_weekly_taxable;
    let (base_weekly_taxable, remaining_stipend) = if floor_applied {
        (
            minimum_weekly_taxable,
            base_weekly_gross - minimum_weekly_taxable,
        )
    } else {
        (raw_weekly_taxable, weekly_stipend)
    };

    let stipend_exhausted = remaining_stipend < Decimal::ZERO;
    let actual_weekly_stipend = remaining_stipend.max(Decimal::ZERO);

    let reasoning = if !floor_applied {
        format!(
            "${} - ${} stipend = ${} taxable, at or above the ${} minimum for {} hours",
            base_weekly_gross.normalize(),
            weekly_stipend.normalize(),
            base_weekly_taxable.normalize(),
            minimum_weekly_taxable.normalize(),
            baseline_hours.normalize()
        )
    } else if stipend_exhausted {
        format!(
            "${} taxable is below the ${} minimum; the minimum exceeds the ${} gross, stipend floored at $0",
            raw_weekly_taxable.normalize(),
            minimum_weekly_taxable.normalize(),
            base_weekly_gross.normalize()
        )
    } else {
        format!(
            "${} taxable is below the ${} minimum; taxable raised to ${}, stipend reduced to ${}",
            raw_weekly_taxable.normalize(),
            minimum_weekly_taxable.normalize(),
            base_weekly_taxable.normalize(),
            actual_weekly_stipend.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "minimum_wage_floor".to_string(),
        rule_name: "Minimum Wage Floor".to_string(),
        policy_ref: "FLSA 29 U.S.C. 206; state minimum wage".to_string(),
        input: serde_json::json!({
            "base_weekly_gross": base_weekly_gross.normalize().to_string(),
            "weekly_stipend": weekly_stipend.normalize().to_string(),
            "minimum_wage": minimum_wage.normalize().to_string(),
            "baseline_hours": baseline_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_weekly_taxable": base_weekly_taxable.normalize().to_string(),
            "actual_weekly_stipend": actual_weekly_stipend.normalize().to_string(),
            "floor_applied": floor_applied,
            "stipend_exhausted": stipend_exhausted
        }),
        reasoning,
    };

    MinimumWageFloorResult {
        base_weekly_taxable,
        actual_weekly_stipend,
        floor_applied,
        stipend_exhausted,
        audit_step,
    }
}
