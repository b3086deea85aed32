//! Single margin scenario calculation.
//!
//! A scenario is a pure transform of one margin target, the contract, the
//! weekly stipend and the state minimum wage into a [`ScenarioResult`].
//! Scenarios share no state and can be computed in any order.

use rust_decimal::Decimal;

use crate::config::{MarginScenario, PackageConfig};
use crate::models::{
    AuditStep, AuditWarning, ContractInput, ContractTotals, HourlyRates, ScenarioResult, WeeklyPay,
};

use super::blended_rate::calculate_blended_rate;
use super::margin::calculate_margin_breakdown;
use super::minimum_wage::{MinimumWageFloorResult, apply_minimum_wage_floor};
use super::stipend_proration::prorate_stipend;
use super::weekly_hours::{WeeklyHoursSplit, split_weekly_hours};

/// Warning code raised when the minimum-wage floor consumed the entire
/// stipend.
pub const RATE_TOO_LOW_FOR_MARGIN: &str = "RATE_TOO_LOW_FOR_MARGIN";

/// Warning code raised when the minimum-wage floor reduced the stipend.
pub const STIPEND_REDUCED_FOR_MINIMUM_WAGE: &str = "STIPEND_REDUCED_FOR_MINIMUM_WAGE";

/// The result of one scenario plus the audit steps and warnings behind it.
#[derive(Debug, Clone)]
pub struct ScenarioCalculation {
    /// The scenario result.
    pub result: ScenarioResult,
    /// Audit steps, numbered from the `step_number` passed in.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised for this scenario.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates one pay package for a margin target.
///
/// Rates are derived on the baseline week (40 hours by default), the
/// minimum-wage floor is enforced on that week, then the actual schedule is
/// applied: hours past the baseline are paid at the overtime rate and the
/// stipend is prorated below the full-stipend threshold.
///
/// The floor only raises the taxable rate for baseline hours. The overtime
/// rate is always the blended rate times the overtime multiplier, so after a
/// clamp it can sit below the minimum wage; the floor warning then names it.
///
/// The contract is assumed to be valid; see [`ContractInput::validate`].
///
/// # Arguments
///
/// * `margin` - The margin target for this scenario
/// * `contract` - The contract details
/// * `weekly_stipend` - Full weekly stipend from the daily per-diem rates
/// * `minimum_wage` - Resolved hourly minimum wage for the contract's state
/// * `config` - Calculator settings and cost lines
/// * `step_number` - The first step number for audit trail sequencing
pub fn calculate_scenario(
    margin: MarginScenario,
    contract: &ContractInput,
    weekly_stipend: Decimal,
    minimum_wage: Decimal,
    config: &PackageConfig,
    step_number: u32,
) -> ScenarioCalculation {
    let settings = config.calculator();
    let baseline_hours = settings.baseline_weekly_hours;
    let hours_per_week = Decimal::from(contract.hours_per_week);
    let duration_weeks = Decimal::from(contract.duration_weeks);

    let mut audit_steps = Vec::with_capacity(6);
    let mut step = step_number;

    let blended = calculate_blended_rate(
        contract.bill_rate,
        margin,
        settings.overtime_multiplier,
        step,
    );
    audit_steps.push(blended.audit_step);
    step += 1;

    let base_weekly_gross = blended.blended_rate * baseline_hours;
    let floor = apply_minimum_wage_floor(
        base_weekly_gross,
        weekly_stipend,
        minimum_wage,
        baseline_hours,
        step,
    );
    audit_steps.push(floor.audit_step.clone());
    step += 1;

    let taxable_rate = floor.base_weekly_taxable / baseline_hours;
    let stipend_rate = floor.actual_weekly_stipend / baseline_hours;

    let split = split_weekly_hours(hours_per_week, baseline_hours, step);
    audit_steps.push(split.audit_step.clone());
    step += 1;

    let proration = prorate_stipend(
        floor.actual_weekly_stipend,
        hours_per_week,
        settings.full_stipend_threshold_hours,
        baseline_hours,
        step,
    );
    audit_steps.push(proration.audit_step);
    step += 1;

    let weekly_taxable_pay =
        taxable_rate * split.regular_hours + blended.overtime_rate * split.overtime_hours;
    let weekly = WeeklyPay {
        gross_pay: weekly_taxable_pay + proration.weekly_stipend,
        taxable_pay: weekly_taxable_pay,
        stipend_pay: proration.weekly_stipend,
    };
    audit_steps.push(weekly_pay_step(
        &weekly,
        taxable_rate,
        blended.overtime_rate,
        &split,
        step,
    ));
    step += 1;

    let margin_breakdown = calculate_margin_breakdown(
        contract.bill_rate,
        hours_per_week,
        duration_weeks,
        &weekly,
        contract.has_benefits,
        config.costs(),
        step,
    );
    audit_steps.push(margin_breakdown.audit_step);

    let total = ContractTotals {
        contract_revenue: margin_breakdown.breakdown.total_contract_revenue,
        contract_gross_pay: weekly.gross_pay * duration_weeks,
        gross_pay: weekly.gross_pay * duration_weeks,
        taxable_pay: weekly.taxable_pay * duration_weeks,
        stipend_pay: weekly.stipend_pay * duration_weeks,
    };

    let warnings = floor_warnings(
        margin,
        blended.blended_rate,
        blended.overtime_rate,
        minimum_wage,
        &floor,
    );

    let result = ScenarioResult {
        gross_margin_percent: margin.percent(),
        minimum_wage_applied: floor.floor_applied,
        weekly,
        hourly: HourlyRates {
            blended_rate: blended.blended_rate,
            taxable_rate,
            stipend_rate,
            overtime_rate: blended.overtime_rate,
        },
        total,
        internal_breakdown: margin_breakdown.breakdown,
    };

    ScenarioCalculation {
        result,
        audit_steps,
        warnings,
    }
}

fn weekly_pay_step(
    weekly: &WeeklyPay,
    taxable_rate: Decimal,
    overtime_rate: Decimal,
    split: &WeeklyHoursSplit,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "weekly_pay".to_string(),
        rule_name: "Weekly Pay".to_string(),
        policy_ref: "FLSA 29 U.S.C. 207(a)(1)".to_string(),
        input: serde_json::json!({
            "taxable_rate": taxable_rate.normalize().to_string(),
            "overtime_rate": overtime_rate.normalize().to_string(),
            "regular_hours": split.regular_hours.normalize().to_string(),
            "overtime_hours": split.overtime_hours.normalize().to_string(),
            "stipend_pay": weekly.stipend_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_pay": weekly.gross_pay.normalize().to_string(),
            "taxable_pay": weekly.taxable_pay.normalize().to_string(),
            "stipend_pay": weekly.stipend_pay.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {}h + ${} x {}h OT = ${} taxable; + ${} stipend = ${} gross",
            taxable_rate.normalize(),
            split.regular_hours.normalize(),
            overtime_rate.normalize(),
            split.overtime_hours.normalize(),
            weekly.taxable_pay.normalize(),
            weekly.stipend_pay.normalize(),
            weekly.gross_pay.normalize()
        ),
    }
}

fn floor_warnings(
    margin: MarginScenario,
    blended_rate: Decimal,
    overtime_rate: Decimal,
    minimum_wage: Decimal,
    floor: &MinimumWageFloorResult,
) -> Vec<AuditWarning> {
    // The floor never touches the overtime rate.
    let overtime_note = if overtime_rate < minimum_wage {
        format!(
            "; overtime hours are still paid at the ${} overtime rate, below the minimum wage",
            overtime_rate.normalize()
        )
    } else {
        String::new()
    };

    if floor.stipend_exhausted {
        vec![AuditWarning {
            code: RATE_TOO_LOW_FOR_MARGIN.to_string(),
            message: format!(
                "At {}% margin the ${} blended rate is below the ${} minimum wage; \
                 no stipend is payable and pay exceeds the margin target{}",
                margin.percent(),
                blended_rate.normalize(),
                minimum_wage,
                overtime_note
            ),
            severity: "high".to_string(),
        }]
    } else if floor.floor_applied {
        vec![AuditWarning {
            code: STIPEND_REDUCED_FOR_MINIMUM_WAGE.to_string(),
            message: format!(
                "At {}% margin the stipend was reduced to ${} per week to pay the ${} minimum wage{}",
                margin.percent(),
                floor.actual_weekly_stipend.normalize(),
                minimum_wage,
                overtime_note
            ),
            severity: "medium".to_string(),
        }]
    } else {
        Vec::new()
    }
}
