//! Internal margin breakdown.
//!
//! Revenue minus worker pay, optionally minus modeled employer costs. All
//! contract figures are the weekly figure times the contract duration.

use rust_decimal::Decimal;

use crate::config::CostLines;
use crate::models::{AuditStep, InternalBreakdown, WeeklyPay};

/// The margin breakdown for one scenario.
#[derive(Debug, Clone)]
pub struct MarginBreakdownResult {
    /// The breakdown reported on the scenario.
    pub breakdown: InternalBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Weekly employer cost lines; all zero when costs are not modeled.
struct WeeklyCosts {
    benefits: Decimal,
    payroll_taxes: Decimal,
    workers_comp: Decimal,
}

impl WeeklyCosts {
    fn total(&self) -> Decimal {
        self.benefits + self.payroll_taxes + self.workers_comp
    }
}

/// Calculates revenue, pay and margin over the contract.
///
/// When `costs.enabled` is set, weekly benefits (only for contracts with
/// benefits), payroll taxes on taxable pay and a flat workers' compensation
/// charge are deducted from the margin and reported on the breakdown.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_margin_breakdown;
/// use pay_package_engine::config::CostLines;
/// use pay_package_engine::models::WeeklyPay;
/// use rust_decimal::Decimal;
///
/// let weekly = WeeklyPay {
///     gross_pay: Decimal::new(2400, 0),
///     taxable_pay: Decimal::new(1315, 0),
///     stipend_pay: Decimal::new(1085, 0),
/// };
/// let result = calculate_margin_breakdown(
///     Decimal::new(100, 0), Decimal::new(40, 0), Decimal::new(10, 0),
///     &weekly, false, &CostLines::disabled(), 1,
/// );
/// assert_eq!(result.breakdown.total_contract_revenue, Decimal::new(40000, 0));
/// assert_eq!(result.breakdown.total_margin, Decimal::new(16000, 0));
/// assert_eq!(result.breakdown.weekly_margin, Decimal::new(1600, 0));
/// ```
pub fn calculate_margin_breakdown(
    bill_rate: Decimal,
    hours_per_week: Decimal,
    duration_weeks: Decimal,
    weekly: &WeeklyPay,
    has_benefits: bool,
    costs: &CostLines,
    step_number: u32,
) -> MarginBreakdownResult {
    let weekly_revenue = bill_rate * hours_per_week;

    let weekly_costs = if costs.enabled {
        WeeklyCosts {
            benefits: if has_benefits {
                costs.benefits_weekly
            } else {
                Decimal::ZERO
            },
            payroll_taxes: weekly.taxable_pay * costs.payroll_tax_rate,
            workers_comp: costs.workers_comp_weekly,
        }
    } else {
        WeeklyCosts {
            benefits: Decimal::ZERO,
            payroll_taxes: Decimal::ZERO,
            workers_comp: Decimal::ZERO,
        }
    };

    let weekly_margin = weekly_revenue - weekly.gross_pay - weekly_costs.total();
    let over_contract = |weekly_amount: Decimal| weekly_amount * duration_weeks;
    let modeled = |weekly_amount: Decimal| costs.enabled.then(|| over_contract(weekly_amount));

    let breakdown = InternalBreakdown {
        total_contract_revenue: over_contract(weekly_revenue),
        total_contract_gross_pay: over_contract(weekly.gross_pay),
        benefits_cost: modeled(weekly_costs.benefits),
        payroll_taxes: modeled(weekly_costs.payroll_taxes),
        workers_comp: modeled(weekly_costs.workers_comp),
        total_margin: over_contract(weekly_margin),
        weekly_margin,
    };

    let reasoning = if costs.enabled {
        format!(
            "${} revenue - ${} pay - ${} employer costs = ${} per week",
            weekly_revenue.normalize(),
            weekly.gross_pay.normalize(),
            weekly_costs.total().normalize(),
            weekly_margin.normalize()
        )
    } else {
        format!(
            "${} revenue - ${} pay = ${} per week",
            weekly_revenue.normalize(),
            weekly.gross_pay.normalize(),
            weekly_margin.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "margin_breakdown".to_string(),
        rule_name: "Margin Breakdown".to_string(),
        policy_ref: "Internal margin model".to_string(),
        input: serde_json::json!({
            "bill_rate": bill_rate.normalize().to_string(),
            "hours_per_week": hours_per_week.normalize().to_string(),
            "duration_weeks": duration_weeks.normalize().to_string(),
            "weekly_gross_pay": weekly.gross_pay.normalize().to_string(),
            "cost_lines_enabled": costs.enabled,
            "has_benefits": has_benefits
        }),
        output: serde_json::json!({
            "total_contract_revenue": breakdown.total_contract_revenue.normalize().to_string(),
            "total_margin": breakdown.total_margin.normalize().to_string(),
            "weekly_margin": breakdown.weekly_margin.normalize().to_string()
        }),
        reasoning,
    };

    MarginBreakdownResult {
        breakdown,
        audit_step,
    }
}
