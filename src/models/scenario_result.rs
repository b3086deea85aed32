//! Scenario result models.
//!
//! A [`ScenarioResult`] is derived per margin scenario from the contract, the
//! daily per-diem rates and the state minimum wage. It is never stored on
//! its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weekly pay figures for a scenario.
///
/// `gross_pay` always equals `taxable_pay + stipend_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPay {
    /// Total weekly pay to the worker.
    pub gross_pay: Decimal,
    /// Weekly taxable wages, including overtime.
    pub taxable_pay: Decimal,
    /// Weekly non-taxable stipend.
    pub stipend_pay: Decimal,
}

/// Hourly rates for a scenario.
///
/// Taxable and stipend rates are normalized to the 40-hour baseline week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyRates {
    /// Bill rate with the margin removed.
    pub blended_rate: Decimal,
    /// Taxable portion of the blended rate.
    pub taxable_rate: Decimal,
    /// Stipend portion of the blended rate.
    pub stipend_rate: Decimal,
    /// Rate paid for hours beyond the baseline week.
    pub overtime_rate: Decimal,
}

/// Whole-contract figures: each pay field is the weekly figure times the
/// contract duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTotals {
    /// Bill rate x hours x weeks.
    pub contract_revenue: Decimal,
    /// Gross pay over the contract.
    pub contract_gross_pay: Decimal,
    /// Gross pay over the contract.
    pub gross_pay: Decimal,
    /// Taxable pay over the contract.
    pub taxable_pay: Decimal,
    /// Stipend pay over the contract.
    pub stipend_pay: Decimal,
}

/// The firm's view of a scenario: revenue, pay, optional cost lines and the
/// margin left over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalBreakdown {
    /// Bill rate x hours x weeks.
    pub total_contract_revenue: Decimal,
    /// Gross pay to the worker over the contract.
    pub total_contract_gross_pay: Decimal,
    /// Employer benefits cost over the contract, when cost lines are modeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits_cost: Option<Decimal>,
    /// Employer payroll taxes on taxable pay, when cost lines are modeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payroll_taxes: Option<Decimal>,
    /// Workers' compensation over the contract, when cost lines are modeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers_comp: Option<Decimal>,
    /// Revenue left after pay and any modeled costs.
    pub total_margin: Decimal,
    /// `total_margin` per contract week.
    pub weekly_margin: Decimal,
}

/// One candidate pay package at a given gross-margin target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// The margin target as a percentage of bill rate (e.g. 40).
    pub gross_margin_percent: Decimal,
    /// True when the minimum-wage floor raised the taxable rate.
    pub minimum_wage_applied: bool,
    /// Weekly figures.
    pub weekly: WeeklyPay,
    /// Hourly figures.
    pub hourly: HourlyRates,
    /// Contract totals.
    pub total: ContractTotals,
    /// Margin breakdown for internal use.
    pub internal_breakdown: InternalBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_breakdown() -> InternalBreakdown {
        InternalBreakdown {
            total_contract_revenue: dec("40000"),
            total_contract_gross_pay: dec("24000"),
            benefits_cost: None,
            payroll_taxes: None,
            workers_comp: None,
            total_margin: dec("16000"),
            weekly_margin: dec("1600"),
        }
    }

    #[test]
    fn test_breakdown_omits_unmodeled_cost_lines() {
        let json = serde_json::to_value(create_sample_breakdown()).unwrap();

        assert_eq!(json["totalMargin"], "16000");
        assert!(json.get("benefitsCost").is_none());
        assert!(json.get("payrollTaxes").is_none());
        assert!(json.get("workersComp").is_none());
    }

    #[test]
    fn test_breakdown_includes_modeled_cost_lines() {
        let mut breakdown = create_sample_breakdown();
        breakdown.payroll_taxes = Some(dec("1006.02"));

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["payrollTaxes"], "1006.02");
    }

    #[test]
    fn test_deserialize_breakdown_without_cost_lines() {
        let json = r#"{
            "totalContractRevenue": "40000",
            "totalContractGrossPay": "24000",
            "totalMargin": "16000",
            "weeklyMargin": "1600"
        }"#;

        let breakdown: InternalBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown, create_sample_breakdown());
    }
}
