//! Blended rate calculation.
//!
//! The blended rate is what remains of the bill rate once the margin target
//! is removed. It is later split into taxable wages and a non-taxable
//! stipend. Overtime is paid at a multiple of the blended rate.

use rust_decimal::Decimal;

use crate::config::MarginScenario;
use crate::models::AuditStep;

/// Overtime multiplier for hours beyond the standard week.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The blended and overtime rates for one margin scenario.
#[derive(Debug, Clone)]
pub struct BlendedRateResult {
    /// Bill rate with the margin removed.
    pub blended_rate: Decimal,
    /// Blended rate times the overtime multiplier.
    pub overtime_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Removes the margin from the bill rate and derives the overtime rate.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{calculate_blended_rate, DEFAULT_OVERTIME_MULTIPLIER};
/// use pay_package_engine::config::MarginScenario;
/// use rust_decimal::Decimal;
///
/// let margin = MarginScenario::new(Decimal::new(40, 2));
/// let result = calculate_blended_rate(Decimal::new(100, 0), margin, DEFAULT_OVERTIME_MULTIPLIER, 1);
///
/// assert_eq!(result.blended_rate, Decimal::new(60, 0));
/// assert_eq!(result.overtime_rate, Decimal::new(90, 0));
/// ```
pub fn calculate_blended_rate(
    bill_rate: Decimal,
    margin: MarginScenario,
    overtime_multiplier: Decimal,
    step_number: u32,
) -> BlendedRateResult {
    let fraction = margin.fraction();
    let blended_rate = bill_rate * (Decimal::ONE - fraction);
    let overtime_rate = blended_rate * overtime_multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "blended_rate".to_string(),
        rule_name: "Blended Rate".to_string(),
        policy_ref: "FLSA 29 U.S.C. 207(a)(1)".to_string(),
        input: serde_json::json!({
            "bill_rate": bill_rate.normalize().to_string(),
            "margin": fraction.normalize().to_string(),
            "overtime_multiplier": overtime_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "blended_rate": blended_rate.normalize().to_string(),
            "overtime_rate": overtime_rate.normalize().to_string()
        }),
        reasoning: format!(
            "${} x (1 - {}) = ${} blended; ${} x {} = ${} overtime",
            bill_rate.normalize(),
            fraction.normalize(),
            blended_rate.normalize(),
            blended_rate.normalize(),
            overtime_multiplier.normalize(),
            overtime_rate.normalize()
        ),
    };

    BlendedRateResult {
        blended_rate,
        overtime_rate,
        audit_step,
    }
}
