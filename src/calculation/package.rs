//! Pay package calculation across all margin scenarios.
//!
//! [`calculate_packages`] is the pure core: given a contract and the daily
//! per-diem rates it produces one scenario per configured margin.
//! [`PackageCalculator`] adds the single rate lookup in front of it.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PackageConfig;
use crate::models::{AuditTrace, AuditWarning, ContractInput, DailyRates, PackageResult};
use crate::rates::{RateLookup, RateQuery};

use super::minimum_wage::resolve_minimum_wage;
use super::scenario::calculate_scenario;
use super::weekly_stipend::calculate_weekly_stipend;

/// Warning code raised when the standard per-diem rates were used in place
/// of location rates.
pub const STANDARD_RATE_FALLBACK: &str = "STANDARD_RATE_FALLBACK";

/// Calculates every margin scenario for a contract.
///
/// The minimum wage and weekly stipend are resolved once and shared by all
/// scenarios. Scenarios are returned in the configured margin order and their
/// audit steps are numbered sequentially after the shared steps.
///
/// The contract must already have passed [`ContractInput::validate`].
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_packages;
/// use pay_package_engine::config::ConfigLoader;
/// use pay_package_engine::models::{ContractInput, DailyRates};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// let contract = ContractInput {
///     bill_rate: Decimal::new(100, 0),
///     hours_per_week: 40,
///     duration_weeks: 10,
///     city: "Austin".to_string(),
///     state: "TX".to_string(),
///     zip_code: None,
///     month: "Jan".to_string(),
///     year: "2025".to_string(),
///     is_local_contract: false,
///     has_benefits: false,
/// };
///
/// let result = calculate_packages(&contract, &DailyRates::default(), loader.config());
/// assert_eq!(result.scenarios.len(), 4);
/// assert_eq!(result.scenarios[0].weekly.gross_pay, Decimal::new(2400, 0));
/// ```
pub fn calculate_packages(
    contract: &ContractInput,
    rates: &DailyRates,
    config: &PackageConfig,
) -> PackageResult {
    let start_time = Instant::now();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    if rates.is_standard_rate {
        warnings.push(AuditWarning {
            code: STANDARD_RATE_FALLBACK.to_string(),
            message: format!(
                "Location rates unavailable for {}, {}; using standard rates of ${} lodging and ${} meals",
                contract.city, contract.state, rates.daily_lodging, rates.daily_meals
            ),
            severity: "low".to_string(),
        });
    }

    let wage = resolve_minimum_wage(config.minimum_wages(), &contract.state, step_number);
    steps.push(wage.audit_step);
    step_number += 1;

    let stipend = calculate_weekly_stipend(rates, contract.is_local_contract, step_number);
    steps.push(stipend.audit_step);
    step_number += 1;

    let mut scenarios = Vec::with_capacity(config.margins().len());
    for &margin in config.margins() {
        let calculation = calculate_scenario(
            margin,
            contract,
            stipend.weekly_stipend,
            wage.minimum_wage,
            config,
            step_number,
        );

        step_number += calculation.audit_steps.len() as u32;
        steps.extend(calculation.audit_steps);
        warnings.extend(calculation.warnings);
        scenarios.push(calculation.result);
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    PackageResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scenarios,
        state_minimum_wage: wage.minimum_wage,
        daily_rates: *rates,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

/// Calculates pay packages, looking up per-diem rates for each contract.
///
/// Exactly one rate lookup is made per calculation. The lookup never fails;
/// unavailable location rates degrade to the standard rates.
#[derive(Debug, Clone)]
pub struct PackageCalculator<R> {
    config: PackageConfig,
    lookup: R,
}

impl<R: RateLookup> PackageCalculator<R> {
    /// Creates a calculator from loaded configuration and a rate source.
    pub fn new(config: PackageConfig, lookup: R) -> Self {
        Self { config, lookup }
    }

    /// Returns the configuration scenarios are calculated with.
    pub fn config(&self) -> &PackageConfig {
        &self.config
    }

    /// Returns the rate source.
    pub fn lookup(&self) -> &R {
        &self.lookup
    }

    /// Looks up daily rates for the contract's location and month, then
    /// calculates every margin scenario.
    pub async fn calculate(&self, contract: &ContractInput) -> PackageResult {
        let query = RateQuery::from_contract(contract);
        let rates = self.lookup.fetch_daily_rates(&query).await;

        debug!(
            daily_lodging = %rates.daily_lodging,
            daily_meals = %rates.daily_meals,
            is_standard_rate = rates.is_standard_rate,
            "Resolved daily rates"
        );

        let result = calculate_packages(contract, &rates, &self.config);

        info!(
            calculation_id = %result.calculation_id,
            scenarios = result.scenarios.len(),
            warnings = result.audit_trace.warnings.len(),
            duration_us = result.audit_trace.duration_us,
            "Calculated pay packages"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::rates::StaticRates;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn load_config() -> PackageConfig {
        ConfigLoader::load("./config/standard")
            .expect("Failed to load config")
            .config()
            .clone()
    }

    fn create_contract(state: &str, bill_rate: &str, hours: u32, weeks: u32) -> ContractInput {
        ContractInput {
            bill_rate: dec(bill_rate),
            hours_per_week: hours,
            duration_weeks: weeks,
            city: "Somewhere".to_string(),
            state: state.to_string(),
            zip_code: None,
            month: "Jan".to_string(),
            year: "2025".to_string(),
            is_local_contract: false,
            has_benefits: false,
        }
    }

    #[test]
    fn test_one_scenario_per_margin_in_order() {
        let config = load_config();
        let contract = create_contract("TX", "100", 40, 10);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);

        let percents: Vec<Decimal> = result
            .scenarios
            .iter()
            .map(|s| s.gross_margin_percent)
            .collect();
        assert_eq!(percents, vec![dec("40"), dec("35"), dec("30"), dec("25")]);
    }

    #[test]
    fn test_texas_forty_hours_ten_weeks() {
        let config = load_config();
        let contract = create_contract("TX", "100", 40, 10);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);
        let first = &result.scenarios[0];

        assert_eq!(result.state_minimum_wage, dec("7.25"));
        assert_eq!(first.hourly.blended_rate, dec("60"));
        assert_eq!(first.weekly.taxable_pay, dec("1315"));
        assert_eq!(first.weekly.stipend_pay, dec("1085"));
        assert_eq!(first.weekly.gross_pay, dec("2400"));
        assert_eq!(first.total.contract_revenue, dec("40000"));
        assert_eq!(first.internal_breakdown.total_margin, dec("16000"));
    }

    #[test]
    fn test_lower_margin_pays_more() {
        let config = load_config();
        let contract = create_contract("TX", "100", 40, 10);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);

        for pair in result.scenarios.windows(2) {
            assert!(pair[1].hourly.blended_rate > pair[0].hourly.blended_rate);
            assert!(pair[1].weekly.gross_pay >= pair[0].weekly.gross_pay);
        }
    }

    #[test]
    fn test_standard_rates_raise_fallback_warning() {
        let config = load_config();
        let contract = create_contract("TX", "100", 40, 10);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);

        let fallback: Vec<_> = result
            .audit_trace
            .warnings
            .iter()
            .filter(|w| w.code == STANDARD_RATE_FALLBACK)
            .collect();
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].severity, "low");
    }

    #[test]
    fn test_location_rates_no_fallback_warning() {
        let config = load_config();
        let contract = create_contract("TX", "100", 40, 10);
        let rates = DailyRates::location(dec("150"), dec("74"));

        let result = calculate_packages(&contract, &rates, &config);

        assert!(result.audit_trace.warnings.is_empty());
        assert_eq!(result.daily_rates, rates);
        // (150 + 74) x 7
        assert_eq!(result.scenarios[0].weekly.stipend_pay, dec("1568"));
    }

    #[test]
    fn test_california_low_bill_rate_clamps_every_scenario() {
        let config = load_config();
        let contract = create_contract("CA", "20", 40, 4);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);

        assert_eq!(result.state_minimum_wage, dec("16.00"));
        for scenario in &result.scenarios {
            assert!(scenario.minimum_wage_applied);
            assert_eq!(scenario.weekly.taxable_pay, dec("640"));
            assert_eq!(scenario.weekly.stipend_pay, Decimal::ZERO);
            assert!(scenario.hourly.taxable_rate >= dec("16.00"));
        }
        let too_low = result
            .audit_trace
            .warnings
            .iter()
            .filter(|w| w.code == "RATE_TOO_LOW_FOR_MARGIN")
            .count();
        assert_eq!(too_low, 4);
    }

    #[test]
    fn test_unknown_state_uses_federal_minimum() {
        let config = load_config();
        let contract = create_contract("ZZ", "100", 40, 10);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);

        assert_eq!(result.state_minimum_wage, dec("7.25"));
    }

    #[test]
    fn test_audit_steps_sequential() {
        let config = load_config();
        let contract = create_contract("TX", "100", 40, 10);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);

        // Two shared steps plus six per scenario.
        assert_eq!(result.audit_trace.steps.len(), 2 + 6 * 4);
        for (i, step) in result.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, (i + 1) as u32);
        }
        assert_eq!(result.audit_trace.steps[0].rule_id, "minimum_wage_resolution");
        assert_eq!(result.audit_trace.steps[1].rule_id, "weekly_stipend");
    }

    #[test]
    fn test_engine_version_recorded() {
        let config = load_config();
        let contract = create_contract("TX", "100", 40, 10);

        let result = calculate_packages(&contract, &DailyRates::default(), &config);

        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_calculator_uses_lookup_rates() {
        let config = load_config();
        let rates = DailyRates::location(dec("200"), dec("80"));
        let calculator = PackageCalculator::new(config, StaticRates::new(rates));
        let contract = create_contract("TX", "100", 40, 10);

        let result = calculator.calculate(&contract).await;

        assert_eq!(result.daily_rates, rates);
        assert_eq!(result.scenarios[0].weekly.stipend_pay, dec("1960"));
    }
}
