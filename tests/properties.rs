//! Property tests for package calculation.
//!
//! These check the identities every package must satisfy for any valid
//! contract and any per-diem rates.

use proptest::prelude::*;
use rust_decimal::Decimal;

use pay_package_engine::calculation::calculate_packages;
use pay_package_engine::config::{ConfigLoader, PackageConfig};
use pay_package_engine::models::{ContractInput, DailyRates};

const STATES: &[&str] = &["CA", "TX", "WA", "NY", "FL", "DC", "CO", "PR", "ZZ"];

fn load_config() -> PackageConfig {
    ConfigLoader::load("./config/standard")
        .expect("Failed to load config")
        .config()
        .clone()
}

fn contract_strategy() -> impl Strategy<Value = ContractInput> {
    (
        500i64..=30_000,
        1u32..=60,
        1u32..=52,
        prop::sample::select(STATES),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(bill_cents, hours, weeks, state, is_local_contract, has_benefits)| ContractInput {
                bill_rate: Decimal::new(bill_cents, 2),
                hours_per_week: hours,
                duration_weeks: weeks,
                city: "Springfield".to_string(),
                state: state.to_string(),
                zip_code: None,
                month: "Mar".to_string(),
                year: "2025".to_string(),
                is_local_contract,
                has_benefits,
            },
        )
}

fn rates_strategy() -> impl Strategy<Value = DailyRates> {
    prop_oneof![
        Just(DailyRates::default()),
        (0i64..=40_000, 0i64..=15_000).prop_map(|(lodging, meals)| {
            DailyRates::location(Decimal::new(lodging, 2), Decimal::new(meals, 2))
        }),
    ]
}

proptest! {
    #[test]
    fn weekly_gross_is_taxable_plus_stipend(
        contract in contract_strategy(),
        rates in rates_strategy(),
    ) {
        let result = calculate_packages(&contract, &rates, &load_config());

        for scenario in &result.scenarios {
            prop_assert_eq!(
                scenario.weekly.gross_pay,
                scenario.weekly.taxable_pay + scenario.weekly.stipend_pay
            );
        }
    }

    #[test]
    fn totals_are_weekly_times_duration(
        contract in contract_strategy(),
        rates in rates_strategy(),
    ) {
        let result = calculate_packages(&contract, &rates, &load_config());
        let weeks = Decimal::from(contract.duration_weeks);
        let hours = Decimal::from(contract.hours_per_week);

        for scenario in &result.scenarios {
            prop_assert_eq!(scenario.total.gross_pay, scenario.weekly.gross_pay * weeks);
            prop_assert_eq!(scenario.total.taxable_pay, scenario.weekly.taxable_pay * weeks);
            prop_assert_eq!(scenario.total.stipend_pay, scenario.weekly.stipend_pay * weeks);
            prop_assert_eq!(scenario.total.contract_revenue, contract.bill_rate * hours * weeks);
            prop_assert_eq!(
                scenario.internal_breakdown.total_margin,
                scenario.internal_breakdown.weekly_margin * weeks
            );
        }
    }

    #[test]
    fn taxable_rate_meets_minimum_wage(
        contract in contract_strategy(),
        rates in rates_strategy(),
    ) {
        let result = calculate_packages(&contract, &rates, &load_config());

        for scenario in &result.scenarios {
            prop_assert!(scenario.hourly.taxable_rate >= result.state_minimum_wage);
            prop_assert!(scenario.weekly.stipend_pay >= Decimal::ZERO);
            prop_assert!(scenario.hourly.stipend_rate >= Decimal::ZERO);
        }
    }

    #[test]
    fn one_scenario_per_margin_and_lower_margin_pays_more(
        contract in contract_strategy(),
        rates in rates_strategy(),
    ) {
        let config = load_config();
        let result = calculate_packages(&contract, &rates, &config);

        prop_assert_eq!(result.scenarios.len(), config.margins().len());
        for (scenario, margin) in result.scenarios.iter().zip(config.margins()) {
            prop_assert_eq!(scenario.gross_margin_percent, margin.percent());
        }
        for pair in result.scenarios.windows(2) {
            prop_assert!(pair[1].hourly.blended_rate > pair[0].hourly.blended_rate);
            prop_assert!(pair[1].weekly.gross_pay >= pair[0].weekly.gross_pay);
        }
    }

    #[test]
    fn local_contract_pays_no_stipend(
        mut contract in contract_strategy(),
        rates in rates_strategy(),
    ) {
        contract.is_local_contract = true;
        let result = calculate_packages(&contract, &rates, &load_config());

        for scenario in &result.scenarios {
            prop_assert_eq!(scenario.weekly.stipend_pay, Decimal::ZERO);
        }
    }
}
