//! Configuration types for pay package calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. All of it is immutable
//! once loaded and is injected into the calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::DailyRates;

/// Metadata about the rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorMetadata {
    /// Human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// Where the constants were sourced from.
    pub source_url: String,
}

/// A target fraction of the bill rate reserved as margin.
///
/// # Example
///
/// ```
/// use pay_package_engine::config::MarginScenario;
/// use rust_decimal::Decimal;
///
/// let scenario = MarginScenario::new(Decimal::new(35, 2));
/// assert_eq!(scenario.percent(), Decimal::new(35, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MarginScenario(Decimal);

impl MarginScenario {
    /// Creates a scenario from a margin fraction (e.g. 0.40).
    pub fn new(fraction: Decimal) -> Self {
        Self(fraction)
    }

    /// The margin as a fraction of bill rate.
    pub fn fraction(&self) -> Decimal {
        self.0
    }

    /// The margin as a percentage of bill rate.
    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

/// Calculator settings from calculator.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorSettings {
    /// Rule set metadata.
    pub metadata: CalculatorMetadata,
    /// Margin scenarios, in the order results are reported.
    pub margins: Vec<MarginScenario>,
    /// Multiplier applied to the blended rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Hours in the baseline week rates are normalized to.
    pub baseline_weekly_hours: Decimal,
    /// Scheduled hours at or above which the full stipend is paid.
    pub full_stipend_threshold_hours: Decimal,
}

/// State minimum wage table from minimum_wages.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimumWageTable {
    /// Date the schedule took effect.
    pub effective_date: NaiveDate,
    /// Federal minimum wage, used for states not in the table.
    pub federal: Decimal,
    /// Two-letter state code to hourly minimum wage.
    pub states: HashMap<String, Decimal>,
}

impl MinimumWageTable {
    /// Looks up a state code without applying the federal default.
    ///
    /// The code is trimmed and uppercased first. Callers that need the
    /// federal fallback go through `calculation::resolve_minimum_wage`.
    pub fn lookup(&self, state_code: &str) -> Option<Decimal> {
        let code = state_code.trim().to_uppercase();
        self.states.get(&code).copied()
    }
}

/// Fallback per-diem rates.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardRates {
    /// Standard daily lodging.
    pub lodging: Decimal,
    /// Standard daily meals and incidentals.
    pub meals: Decimal,
}

/// Where and how to query location-specific per-diem rates.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupSettings {
    /// Rate proxy endpoint.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

/// Per-diem settings from per_diem.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PerDiemSettings {
    /// Rates used whenever the lookup cannot resolve a location.
    pub standard_rates: StandardRates,
    /// Lookup endpoint settings.
    pub lookup: LookupSettings,
}

impl PerDiemSettings {
    /// The fallback rates as [`DailyRates`].
    pub fn fallback_rates(&self) -> DailyRates {
        DailyRates::standard(self.standard_rates.lodging, self.standard_rates.meals)
    }
}

/// Employer cost lines subtracted from margin, from costs.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CostLines {
    /// Whether the cost lines are modeled at all.
    pub enabled: bool,
    /// Weekly benefits cost for contracts with benefits.
    pub benefits_weekly: Decimal,
    /// Employer payroll-tax rate applied to taxable pay.
    pub payroll_tax_rate: Decimal,
    /// Flat weekly workers' compensation charge.
    pub workers_comp_weekly: Decimal,
}

impl CostLines {
    /// Cost lines that are not modeled.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            benefits_weekly: Decimal::ZERO,
            payroll_tax_rate: Decimal::ZERO,
            workers_comp_weekly: Decimal::ZERO,
        }
    }
}

impl Default for CostLines {
    fn default() -> Self {
        Self::disabled()
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    calculator: CalculatorSettings,
    minimum_wages: MinimumWageTable,
    per_diem: PerDiemSettings,
    costs: CostLines,
}

impl PackageConfig {
    /// Creates a new PackageConfig from its component parts.
    ///
    /// State codes in the minimum wage table are uppercased so lookups are
    /// case-insensitive.
    pub fn new(
        calculator: CalculatorSettings,
        minimum_wages: MinimumWageTable,
        per_diem: PerDiemSettings,
        costs: CostLines,
    ) -> Self {
        let mut minimum_wages = minimum_wages;
        minimum_wages.states = minimum_wages
            .states
            .into_iter()
            .map(|(code, wage)| (code.trim().to_uppercase(), wage))
            .collect();
        Self {
            calculator,
            minimum_wages,
            per_diem,
            costs,
        }
    }

    /// Returns the calculator settings.
    pub fn calculator(&self) -> &CalculatorSettings {
        &self.calculator
    }

    /// Returns the configured margin scenarios in report order.
    pub fn margins(&self) -> &[MarginScenario] {
        &self.calculator.margins
    }

    /// Returns the minimum wage table.
    pub fn minimum_wages(&self) -> &MinimumWageTable {
        &self.minimum_wages
    }

    /// Returns the per-diem settings.
    pub fn per_diem(&self) -> &PerDiemSettings {
        &self.per_diem
    }

    /// Returns the employer cost lines.
    pub fn costs(&self) -> &CostLines {
        &self.costs
    }
}
