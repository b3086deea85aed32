//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay package
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DailyRates;

use super::types::{
    CalculatorSettings, CostLines, MarginScenario, MinimumWageTable, PackageConfig,
    PerDiemSettings,
};

/// Loads and provides access to pay package configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── calculator.yaml     # Margin scenarios, overtime and stipend thresholds
/// ├── minimum_wages.yaml  # Federal floor and state minimum wages
/// ├── per_diem.yaml       # Standard fallback rates and lookup endpoint
/// └── costs.yaml          # Optional employer cost lines
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_package_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// for margin in loader.margins() {
///     println!("{}% margin scenario", margin.percent());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PackageConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `costs.yaml` is optional; without it cost lines are not modeled.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file is missing
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML
    /// - [`EngineError::InvalidConfig`] if the values violate an invariant
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calculator = Self::load_yaml::<CalculatorSettings>(&path.join("calculator.yaml"))?;
        let minimum_wages =
            Self::load_yaml::<MinimumWageTable>(&path.join("minimum_wages.yaml"))?;
        let per_diem = Self::load_yaml::<PerDiemSettings>(&path.join("per_diem.yaml"))?;

        let costs_path = path.join("costs.yaml");
        let costs = if costs_path.exists() {
            Self::load_yaml::<CostLines>(&costs_path)?
        } else {
            CostLines::disabled()
        };

        Self::from_config(PackageConfig::new(calculator, minimum_wages, per_diem, costs))
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: PackageConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PackageConfig {
        &self.config
    }

    /// Returns the configured margin scenarios in report order.
    pub fn margins(&self) -> &[MarginScenario] {
        self.config.margins()
    }

    /// Returns the per-diem rates used when a location cannot be resolved.
    pub fn fallback_rates(&self) -> DailyRates {
        self.config.per_diem().fallback_rates()
    }
}

fn validate(config: &PackageConfig) -> EngineResult<()> {
    let calculator = config.calculator();

    if calculator.margins.is_empty() {
        return Err(invalid("margin list is empty"));
    }
    for margin in &calculator.margins {
        let fraction = margin.fraction();
        if fraction < Decimal::ZERO || fraction >= Decimal::ONE {
            return Err(invalid(format!(
                "margin {} must be at least 0 and below 1",
                fraction
            )));
        }
    }

    if calculator.overtime_multiplier < Decimal::ONE {
        return Err(invalid("overtime_multiplier must be at least 1"));
    }
    if calculator.baseline_weekly_hours <= Decimal::ZERO {
        return Err(invalid("baseline_weekly_hours must be greater than 0"));
    }
    if calculator.full_stipend_threshold_hours < Decimal::ZERO {
        return Err(invalid("full_stipend_threshold_hours cannot be negative"));
    }

    let wages = config.minimum_wages();
    if wages.federal < Decimal::ZERO {
        return Err(invalid("federal minimum wage cannot be negative"));
    }
    if let Some((code, _)) = wages.states.iter().find(|(_, wage)| **wage < Decimal::ZERO) {
        return Err(invalid(format!("minimum wage for {} cannot be negative", code)));
    }

    let standard = &config.per_diem().standard_rates;
    if standard.lodging < Decimal::ZERO || standard.meals < Decimal::ZERO {
        return Err(invalid("standard per-diem rates cannot be negative"));
    }

    let costs = config.costs();
    if costs.benefits_weekly < Decimal::ZERO
        || costs.payroll_tax_rate < Decimal::ZERO
        || costs.workers_comp_weekly < Decimal::ZERO
    {
        return Err(invalid("cost lines cannot be negative"));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let metadata = &loader.config().calculator().metadata;
        assert_eq!(metadata.name, "Travel Staffing Pay Packages");
    }

    #[test]
    fn test_margins_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let margins: Vec<Decimal> = loader.margins().iter().map(|m| m.fraction()).collect();
        assert_eq!(
            margins,
            vec![dec("0.40"), dec("0.35"), dec("0.30"), dec("0.25")]
        );
    }

    #[test]
    fn test_calculator_constants_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let calculator = loader.config().calculator();

        assert_eq!(calculator.overtime_multiplier, dec("1.5"));
        assert_eq!(calculator.baseline_weekly_hours, dec("40"));
        assert_eq!(calculator.full_stipend_threshold_hours, dec("30"));
    }

    #[test]
    fn test_minimum_wages_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let wages = loader.config().minimum_wages();

        assert_eq!(wages.lookup("CA"), Some(dec("16.00")));
        assert_eq!(wages.lookup("TX"), Some(dec("7.25")));
        assert_eq!(wages.lookup("dc"), Some(dec("17.50")));
        assert_eq!(wages.lookup("WA"), Some(dec("16.28")));
        assert_eq!(wages.states.len(), 51);
    }

    #[test]
    fn test_unknown_state_defaults_to_federal() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let resolution =
            crate::calculation::resolve_minimum_wage(loader.config().minimum_wages(), "PR", 1);

        assert_eq!(resolution.minimum_wage, dec("7.25"));
        assert!(resolution.is_federal_default);
    }

    #[test]
    fn test_fallback_rates_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rates = loader.fallback_rates();

        assert_eq!(rates.daily_lodging, dec("96"));
        assert_eq!(rates.daily_meals, dec("59"));
        assert!(rates.is_standard_rate);
    }

    #[test]
    fn test_cost_lines_disabled_by_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let costs = loader.config().costs();

        assert!(!costs.enabled);
        assert_eq!(costs.payroll_tax_rate, dec("0.0765"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calculator.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_empty_margin_list_rejected() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let mut config = loader.config().clone();
        let mut calculator = config.calculator().clone();
        calculator.margins.clear();
        config = PackageConfig::new(
            calculator,
            config.minimum_wages().clone(),
            config.per_diem().clone(),
            config.costs().clone(),
        );

        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { message }) => {
                assert!(message.contains("margin list is empty"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_margin_of_one_rejected() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let config = loader.config();
        let mut calculator = config.calculator().clone();
        calculator.margins.push(MarginScenario::new(Decimal::ONE));
        let config = PackageConfig::new(
            calculator,
            config.minimum_wages().clone(),
            config.per_diem().clone(),
            config.costs().clone(),
        );

        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
