//! Application state for the Pay Package Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PackageCalculator;
use crate::config::PackageConfig;
use crate::rates::RateProvider;

/// Shared application state.
///
/// Holds the package calculator, which owns the loaded configuration and
/// the per-diem rate source.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<PackageCalculator<RateProvider>>,
}

impl AppState {
    /// Creates a new application state from configuration and a rate source.
    pub fn new(config: PackageConfig, rates: impl Into<RateProvider>) -> Self {
        Self {
            calculator: Arc::new(PackageCalculator::new(config, rates.into())),
        }
    }

    /// Returns the package calculator.
    pub fn calculator(&self) -> &PackageCalculator<RateProvider> {
        &self.calculator
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PackageConfig {
        self.calculator.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::rates::StaticRates;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_config() {
        let loader = ConfigLoader::load("./config/standard").expect("Failed to load config");
        let state = AppState::new(loader.config().clone(), StaticRates::standard());

        assert_eq!(state.config().margins().len(), 4);
    }
}
