//! Configuration loading and management for the Pay Package Engine.
//!
//! This module loads the margin scenarios, minimum wage table, per-diem
//! fallback rates and optional employer cost lines from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use pay_package_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("{} margin scenarios", config.margins().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorMetadata, CalculatorSettings, CostLines, LookupSettings, MarginScenario,
    MinimumWageTable, PackageConfig, PerDiemSettings, StandardRates,
};
