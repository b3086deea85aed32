//! Core data models for the Pay Package Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod contract;
mod daily_rates;
mod package_result;
mod scenario_result;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use contract::{
    ContractInput, MAX_BILL_RATE, MAX_DURATION_WEEKS, MAX_HOURS_PER_WEEK, parse_month_abbreviation,
};
pub use daily_rates::{DailyRates, STANDARD_DAILY_LODGING, STANDARD_DAILY_MEALS};
pub use package_result::PackageResult;
pub use scenario_result::{ContractTotals, HourlyRates, InternalBreakdown, ScenarioResult, WeeklyPay};
