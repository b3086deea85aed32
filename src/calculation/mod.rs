//! Calculation logic for the Pay Package Engine.
//!
//! Each rule lives in its own module and records an [`AuditStep`] for every
//! decision it makes: blended rate derivation, weekly stipend sizing,
//! minimum-wage resolution and the taxable-wage floor, the weekly overtime
//! split, part-time stipend proration and the internal margin breakdown.
//! [`calculate_scenario`] composes these for one margin target and
//! [`calculate_packages`] runs every configured margin.
//!
//! [`AuditStep`]: crate::models::AuditStep

mod blended_rate;
mod margin;
mod minimum_wage;
mod package;
mod scenario;
mod stipend_proration;
mod weekly_hours;
mod weekly_stipend;

pub use blended_rate::{BlendedRateResult, DEFAULT_OVERTIME_MULTIPLIER, calculate_blended_rate};
pub use margin::{MarginBreakdownResult, calculate_margin_breakdown};
pub use minimum_wage::{
    FEDERAL_MINIMUM_WAGE, MinimumWageFloorResult, MinimumWageResolution, apply_minimum_wage_floor,
    resolve_minimum_wage,
};
pub use package::{PackageCalculator, STANDARD_RATE_FALLBACK, calculate_packages};
pub use scenario::{
    RATE_TOO_LOW_FOR_MARGIN, STIPEND_REDUCED_FOR_MINIMUM_WAGE, ScenarioCalculation,
    calculate_scenario,
};
pub use stipend_proration::{FULL_STIPEND_THRESHOLD_HOURS, StipendProrationResult, prorate_stipend};
pub use weekly_hours::{STANDARD_WEEKLY_HOURS, WeeklyHoursSplit, split_weekly_hours};
pub use weekly_stipend::{DAYS_PER_WEEK, WeeklyStipendResult, calculate_weekly_stipend};
