//! Contract input model.
//!
//! This module defines [`ContractInput`], the single record a pay package
//! calculation is derived from, along with the caller-side validation that
//! must pass before the record is handed to the calculator.

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Upper bound on scheduled hours accepted by [`ContractInput::validate`].
pub const MAX_HOURS_PER_WEEK: u32 = 60;

/// Upper bound on the hourly bill rate accepted by [`ContractInput::validate`].
///
/// Keeps contract revenue and totals well inside `Decimal` range.
pub const MAX_BILL_RATE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Upper bound on contract length, ten years of weeks.
pub const MAX_DURATION_WEEKS: u32 = 520;

/// The contract details a set of pay packages is calculated for.
///
/// The record is immutable once submitted. The calculator assumes it has
/// already passed [`ContractInput::validate`]; zero hours or weeks are
/// precondition violations, not handled by the calculation itself.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::ContractInput;
/// use rust_decimal::Decimal;
///
/// let contract = ContractInput {
///     bill_rate: Decimal::new(100, 0),
///     hours_per_week: 40,
///     duration_weeks: 13,
///     city: "Austin".to_string(),
///     state: "TX".to_string(),
///     zip_code: None,
///     month: "Mar".to_string(),
///     year: "2025".to_string(),
///     is_local_contract: false,
///     has_benefits: true,
/// };
/// assert!(contract.validate().is_ok());
/// assert_eq!(contract.month_number(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInput {
    /// What the client is billed per hour.
    pub bill_rate: Decimal,
    /// Scheduled hours per week.
    pub hours_per_week: u32,
    /// Contract length in weeks.
    pub duration_weeks: u32,
    /// Work location city.
    pub city: String,
    /// Two-letter state code of the work location.
    pub state: String,
    /// Optional ZIP code; takes precedence over city/state for rate lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Three-letter month abbreviation (e.g. "Jan").
    pub month: String,
    /// Four-digit year.
    pub year: String,
    /// Whether the worker lives within commuting distance of the assignment.
    #[serde(default)]
    pub is_local_contract: bool,
    /// Whether the package includes employer benefits.
    #[serde(default)]
    pub has_benefits: bool,
}

impl ContractInput {
    /// Returns the ZIP code if one was supplied and is not blank.
    pub fn zip(&self) -> Option<&str> {
        self.zip_code
            .as_deref()
            .map(str::trim)
            .filter(|zip| !zip.is_empty())
    }

    /// Returns the 1-12 month index for the contract's month abbreviation.
    pub fn month_number(&self) -> Option<u32> {
        parse_month_abbreviation(&self.month).map(|m| m.number_from_month())
    }

    /// Checks the preconditions the calculator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidContract`] naming the first field that
    /// fails:
    /// - `billRate` must be greater than zero and at most [`MAX_BILL_RATE`]
    /// - `hoursPerWeek` must be between 1 and [`MAX_HOURS_PER_WEEK`]
    /// - `durationWeeks` must be between 1 and [`MAX_DURATION_WEEKS`]
    /// - `state` must be a two-letter code
    /// - `month` must be a three-letter month abbreviation
    /// - `year` must be four digits
    /// - `zipCode`, when given, must be five digits
    /// - `city` is required when no ZIP code is given
    pub fn validate(&self) -> EngineResult<()> {
        if self.bill_rate <= Decimal::ZERO {
            return Err(invalid("billRate", "must be greater than 0"));
        }
        if self.bill_rate > MAX_BILL_RATE {
            return Err(invalid(
                "billRate",
                format!("cannot exceed {} per hour", MAX_BILL_RATE),
            ));
        }

        if self.hours_per_week == 0 {
            return Err(invalid("hoursPerWeek", "must be greater than 0"));
        }
        if self.hours_per_week > MAX_HOURS_PER_WEEK {
            return Err(invalid(
                "hoursPerWeek",
                format!("cannot exceed {} per week", MAX_HOURS_PER_WEEK),
            ));
        }

        if self.duration_weeks == 0 {
            return Err(invalid("durationWeeks", "must be at least 1 week"));
        }
        if self.duration_weeks > MAX_DURATION_WEEKS {
            return Err(invalid(
                "durationWeeks",
                format!("cannot exceed {} weeks", MAX_DURATION_WEEKS),
            ));
        }

        let state = self.state.trim();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("state", "must be a two-letter state code"));
        }

        if parse_month_abbreviation(&self.month).is_none() {
            return Err(invalid(
                "month",
                "must be a three-letter month abbreviation (e.g. Jan)",
            ));
        }

        if self.year.len() != 4 || !self.year.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("year", "must be a four-digit year"));
        }

        match self.zip() {
            Some(zip) => {
                if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid("zipCode", "must be a five-digit ZIP code"));
                }
            }
            None => {
                if self.city.trim().is_empty() {
                    return Err(invalid("city", "is required when no ZIP code is given"));
                }
            }
        }

        Ok(())
    }
}

/// Parses a three-letter month abbreviation, ignoring case.
///
/// Full month names are rejected; the per-diem schedule is keyed by the
/// abbreviation only.
pub fn parse_month_abbreviation(abbreviation: &str) -> Option<Month> {
    let abbreviation = abbreviation.trim();
    if abbreviation.len() != 3 {
        return None;
    }
    abbreviation.parse::<Month>().ok()
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidContract {
        field: field.to_string(),
        message: message.into(),
    }
}
