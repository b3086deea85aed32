//! Daily per-diem rate model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Standard daily lodging rate used when no location-specific rate is found.
pub const STANDARD_DAILY_LODGING: Decimal = Decimal::from_parts(96, 0, 0, false, 0);

/// Standard daily meals and incidentals rate used when no location-specific
/// rate is found.
pub const STANDARD_DAILY_MEALS: Decimal = Decimal::from_parts(59, 0, 0, false, 0);

/// Daily lodging and M&IE rates for a work location and month.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::DailyRates;
/// use rust_decimal::Decimal;
///
/// let fallback = DailyRates::default();
/// assert!(fallback.is_standard_rate);
/// assert_eq!(fallback.daily_total(), Decimal::new(155, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRates {
    /// Daily lodging rate.
    pub daily_lodging: Decimal,
    /// Daily meals and incidental expenses rate.
    pub daily_meals: Decimal,
    /// True when the location could not be resolved and fallback rates apply.
    pub is_standard_rate: bool,
}

impl DailyRates {
    /// Rates resolved for a specific location.
    pub fn location(daily_lodging: Decimal, daily_meals: Decimal) -> Self {
        Self {
            daily_lodging,
            daily_meals,
            is_standard_rate: false,
        }
    }

    /// Fallback rates used when the location could not be resolved.
    pub fn standard(daily_lodging: Decimal, daily_meals: Decimal) -> Self {
        Self {
            daily_lodging,
            daily_meals,
            is_standard_rate: true,
        }
    }

    /// Lodging plus meals for one day.
    pub fn daily_total(&self) -> Decimal {
        self.daily_lodging + self.daily_meals
    }
}

impl Default for DailyRates {
    fn default() -> Self {
        Self::standard(STANDARD_DAILY_LODGING, STANDARD_DAILY_MEALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_fallback() {
        let rates = DailyRates::default();
        assert_eq!(rates.daily_lodging, Decimal::new(96, 0));
        assert_eq!(rates.daily_meals, Decimal::new(59, 0));
        assert!(rates.is_standard_rate);
    }

    #[test]
    fn test_location_rates_not_standard() {
        let rates = DailyRates::location(Decimal::new(180, 0), Decimal::new(74, 0));
        assert!(!rates.is_standard_rate);
        assert_eq!(rates.daily_total(), Decimal::new(254, 0));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(DailyRates::default()).unwrap();
        assert_eq!(json["dailyLodging"], "96");
        assert_eq!(json["dailyMeals"], "59");
        assert_eq!(json["isStandardRate"], true);
    }
}
