//! Fixed per-diem rates.

use crate::models::DailyRates;

use super::{RateLookup, RateQuery};

/// A rate source that returns the same rates for every location.
///
/// Used for offline operation and tests.
///
/// # Example
///
/// ```
/// use pay_package_engine::rates::StaticRates;
///
/// let rates = StaticRates::standard();
/// assert!(rates.rates().is_standard_rate);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRates {
    rates: DailyRates,
}

impl StaticRates {
    /// Always returns `rates`.
    pub fn new(rates: DailyRates) -> Self {
        Self { rates }
    }

    /// Always returns the standard fallback rates.
    pub fn standard() -> Self {
        Self::default()
    }

    /// The rates this source returns.
    pub fn rates(&self) -> DailyRates {
        self.rates
    }
}

impl RateLookup for StaticRates {
    async fn fetch_daily_rates(&self, _query: &RateQuery) -> DailyRates {
        self.rates
    }
}
