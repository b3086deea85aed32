//! Per-diem rate lookup.
//!
//! The calculator needs daily lodging and meals rates for the contract's
//! location and month. A [`RateLookup`] supplies them and never fails: when
//! the location cannot be resolved it returns the standard fallback rates
//! with `is_standard_rate` set.

mod gsa;
mod static_rates;

use std::future::Future;

use crate::models::{ContractInput, DailyRates, parse_month_abbreviation};

pub use gsa::{
    GsaRateClient, LocationRates, MonthList, MonthRate, PerDiemSchedule, RateEntry,
    extract_month_rates,
};
pub use static_rates::StaticRates;

/// A source of daily per-diem rates.
///
/// Implementations absorb every failure into the fallback rates, so the
/// returned future always resolves to usable [`DailyRates`].
pub trait RateLookup: Send + Sync {
    /// Returns the daily rates for the queried location and month.
    fn fetch_daily_rates(&self, query: &RateQuery) -> impl Future<Output = DailyRates> + Send;
}

/// The location and month a rate lookup is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    /// Work location city.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Optional ZIP code; takes precedence over city and state.
    pub zip_code: Option<String>,
    /// Three-letter month abbreviation.
    pub month: String,
    /// Four-digit year.
    pub year: String,
}

impl RateQuery {
    /// Builds the lookup query for a contract.
    pub fn from_contract(contract: &ContractInput) -> Self {
        Self {
            city: contract.city.trim().to_string(),
            state: contract.state.trim().to_string(),
            zip_code: contract.zip().map(str::to_string),
            month: contract.month.trim().to_string(),
            year: contract.year.trim().to_string(),
        }
    }

    /// Returns the ZIP code if present and not blank.
    pub fn zip(&self) -> Option<&str> {
        self.zip_code
            .as_deref()
            .map(str::trim)
            .filter(|zip| !zip.is_empty())
    }

    /// Returns the 1-12 month index, or `None` for an unknown abbreviation.
    pub fn month_number(&self) -> Option<u32> {
        parse_month_abbreviation(&self.month).map(|m| m.number_from_month())
    }

    /// Returns the canonical month abbreviation ("Jan", "Feb", ...) as it
    /// appears in the per-diem schedule.
    pub fn month_abbreviation(&self) -> Option<&'static str> {
        parse_month_abbreviation(&self.month).map(|m| &m.name()[..3])
    }
}

/// The rate source used by the HTTP server.
#[derive(Debug, Clone)]
pub enum RateProvider {
    /// Live lookups through the per-diem proxy.
    Gsa(GsaRateClient),
    /// Fixed rates, for offline operation.
    Static(StaticRates),
}

impl RateLookup for RateProvider {
    async fn fetch_daily_rates(&self, query: &RateQuery) -> DailyRates {
        match self {
            RateProvider::Gsa(client) => client.fetch_daily_rates(query).await,
            RateProvider::Static(rates) => rates.fetch_daily_rates(query).await,
        }
    }
}

impl From<GsaRateClient> for RateProvider {
    fn from(client: GsaRateClient) -> Self {
        RateProvider::Gsa(client)
    }
}

impl From<StaticRates> for RateProvider {
    fn from(rates: StaticRates) -> Self {
        RateProvider::Static(rates)
    }
}
