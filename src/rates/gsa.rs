//! Per-diem rates from the GSA rate proxy.
//!
//! The proxy forwards to the GSA per-diem API and returns its schedule
//! unchanged. A schedule lists one or more rate entries for the location,
//! each covering a set of months with a lodging value per month and a
//! single M&IE figure.

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::PerDiemSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::DailyRates;

use super::{RateLookup, RateQuery};

/// Top level of the per-diem schedule returned by the proxy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerDiemSchedule {
    /// Matching locations; only the first is used.
    #[serde(default)]
    pub rates: Vec<LocationRates>,
}

/// The rate entries for one location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRates {
    /// Rate entries, each covering a set of months.
    #[serde(default)]
    pub rate: Vec<RateEntry>,
}

/// One rate entry of a location's schedule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateEntry {
    /// Monthly lodging values.
    #[serde(default)]
    pub months: MonthList,
    /// Lodging rate for the entry as a whole.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Meals and incidental expenses rate.
    #[serde(default)]
    pub mie: Option<Decimal>,
    /// Meals rate, used when `mie` is absent.
    #[serde(default)]
    pub meals: Option<Decimal>,
}

/// Wrapper around the month list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthList {
    /// The months an entry covers.
    #[serde(default)]
    pub month: Vec<MonthRate>,
}

/// The lodging value for one month.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthRate {
    /// Lodging rate for the month.
    #[serde(default)]
    pub value: Option<Decimal>,
    /// Three-letter month abbreviation, e.g. "Jan".
    #[serde(default)]
    pub short: String,
}

/// Finds the daily rates for `month` in a per-diem schedule.
///
/// Lodging is the month's value, else the entry's rate. Meals are the
/// entry's M&IE, else its meals figure. A zero figure counts as missing and
/// a figure missing from both sources is zero.
///
/// Returns `None` when the schedule has no locations or no entry covers the
/// month.
///
/// # Examples
///
/// ```
/// use pay_package_engine::rates::{extract_month_rates, PerDiemSchedule};
/// use rust_decimal::Decimal;
///
/// let schedule: PerDiemSchedule = serde_json::from_value(serde_json::json!({
///     "rates": [{
///         "rate": [{
///             "months": { "month": [{ "short": "Jan", "value": 150 }] },
///             "mie": 74
///         }]
///     }]
/// }))
/// .unwrap();
///
/// let rates = extract_month_rates(&schedule, "Jan").unwrap();
/// assert_eq!(rates.daily_lodging, Decimal::new(150, 0));
/// assert_eq!(rates.daily_meals, Decimal::new(74, 0));
/// assert!(extract_month_rates(&schedule, "Feb").is_none());
/// ```
pub fn extract_month_rates(schedule: &PerDiemSchedule, month: &str) -> Option<DailyRates> {
    let location = schedule.rates.first()?;

    location.rate.iter().find_map(|entry| {
        let month_rate = entry.months.month.iter().find(|m| m.short == month)?;

        let lodging = first_nonzero(&[month_rate.value, entry.rate]);
        let meals = first_nonzero(&[entry.mie, entry.meals]);
        Some(DailyRates::location(lodging, meals))
    })
}

fn first_nonzero(candidates: &[Option<Decimal>]) -> Decimal {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_zero())
        .unwrap_or(Decimal::ZERO)
}

/// Looks up location rates through the GSA rate proxy.
///
/// Any failure (missing location, unknown month, transport error, timeout,
/// non-success status, malformed schedule or no data for the month) is
/// logged and answered with the configured standard rates.
#[derive(Debug, Clone)]
pub struct GsaRateClient {
    client: Client,
    base_url: String,
    fallback: DailyRates,
}

impl GsaRateClient {
    /// Creates a client for the proxy configured in `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RateLookup`] if the HTTP client cannot be built.
    pub fn new(settings: &PerDiemSettings) -> EngineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.lookup.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.lookup.base_url.clone(),
            fallback: settings.fallback_rates(),
        })
    }

    /// Points the client at a different proxy endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The proxy endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The rates returned when a lookup fails.
    pub fn fallback(&self) -> DailyRates {
        self.fallback
    }

    async fn try_fetch(&self, query: &RateQuery) -> EngineResult<DailyRates> {
        let month = query.month_abbreviation().ok_or_else(|| EngineError::RateLookup {
            message: format!("unrecognized month '{}'", query.month),
        })?;
        let params = query_params(query)?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::RateLookup {
                message: format!("rate proxy returned {}", status),
            });
        }

        let schedule: PerDiemSchedule = response.json().await?;
        if schedule.rates.is_empty() {
            return Err(EngineError::RateLookup {
                message: "no data found for this location and year".to_string(),
            });
        }

        extract_month_rates(&schedule, month).ok_or_else(|| EngineError::RateLookup {
            message: format!("no data found for {}", month),
        })
    }
}

impl RateLookup for GsaRateClient {
    async fn fetch_daily_rates(&self, query: &RateQuery) -> DailyRates {
        match self.try_fetch(query).await {
            Ok(rates) => {
                debug!(
                    zip = query.zip(),
                    city = %query.city,
                    state = %query.state,
                    month = %query.month,
                    "Per-diem rates found"
                );
                rates
            }
            Err(error) => {
                warn!(
                    zip = query.zip(),
                    city = %query.city,
                    state = %query.state,
                    month = %query.month,
                    error = %error,
                    "Per-diem lookup failed, using standard rates"
                );
                self.fallback
            }
        }
    }
}

/// Builds the proxy query: ZIP when present, otherwise city and state.
fn query_params(query: &RateQuery) -> EngineResult<Vec<(&'static str, String)>> {
    let month_number = query
        .month_number()
        .ok_or_else(|| EngineError::RateLookup {
            message: format!("unrecognized month '{}'", query.month),
        })?
        .to_string();

    let mut params = match query.zip() {
        Some(zip) => vec![("zip", zip.to_string())],
        None if !query.city.is_empty() && !query.state.is_empty() => vec![
            ("city", query.city.clone()),
            ("state", query.state.clone()),
        ],
        None => {
            return Err(EngineError::RateLookup {
                message: "either a ZIP code or both city and state are required".to_string(),
            });
        }
    };
    params.push(("year", query.year.clone()));
    params.push(("month", month_number));

    Ok(params)
}
