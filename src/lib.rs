//! Pay Package Engine for travel staffing contracts
//!
//! This crate turns a client bill rate into worker pay packages at a set of
//! target gross margins. Each package splits pay into taxable wages and a
//! non-taxable per-diem stipend sized from GSA lodging and M&IE rates,
//! subject to the state minimum wage, with overtime and part-time proration
//! applied to the scheduled week.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod rates;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
