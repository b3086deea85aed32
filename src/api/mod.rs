//! HTTP API module for the Pay Package Engine.
//!
//! This module exposes the package calculator over a small REST API:
//! `POST /calculate` for pay packages and `GET /minimum-wage/:state` for the
//! minimum wage table.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, MinimumWageResponse};
pub use state::AppState;
