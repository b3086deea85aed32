//! HTTP request handlers for the Pay Package Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::resolve_minimum_wage;
use crate::models::ContractInput;

use super::response::{ApiError, ApiErrorResponse, MinimumWageResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/minimum-wage/:state", get(minimum_wage_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts contract details and returns one pay package per configured
/// margin scenario.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContractInput>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let contract = match payload {
        Ok(Json(contract)) => contract,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    if let Err(err) = contract.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Contract failed validation"
        );
        let api_error: ApiErrorResponse = err.into();
        return json_response(api_error.status, api_error.error);
    }

    let result = state.calculator().calculate(&contract).await;

    info!(
        correlation_id = %correlation_id,
        calculation_id = %result.calculation_id,
        state = %contract.state,
        hours_per_week = contract.hours_per_week,
        duration_weeks = contract.duration_weeks,
        is_standard_rate = result.daily_rates.is_standard_rate,
        duration_us = result.audit_trace.duration_us,
        "Calculation completed successfully"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for GET /minimum-wage/:state endpoint.
///
/// Unknown state codes resolve to the federal minimum wage.
async fn minimum_wage_handler(
    State(state): State<AppState>,
    Path(state_code): Path<String>,
) -> Response {
    let resolution = resolve_minimum_wage(state.config().minimum_wages(), &state_code, 1);
    let state_code = state_code.trim().to_uppercase();

    info!(
        state = %state_code,
        minimum_wage = %resolution.minimum_wage,
        is_federal_default = resolution.is_federal_default,
        "Minimum wage lookup"
    );

    json_response(
        StatusCode::OK,
        MinimumWageResponse {
            state: state_code,
            minimum_wage: resolution.minimum_wage,
            is_federal_default: resolution.is_federal_default,
        },
    )
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}
