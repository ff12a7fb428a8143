//! HTTP request handlers for the novated lease API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{analyze_quote, validate_quote};
use crate::error::EngineError;
use crate::import::quote_from_value;
use crate::models::QuoteInput;
use crate::sharing::{decode_quote, encode_quote, share_link};

use super::request::ShareRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, ShareResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/validate", post(validate_handler))
        .route("/share", post(share_handler))
        .route("/share/:token", get(shared_quote_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a quote and returns the full lease analysis.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let quote = match quote_from_payload(correlation_id, payload) {
        Ok(quote) => quote,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match analyze_quote(&quote, state.policy()) {
        Ok(analysis) => {
            info!(
                correlation_id = %correlation_id,
                duration_years = quote.lease_terms.duration_years,
                total_net_cost = %analysis.cost_breakdown.total_net_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(
                StatusCode::OK,
                CalculationResponse {
                    calculation_id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    analysis,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /validate endpoint.
///
/// Accepts a quote and compares its stated figures against the engine.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let quote = match quote_from_payload(correlation_id, payload) {
        Ok(quote) => quote,
        Err(response) => return response,
    };

    let validation = validate_quote(&quote, state.policy());
    info!(
        correlation_id = %correlation_id,
        discrepancies = validation.discrepancies.len(),
        overall_assessment = ?validation.overall_assessment,
        "Validation completed successfully"
    );
    json_response(StatusCode::OK, validation)
}

/// Handler for POST /share endpoint.
///
/// Encodes a quote as a share token and link.
async fn share_handler(payload: Result<Json<ShareRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing share request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match encode_quote(&request.quote) {
        Ok(token) => {
            let url = share_link(&request.base_url, &token);
            info!(
                correlation_id = %correlation_id,
                token_length = token.len(),
                "Share link created"
            );
            json_response(StatusCode::OK, ShareResponse { token, url })
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /share/:token endpoint.
///
/// Decodes a share token back into the quote it carries.
async fn shared_quote_handler(Path(token): Path<String>) -> Response {
    match decode_quote(&token) {
        Some(quote) => json_response(StatusCode::OK, quote),
        None => {
            warn!(token_length = token.len(), "Share token could not be decoded");
            json_response(StatusCode::NOT_FOUND, ApiError::invalid_share_token())
        }
    }
}

/// Runs a request body through the quote import checks, turning any failure
/// into the error response to send.
fn quote_from_payload(
    correlation_id: Uuid,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<QuoteInput, Response> {
    let Json(value) = payload.map_err(|rejection| rejection_response(correlation_id, rejection))?;
    quote_from_value(value).map_err(|err| engine_error_response(correlation_id, err))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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
    json_response(StatusCode::BAD_REQUEST, error)
}
