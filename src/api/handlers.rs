//! HTTP request handlers for the Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_leave_breakdown, check_balance, check_chargeable, check_request_limit,
    select_approval_chain,
};
use crate::config::{ConfigLoader, LeaveType};
use crate::error::EngineError;
use crate::models::{AuditStep, AuditTrace, AuditWarning, LeaveCalculationResult};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/leave-types", get(leave_types_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a leave request and returns the chargeable days, the per-day
/// breakdown and, when a leave type is given, the approval chain.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
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

    let start_time = Instant::now();
    match perform_calculation(&request, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                start_date = %result.start_date,
                end_date = %result.end_date,
                leave_type = result.leave_type.as_deref().unwrap_or("-"),
                total_days = %result.total_days,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Leave calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave calculation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /leave-types endpoint.
async fn leave_types_handler(State(state): State<AppState>) -> impl IntoResponse {
    let leave_types: Vec<LeaveType> = state
        .config()
        .leave_types()
        .into_iter()
        .cloned()
        .collect();
    json_response(StatusCode::OK, leave_types)
}

/// Charges a leave request against the configured calendars and policies.
fn perform_calculation(
    request: &CalculationRequest,
    config: &ConfigLoader,
) -> Result<LeaveCalculationResult, EngineError> {
    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    request.validate()?;
    let range = request.date_range()?;

    let leave_type = request
        .leave_type
        .as_deref()
        .map(|code| config.get_leave_type(code))
        .transpose()?;

    let holidays = match &request.holidays {
        Some(holidays) => holidays.clone(),
        None => config.holidays_for_range(&range),
    };

    let breakdown = calculate_leave_breakdown(
        &range,
        request.start_portion,
        request.end_portion,
        &holidays,
        step_number,
    );
    audit_steps.push(breakdown.audit_step);
    step_number += 1;

    let total_days = breakdown.total_days;
    warnings.extend(check_chargeable(total_days));
    if let Some(remaining) = request.remaining_balance {
        warnings.extend(check_balance(total_days, remaining));
    }

    let approval_chain = match leave_type {
        Some(leave_type) => {
            warnings.extend(check_request_limit(leave_type, total_days));
            let selection = select_approval_chain(leave_type, total_days, step_number)?;
            audit_steps.push(selection.audit_step);
            Some(selection.chain)
        }
        None => None,
    };

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(LeaveCalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        start_date: range.start(),
        end_date: range.end(),
        start_portion: request.start_portion,
        end_portion: request.end_portion,
        leave_type: request.leave_type.clone(),
        total_days,
        days: breakdown.days,
        approval_chain,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}
