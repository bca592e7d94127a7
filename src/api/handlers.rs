//! HTTP request handlers for the Call Budget Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ScheduleOptions, calculate_burden_from_schedule_with, calculate_call_budget,
    calculate_expected_burden, calculate_fairness_metrics_with, generate_call_schedule,
    generate_call_schedule_with_rng,
};
use crate::error::EngineResult;
use crate::models::{CallAssumptions, CallProvider, CallTier};

use super::request::{
    BudgetRequest, BurdenRequest, CallContextRequest, ProviderRequest, ScheduleRequest,
    resolve_providers_on_call, validate_providers, validate_tiers, validate_year,
};
use super::response::{ApiError, ApiErrorResponse, BurdenResponse, ScheduleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/budget", post(budget_handler))
        .route("/burden", post(burden_handler))
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON extraction failure to a 400 response.
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

/// Converts and validates a roster and its call context.
fn prepare_inputs(
    providers: Vec<ProviderRequest>,
    context: CallContextRequest,
) -> EngineResult<(Vec<CallProvider>, CallAssumptions)> {
    let providers: Vec<CallProvider> = providers.into_iter().map(Into::into).collect();
    validate_providers(&providers)?;
    context.validate()?;
    let providers_on_call = resolve_providers_on_call(&providers, context.providers_on_call);
    Ok((providers, context.into_assumptions(providers_on_call)))
}

/// Handler for POST /budget.
async fn budget_handler(
    State(_state): State<AppState>,
    payload: Result<Json<BudgetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing budget request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let tiers: Vec<CallTier> = request.tiers.into_iter().map(Into::into).collect();
    let prepared = validate_tiers(&tiers)
        .and_then(|()| prepare_inputs(request.providers, request.context))
        .map(|(providers, assumptions)| (tiers, providers, assumptions));

    let (tiers, providers, assumptions) = match prepared {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Budget request rejected");
            return error_response(err.into());
        }
    };

    let result = calculate_call_budget(&tiers, &providers, &assumptions);
    info!(
        correlation_id = %correlation_id,
        tiers_count = tiers.len(),
        providers_count = providers.len(),
        providers_on_call = assumptions.providers_on_call,
        total_budget = %result.total_annual_call_budget,
        diagnostic = ?result.error,
        duration_us = start_time.elapsed().as_micros(),
        "Budget calculation completed"
    );
    json_response(StatusCode::OK, result)
}

/// Handler for POST /burden.
async fn burden_handler(
    State(state): State<AppState>,
    payload: Result<Json<BurdenRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing burden request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let prepared = prepare_inputs(request.providers, request.context);

    let (providers, assumptions) = match prepared {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Burden request rejected");
            return error_response(err.into());
        }
    };

    let results = calculate_expected_burden(&providers, &assumptions);
    let summary = calculate_fairness_metrics_with(&results, &state.config().fairness);
    info!(
        correlation_id = %correlation_id,
        eligible_count = summary.eligible_provider_count,
        fairness_score = summary.fairness_score,
        duration_us = start_time.elapsed().as_micros(),
        "Burden calculation completed"
    );
    json_response(StatusCode::OK, BurdenResponse { results, summary })
}

/// Handler for POST /schedule.
///
/// A seed in the request wins over the configured seed; with neither, the
/// schedule is drawn from the system RNG.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let year = request.year;
    let prepared =
        validate_year(year).and_then(|()| prepare_inputs(request.providers, request.context));

    let (providers, assumptions) = match prepared {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Schedule request rejected");
            return error_response(err.into());
        }
    };

    let config = state.config();
    let holidays = match request.holidays {
        Some(explicit) => Some(explicit),
        None if config.schedule.use_default_holidays => None,
        None => Some(Vec::new()),
    };
    let options = ScheduleOptions {
        year,
        providers: &providers,
        assumptions: &assumptions,
        active_tier_id: &request.active_tier_id,
        holidays: holidays.as_deref(),
    };

    let seed = request.seed.or(config.schedule.seed);
    let schedule = match seed {
        Some(seed) => generate_call_schedule_with_rng(&options, &mut StdRng::seed_from_u64(seed)),
        None => generate_call_schedule(&options),
    };
    let burden = calculate_burden_from_schedule_with(&schedule, &providers, &config.fairness);

    info!(
        correlation_id = %correlation_id,
        year,
        seeded = seed.is_some(),
        assignments = schedule.total_assignments(),
        fairness_score = burden.summary.fairness_score,
        duration_us = start_time.elapsed().as_micros(),
        "Schedule generation completed"
    );
    json_response(StatusCode::OK, ScheduleResponse { schedule, burden })
}
