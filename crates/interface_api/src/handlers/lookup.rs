//! Full lookup handler

use axum::{extract::State, Json};

use crate::dto::{LookupRequest, LookupResponse};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// Runs address → zone in one call
///
/// Lookup failures are reported in the body's `status`, not as HTTP errors.
/// Only an unreadable request body produces a 4xx.
pub async fn lookup_address(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LookupRequest>,
) -> Result<Json<LookupResponse>, ApiError> {
    let outcome = state.orchestrator.lookup(request.raw_address()).await;
    Ok(Json(LookupResponse::from(outcome)))
}
