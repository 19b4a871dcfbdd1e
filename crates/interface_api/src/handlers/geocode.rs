//! Geocoding handler

use axum::{extract::State, Json};
use tracing::debug;

use domain_hazard::orchestrator::ADDRESS_REQUIRED;
use domain_hazard::GeocodeResult;

use crate::dto::GeocodeRequest;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// Resolves a single-line address to its best geocoder match
///
/// The address is validated before the API key is checked, so a blank
/// address is a 400 even on an unconfigured server.
pub async fn geocode_address(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GeocodeRequest>,
) -> Result<Json<GeocodeResult>, ApiError> {
    let address = request.address().ok_or_else(|| {
        debug!("Geocode request without an address");
        ApiError::BadRequest(ADDRESS_REQUIRED.to_string())
    })?;

    let result = state.geocoder.geocode(address).await?;
    Ok(Json(result))
}
