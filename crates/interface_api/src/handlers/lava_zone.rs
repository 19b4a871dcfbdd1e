//! Lava zone handler

use axum::{extract::State, Json};
use tracing::debug;

use domain_hazard::ZoneResult;

use crate::dto::LavaZoneRequest;
use crate::error::{ApiError, COORDINATES_REQUIRED};
use crate::extract::ApiJson;
use crate::AppState;

/// Returns the hazard zone covering a WGS84 point
///
/// Coordinates are validated before the API key is checked, so missing
/// coordinates are a 400 even on an unconfigured server.
pub async fn lookup_lava_zone(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LavaZoneRequest>,
) -> Result<Json<ZoneResult>, ApiError> {
    let point = request.coordinate().ok_or_else(|| {
        debug!("Lava zone request without numeric coordinates");
        ApiError::BadRequest(COORDINATES_REQUIRED.to_string())
    })?;

    let result = state
        .zones
        .lookup_zone(point, request.matched_address())
        .await?;
    Ok(Json(result))
}
