//! HTTP API Layer
//!
//! This crate provides the REST API for the lava zone checker using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `/geocode`, `/lava-zone`, `/lookup` and health probes
//! - **Middleware**: request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig, AppState};
//!
//! let state = AppState::from_config(ApiConfig::from_env()?)?;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_hazard::{ArcGisGeocoder, GeocodePort, HazardZoneService, LookupOrchestrator, ZoneLookupPort};

use crate::config::ApiConfig;
use crate::handlers::{geocode, health, lava_zone, lookup};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub geocoder: Arc<dyn GeocodePort>,
    pub zones: Arc<dyn ZoneLookupPort>,
    pub orchestrator: LookupOrchestrator,
}

impl AppState {
    /// Wires the ArcGIS adapters from configuration
    ///
    /// Both adapters share one HTTP client. Fails only if the client cannot
    /// be built.
    pub fn from_config(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let arcgis = Arc::new(config.arcgis());
        let client = arcgis.http_client()?;

        let geocoder = Arc::new(ArcGisGeocoder::new(arcgis.clone(), client.clone()));
        let zones = Arc::new(HazardZoneService::new(arcgis, client));

        Ok(Self::with_ports(config, geocoder, zones))
    }

    /// Builds state around arbitrary port implementations
    pub fn with_ports(
        config: ApiConfig,
        geocoder: Arc<dyn GeocodePort>,
        zones: Arc<dyn ZoneLookupPort>,
    ) -> Self {
        let orchestrator = LookupOrchestrator::new(geocoder.clone(), zones.clone());
        Self {
            config,
            geocoder,
            zones,
            orchestrator,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Configuration and wired ports
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Probes are not request-logged
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let lookup_routes = Router::new()
        .route("/geocode", post(geocode::geocode_address))
        .route("/lava-zone", post(lava_zone::lookup_lava_zone))
        .route("/lookup", post(lookup::lookup_address))
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .merge(lookup_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
