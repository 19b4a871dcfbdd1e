//! Fake ArcGIS upstream
//!
//! Serves both the geocoder and the hazard-zone feature service from one
//! axum server bound to an ephemeral localhost port. Responses are canned per
//! endpoint and every query string received is recorded so tests can assert
//! on exactly what the adapters sent.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::fixtures;

/// Path of the geocoder's `findAddressCandidates` operation
pub const GEOCODE_PATH: &str = "/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

/// Path of the hazard-zone feature layer (queries go to `<layer>/query`)
pub const ZONE_LAYER_PATH: &str = "/arcgis/rest/services/LavaFlowHazardZones/FeatureServer/0";

type QueryParams = HashMap<String, String>;

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: Value,
}

impl CannedResponse {
    fn new(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        }
    }
}

#[derive(Debug)]
struct Shared {
    geocode: RwLock<CannedResponse>,
    zone: RwLock<CannedResponse>,
    geocode_requests: RwLock<Vec<QueryParams>>,
    zone_requests: RwLock<Vec<QueryParams>>,
}

/// In-process stand-in for the two ArcGIS services
///
/// By default the geocoder answers with [`fixtures::hilo_candidates`] and the
/// feature service with [`fixtures::kilauea_zone_1`].
///
/// ```rust,ignore
/// let upstream = FakeArcGis::start().await;
/// upstream.respond_to_zone(200, fixtures::no_features()).await;
/// // point adapters at upstream.geocode_url() / upstream.zone_service_url()
/// ```
#[derive(Debug)]
pub struct FakeArcGis {
    addr: SocketAddr,
    shared: Arc<Shared>,
    server: JoinHandle<()>,
}

impl FakeArcGis {
    /// Binds to `127.0.0.1:0` and starts serving in a background task
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start() -> Self {
        let shared = Arc::new(Shared {
            geocode: RwLock::new(CannedResponse::new(200, fixtures::hilo_candidates())),
            zone: RwLock::new(CannedResponse::new(200, fixtures::kilauea_zone_1())),
            geocode_requests: RwLock::new(Vec::new()),
            zone_requests: RwLock::new(Vec::new()),
        });

        let app = Router::new()
            .route(GEOCODE_PATH, get(find_address_candidates))
            .route(&format!("{}/query", ZONE_LAYER_PATH), get(query_features))
            .with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fake ArcGIS listener");
        let addr = listener.local_addr().expect("listener has no local address");

        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, shared, server }
    }

    /// Full URL of the fake geocoder operation
    pub fn geocode_url(&self) -> String {
        format!("http://{}{}", self.addr, GEOCODE_PATH)
    }

    /// Full URL of the fake feature layer
    pub fn zone_service_url(&self) -> String {
        format!("http://{}{}", self.addr, ZONE_LAYER_PATH)
    }

    pub async fn respond_to_geocode(&self, status: u16, body: Value) {
        *self.shared.geocode.write().await = CannedResponse::new(status, body);
    }

    pub async fn respond_to_zone(&self, status: u16, body: Value) {
        *self.shared.zone.write().await = CannedResponse::new(status, body);
    }

    /// Query strings received by the geocoder, oldest first
    pub async fn geocode_requests(&self) -> Vec<QueryParams> {
        self.shared.geocode_requests.read().await.clone()
    }

    /// Query strings received by the feature service, oldest first
    pub async fn zone_requests(&self) -> Vec<QueryParams> {
        self.shared.zone_requests.read().await.clone()
    }

    /// Total number of upstream calls received
    pub async fn request_count(&self) -> usize {
        self.shared.geocode_requests.read().await.len() + self.shared.zone_requests.read().await.len()
    }
}

impl Drop for FakeArcGis {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn find_address_candidates(
    State(shared): State<Arc<Shared>>,
    Query(params): Query<QueryParams>,
) -> (StatusCode, Json<Value>) {
    shared.geocode_requests.write().await.push(params);
    let canned = shared.geocode.read().await.clone();
    (canned.status, Json(canned.body))
}

async fn query_features(
    State(shared): State<Arc<Shared>>,
    Query(params): Query<QueryParams>,
) -> (StatusCode, Json<Value>) {
    shared.zone_requests.write().await.push(params);
    let canned = shared.zone.read().await.clone();
    (canned.status, Json(canned.body))
}
