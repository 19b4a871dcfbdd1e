//! ArcGIS Adapters
//!
//! Adapter implementations of the lookup ports backed by the hosted ArcGIS
//! REST services:
//!
//! - **ArcGisGeocoder**: World geocoder `findAddressCandidates`
//! - **HazardZoneService**: Hawaiʻi lava-flow hazard zone feature layer `query`
//!
//! Both adapters share one immutable [`ArcGisConfig`] and one pooled
//! `reqwest::Client`, built once at startup:
//!
//! ```rust,ignore
//! use domain_hazard::adapters::{ArcGisConfig, ArcGisGeocoder, HazardZoneService};
//! use std::sync::Arc;
//!
//! let config = Arc::new(ArcGisConfig {
//!     api_key: Some(ApiKey::new(secret)?),
//!     ..Default::default()
//! });
//! let client = config.http_client()?;
//!
//! let geocoder = ArcGisGeocoder::new(config.clone(), client.clone());
//! let zones = HazardZoneService::new(config, client);
//! ```

mod arcgis;
pub mod geocoder;
pub mod hazard_zones;

pub use geocoder::ArcGisGeocoder;
pub use hazard_zones::HazardZoneService;

use std::time::Duration;

use core_kernel::ApiKey;

use crate::error::LookupError;

/// ArcGIS World geocoder `findAddressCandidates` operation
pub const DEFAULT_GEOCODE_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

/// Hawaiʻi lava-flow hazard zone feature layer (queries go to `<layer>/query`)
pub const DEFAULT_ZONE_SERVICE_URL: &str =
    "https://geoportal.hawaii.gov/datasets/volcano-lava-flow-hazard-zones-line/api/featureServer/0";

const USER_AGENT: &str = concat!("lava-zone-checker/", env!("CARGO_PKG_VERSION"));

/// Configuration shared by both ArcGIS adapters
///
/// Constructed once at startup and never mutated. A missing `api_key` is
/// allowed here; every request path that needs it fails with
/// [`LookupError::Configuration`] instead.
#[derive(Debug, Clone)]
pub struct ArcGisConfig {
    /// Full URL of the geocoder's `findAddressCandidates` operation
    pub geocode_url: String,

    /// URL of the hazard zone feature layer
    pub zone_service_url: String,

    /// API key sent as the `token` parameter on every request
    pub api_key: Option<ApiKey>,

    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for ArcGisConfig {
    fn default() -> Self {
        Self {
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            zone_service_url: DEFAULT_ZONE_SERVICE_URL.to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl ArcGisConfig {
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Returns the API key or fails fast with a configuration error
    pub fn require_api_key(&self) -> Result<&ApiKey, LookupError> {
        self.api_key.as_ref().ok_or(LookupError::Configuration)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the HTTP client shared by both adapters
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// URL of the feature layer's `query` operation
    pub fn zone_query_url(&self) -> String {
        format!("{}/query", self.zone_service_url.trim_end_matches('/'))
    }
}
