//! API configuration

use serde::{Deserialize, Deserializer};

use core_kernel::ApiKey;
use domain_hazard::adapters::{ArcGisConfig, DEFAULT_GEOCODE_URL, DEFAULT_ZONE_SERVICE_URL};

/// API configuration
///
/// Server settings come from `LAVA_*` variables. The ArcGIS key is read from
/// `ARCGIS_API_KEY` and may be absent; the server still starts without it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Geocoder `findAddressCandidates` URL
    pub geocode_url: String,
    /// Hazard zone feature layer URL
    pub zone_service_url: String,
    /// Upstream request timeout in seconds
    #[serde(default)]
    pub upstream_timeout_secs: Option<u64>,
    /// ArcGIS API key; blank values count as missing
    #[serde(default, deserialize_with = "blank_as_missing")]
    pub arcgis_api_key: Option<ApiKey>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
            zone_service_url: DEFAULT_ZONE_SERVICE_URL.to_string(),
            upstream_timeout_secs: None,
            arcgis_api_key: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080_i64)?
            .set_default("log_level", "info")?
            .set_default("geocode_url", DEFAULT_GEOCODE_URL)?
            .set_default("zone_service_url", DEFAULT_ZONE_SERVICE_URL)?
            .add_source(config::Environment::with_prefix("LAVA"))
            .add_source(config::Environment::with_prefix("ARCGIS").keep_prefix(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_configured(&self) -> bool {
        self.arcgis_api_key.is_some()
    }

    /// Settings shared by both ArcGIS adapters
    pub fn arcgis(&self) -> ArcGisConfig {
        ArcGisConfig {
            geocode_url: self.geocode_url.clone(),
            zone_service_url: self.zone_service_url.clone(),
            api_key: self.arcgis_api_key.clone(),
            timeout_secs: self.upstream_timeout_secs,
        }
    }
}

fn blank_as_missing<'de, D>(deserializer: D) -> Result<Option<ApiKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|key| ApiKey::new(key).ok()))
}
