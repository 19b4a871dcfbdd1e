//! Lava-Flow Hazard Zone Adapter
//!
//! Point-in-polygon lookup against the Hawaiʻi hazard zone feature layer. The
//! query asks for attributes only; the layer's boundary geometry is never
//! transferred.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use core_kernel::{Coordinate, DomainPort, HealthCheckResult, HealthCheckable, WGS84_WKID};

use super::arcgis::fetch_json;
use super::ArcGisConfig;
use crate::error::{LookupError, UpstreamService};
use crate::ports::ZoneLookupPort;
use crate::zone::ZoneResult;

const ADAPTER_ID: &str = "hazard-zone-service";

/// Zone lookup backed by the hazard zone feature service
#[derive(Debug, Clone)]
pub struct HazardZoneService {
    config: Arc<ArcGisConfig>,
    client: reqwest::Client,
}

impl HazardZoneService {
    pub fn new(config: Arc<ArcGisConfig>, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn query_params(point: Coordinate, token: &str) -> Vec<(&'static str, String)> {
        let geometry = json!({
            "x": point.x(),
            "y": point.y(),
            "spatialReference": { "wkid": WGS84_WKID },
        });

        vec![
            ("f", "json".to_string()),
            ("geometry", geometry.to_string()),
            ("geometryType", "esriGeometryPoint".to_string()),
            ("inSR", WGS84_WKID.to_string()),
            ("spatialRel", "esriSpatialRelIntersects".to_string()),
            ("outFields", "*".to_string()),
            ("returnGeometry", "false".to_string()),
            ("token", token.to_string()),
        ]
    }
}

impl DomainPort for HazardZoneService {}

#[async_trait]
impl HealthCheckable for HazardZoneService {
    async fn health_check(&self) -> HealthCheckResult {
        if self.config.is_configured() {
            HealthCheckResult::healthy(ADAPTER_ID)
        } else {
            HealthCheckResult::unhealthy(ADAPTER_ID, "ARCGIS_API_KEY is not configured")
        }
    }
}

#[async_trait]
impl ZoneLookupPort for HazardZoneService {
    async fn lookup_zone(
        &self,
        point: Coordinate,
        matched_address: Option<String>,
    ) -> Result<ZoneResult, LookupError> {
        let token = self.config.require_api_key()?;
        if !point.is_finite() {
            return Err(LookupError::validation("Latitude and longitude must be finite"));
        }

        let response: FeatureQueryResponse = fetch_json(
            &self.client,
            UpstreamService::HazardZones,
            &self.config.zone_query_url(),
            &Self::query_params(point, token.expose()),
        )
        .await?;

        let result = first_feature(response, matched_address);
        if !result.has_zone() {
            debug!(point = %point, "Point is outside every mapped hazard zone");
        }
        Ok(result)
    }
}

// =============================================================================
// Upstream Data Transfer Objects
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct FeatureQueryResponse {
    #[serde(default)]
    features: Option<Vec<Feature>>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    attributes: Option<ZoneAttributes>,
}

#[derive(Debug, Default, Deserialize)]
struct ZoneAttributes {
    #[serde(rename = "ZONE", default, deserialize_with = "attribute_text")]
    zone: Option<String>,
    #[serde(rename = "ZONE_DESC", default, deserialize_with = "attribute_text")]
    zone_desc: Option<String>,
    #[serde(rename = "VOLCANO", default, deserialize_with = "attribute_text")]
    volcano: Option<String>,
}

/// Attribute values may be strings or numbers depending on the layer schema
fn attribute_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// Zero features is a valid "outside every zone" answer, never an error
fn first_feature(response: FeatureQueryResponse, matched_address: Option<String>) -> ZoneResult {
    let attributes = response
        .features
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|feature| feature.attributes)
        .unwrap_or_default();

    ZoneResult {
        matched_address,
        zone_id: attributes.zone,
        description: attributes.zone_desc,
        volcano: attributes.volcano,
    }
}
