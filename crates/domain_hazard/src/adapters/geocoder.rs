//! ArcGIS World Geocoder Adapter
//!
//! Resolves a single-line address through `findAddressCandidates`, asking for
//! exactly one candidate and only the matched-address fields.
//!
//! # Axis order
//!
//! Candidate locations come back as `{x, y}` where `x` is longitude and `y` is
//! latitude. They are converted with [`Coordinate::from_xy`], never by hand.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use core_kernel::{Coordinate, DomainPort, HealthCheckResult, HealthCheckable};

use super::arcgis::fetch_json;
use super::ArcGisConfig;
use crate::error::{LookupError, UpstreamService};
use crate::geocode::GeocodeResult;
use crate::ports::GeocodePort;

const ADAPTER_ID: &str = "arcgis-geocoder";

/// Geocoder backed by the ArcGIS World GeocodeServer
#[derive(Debug, Clone)]
pub struct ArcGisGeocoder {
    config: Arc<ArcGisConfig>,
    client: reqwest::Client,
}

impl ArcGisGeocoder {
    pub fn new(config: Arc<ArcGisConfig>, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn query_params(address: &str, token: &str) -> Vec<(&'static str, String)> {
        vec![
            ("f", "json".to_string()),
            ("outFields", "Match_addr,Addr_type".to_string()),
            ("maxLocations", "1".to_string()),
            ("singleLine", address.to_string()),
            ("token", token.to_string()),
        ]
    }
}

impl DomainPort for ArcGisGeocoder {}

#[async_trait]
impl HealthCheckable for ArcGisGeocoder {
    async fn health_check(&self) -> HealthCheckResult {
        if self.config.is_configured() {
            HealthCheckResult::healthy(ADAPTER_ID)
        } else {
            HealthCheckResult::unhealthy(ADAPTER_ID, "ARCGIS_API_KEY is not configured")
        }
    }
}

#[async_trait]
impl GeocodePort for ArcGisGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, LookupError> {
        let token = self.config.require_api_key()?;

        let response: FindAddressCandidatesResponse = fetch_json(
            &self.client,
            UpstreamService::Geocoder,
            &self.config.geocode_url,
            &Self::query_params(address, token.expose()),
        )
        .await?;

        let result = best_candidate(response, address);
        if let Err(LookupError::NotFound) = result {
            info!("Geocoder returned no candidates");
        }
        result
    }
}

// =============================================================================
// Upstream Data Transfer Objects
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct FindAddressCandidatesResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    address: Option<String>,
    score: Option<f64>,
    location: Option<CandidateLocation>,
}

#[derive(Debug, Deserialize)]
struct CandidateLocation {
    x: Option<f64>,
    y: Option<f64>,
}

impl CandidateLocation {
    fn to_coordinate(&self) -> Option<Coordinate> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Coordinate::from_xy(x, y).ok(),
            _ => None,
        }
    }
}

/// Takes candidate 0 as-is; no re-ranking beyond the upstream order
fn best_candidate(
    response: FindAddressCandidatesResponse,
    address: &str,
) -> Result<GeocodeResult, LookupError> {
    let best = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(LookupError::NotFound)?;

    Ok(GeocodeResult {
        matched_address: best.address.unwrap_or_else(|| address.to_string()),
        score: best.score,
        location: best.location.as_ref().and_then(CandidateLocation::to_coordinate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> FindAddressCandidatesResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_first_candidate_is_axis_correct() {
        let response = parse(json!({
            "candidates": [{ "address": "Hilo", "score": 97.2, "location": { "x": -155.5, "y": 19.6 } }]
        }));

        let result = best_candidate(response, "hilo").unwrap();
        assert_eq!(result.matched_address, "Hilo");
        assert_eq!(result.score, Some(97.2));
        assert_eq!(result.location, Some(Coordinate { lat: 19.6, lng: -155.5 }));
    }

    #[test]
    fn test_no_candidates_is_not_found() {
        assert_eq!(
            best_candidate(parse(json!({ "candidates": [] })), "nowhere"),
            Err(LookupError::NotFound)
        );
        assert_eq!(best_candidate(parse(json!({})), "nowhere"), Err(LookupError::NotFound));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let response = parse(json!({ "candidates": [{ "location": { "x": -155.5 } }] }));

        let result = best_candidate(response, "1 Main St").unwrap();
        assert_eq!(result.matched_address, "1 Main St");
        assert_eq!(result.score, None);
        assert_eq!(result.location, None);
    }

    #[test]
    fn test_query_params() {
        let params = ArcGisGeocoder::query_params("1 Main St", "secret");
        assert!(params.contains(&("maxLocations", "1".to_string())));
        assert!(params.contains(&("singleLine", "1 Main St".to_string())));
        assert!(params.contains(&("token", "secret".to_string())));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        // Unroutable URL: reaching the network would surface as Upstream, not Configuration
        let config = Arc::new(ArcGisConfig {
            geocode_url: "http://127.0.0.1:1/never".to_string(),
            ..Default::default()
        });
        let geocoder = ArcGisGeocoder::new(config.clone(), config.http_client().unwrap());

        assert_eq!(geocoder.geocode("1 Main St").await, Err(LookupError::Configuration));
        assert!(!geocoder.health_check().await.is_healthy());
    }
}
