//! Geocoding results

use serde::{Deserialize, Serialize};

use core_kernel::Coordinate;

/// Best geocoder match for an address
///
/// `location` is `None` only when the upstream candidate carried no usable
/// point; the orchestrator treats that as a failed lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResult {
    pub matched_address: String,
    pub score: Option<f64>,
    pub location: Option<Coordinate>,
}

impl GeocodeResult {
    pub fn new(matched_address: impl Into<String>, score: Option<f64>, location: Option<Coordinate>) -> Self {
        Self {
            matched_address: matched_address.into(),
            score,
            location,
        }
    }
}
