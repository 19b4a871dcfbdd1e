//! Lava zone DTOs

use serde::Deserialize;
use serde_json::Value;

use core_kernel::Coordinate;

/// Body of `POST /lava-zone`
#[derive(Debug, Default, Deserialize)]
pub struct LavaZoneRequest {
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
    #[serde(default, rename = "matchedAddress")]
    pub matched_address: Option<Value>,
}

impl LavaZoneRequest {
    /// The point to query; both axes must be JSON numbers
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.lat.as_ref().and_then(Value::as_f64)?;
        let lng = self.lng.as_ref().and_then(Value::as_f64)?;
        Coordinate::new(lat, lng).ok()
    }

    /// Echoed back verbatim when it is a string
    pub fn matched_address(&self) -> Option<String> {
        self.matched_address
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}
