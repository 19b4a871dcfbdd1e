//! Geocode DTOs

use serde::Deserialize;
use serde_json::Value;

use super::non_blank_text;

/// Body of `POST /geocode`
///
/// `address` stays untyped so that a missing, null or non-string value is
/// reported with the same message as a blank one.
#[derive(Debug, Default, Deserialize)]
pub struct GeocodeRequest {
    #[serde(default)]
    pub address: Option<Value>,
}

impl GeocodeRequest {
    /// Trimmed address, if one was supplied
    pub fn address(&self) -> Option<&str> {
        non_blank_text(self.address.as_ref())
    }
}
