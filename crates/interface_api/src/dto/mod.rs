//! Request and response bodies

pub mod geocode;
pub mod lava_zone;
pub mod lookup;

pub use geocode::GeocodeRequest;
pub use lava_zone::LavaZoneRequest;
pub use lookup::{LookupRequest, LookupResponse};

use serde_json::Value;

/// Non-blank string content of an optional JSON field
pub(crate) fn non_blank_text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
