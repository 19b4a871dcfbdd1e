//! Hazard zone results

use serde::{Deserialize, Serialize};

/// Hazard zone attributes for a point
///
/// Every field is independently nullable. A result whose zone fields are all
/// `None` means the address resolved but no mapped hazard zone covers it; it
/// is a success, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResult {
    pub matched_address: Option<String>,
    pub zone_id: Option<String>,
    pub description: Option<String>,
    pub volcano: Option<String>,
}

impl ZoneResult {
    /// Result for a point outside every mapped hazard zone
    pub fn outside_mapped_zones(matched_address: Option<String>) -> Self {
        Self {
            matched_address,
            ..Default::default()
        }
    }

    /// Returns true if any zone attribute is present
    pub fn has_zone(&self) -> bool {
        self.zone_id.is_some() || self.description.is_some() || self.volcano.is_some()
    }
}
