//! Pre-built Test Fixtures
//!
//! Response bodies shaped like the real ArcGIS geocoder and feature service,
//! plus the sample address used throughout the test suite.

use serde_json::{json, Value};

/// Address a user would type into the form
pub const EXAMPLE_ADDRESS: &str = "1234 Example St, Hilo, HI";

/// Normalized address the geocoder returns for [`EXAMPLE_ADDRESS`]
pub const MATCHED_ADDRESS: &str = "1234 Example St, Hilo, HI 96720";

/// Longitude of the Hilo candidate (upstream `x`)
pub const HILO_X: f64 = -155.09;

/// Latitude of the Hilo candidate (upstream `y`)
pub const HILO_Y: f64 = 19.70;

/// API key handed to adapters under test
pub const TEST_API_KEY: &str = "test-arcgis-key";

/// Geocoder response with a single Hilo candidate
pub fn hilo_candidates() -> Value {
    json!({
        "spatialReference": { "wkid": 4326, "latestWkid": 4326 },
        "candidates": [
            {
                "address": MATCHED_ADDRESS,
                "location": { "x": HILO_X, "y": HILO_Y },
                "score": 100,
                "attributes": { "Match_addr": MATCHED_ADDRESS, "Addr_type": "PointAddress" },
                "extent": { "xmin": -155.10, "ymin": 19.69, "xmax": -155.08, "ymax": 19.71 }
            }
        ]
    })
}

/// Geocoder response with several candidates; only the first should be used
pub fn ranked_candidates() -> Value {
    json!({
        "candidates": [
            { "address": MATCHED_ADDRESS, "location": { "x": HILO_X, "y": HILO_Y }, "score": 98.5 },
            { "address": "1234 Example Rd, Hilo, HI 96720", "location": { "x": -155.2, "y": 19.6 }, "score": 99.9 }
        ]
    })
}

/// Geocoder response for an address it could not match
pub fn empty_candidates() -> Value {
    json!({
        "spatialReference": { "wkid": 4326, "latestWkid": 4326 },
        "candidates": []
    })
}

/// Candidate without `address`, `score` or `location`
pub fn bare_candidate() -> Value {
    json!({ "candidates": [ { "attributes": {} } ] })
}

/// ArcGIS error payload, which the platform sends with HTTP 200
pub fn invalid_token_error() -> Value {
    json!({
        "error": {
            "code": 498,
            "message": "Invalid token.",
            "details": []
        }
    })
}

/// Feature service response for a point inside Kilauea's zone 1
pub fn kilauea_zone_1() -> Value {
    json!({
        "objectIdFieldName": "OBJECTID",
        "geometryType": "esriGeometryPolyline",
        "features": [
            {
                "attributes": {
                    "OBJECTID": 17,
                    "ZONE": "1",
                    "ZONE_DESC": "Zone 1",
                    "VOLCANO": "Kilauea"
                }
            }
        ]
    })
}

/// Feature service response for a point outside every mapped hazard zone
pub fn no_features() -> Value {
    json!({
        "objectIdFieldName": "OBJECTID",
        "features": []
    })
}

/// Feature whose `ZONE` is numeric and whose other attributes are null or absent
pub fn partial_zone_feature() -> Value {
    json!({
        "features": [
            { "attributes": { "OBJECTID": 3, "ZONE": 3, "ZONE_DESC": null } }
        ]
    })
}
