//! Geographic coordinates
//!
//! All coordinates are WGS84 decimal degrees. Upstream GIS services speak in
//! `x`/`y` where `x` is longitude and `y` is latitude; the constructors here
//! are the one place where that axis order is translated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Well-known id of the WGS84 spatial reference (EPSG:4326)
pub const WGS84_WKID: u32 = 4326;

/// A point on the earth in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting NaN and infinite components.
    ///
    /// No range check is applied; upstream services do their own bounds
    /// checking.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        let coordinate = Self { lat, lng };
        if !coordinate.is_finite() {
            return Err(CoreError::validation(format!(
                "coordinate components must be finite, got lat={} lng={}",
                lat, lng
            )));
        }
        Ok(coordinate)
    }

    /// Creates a coordinate from GIS `x`/`y` axes (`x` = longitude, `y` = latitude)
    pub fn from_xy(x: f64, y: f64) -> Result<Self, CoreError> {
        Self::new(y, x)
    }

    /// Longitude, as the GIS `x` axis
    pub fn x(&self) -> f64 {
        self.lng
    }

    /// Latitude, as the GIS `y` axis
    pub fn y(&self) -> f64 {
        self.lat
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
