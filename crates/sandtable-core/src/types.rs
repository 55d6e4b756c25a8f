//! Fundamental geographic types.

use serde::{Deserialize, Serialize};

/// Geographic position in degrees (WGS84 lat/lon pair).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
