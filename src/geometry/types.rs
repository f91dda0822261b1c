//! Core geometry types for map annotation
//!
//! Coordinates are geographic (degrees). Rings are plain vectors so the
//! owner decides whether they are open (being edited) or closed.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { longitude: 0.0, latitude: 0.0 };

    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// `[lon, lat]` pair, the order GeoJSON and the renderer expect
    pub fn to_array(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Lift onto the elevation axis
    pub fn at_elevation(self, elevation: f64) -> Point3 {
        Point3 {
            x: self.longitude,
            y: self.latitude,
            z: elevation,
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

/// Ordered polygon boundary. Open while drafting, closed when stored.
pub type Ring = Vec<Coordinate>;

/// Extruded vertex: longitude, latitude, elevation in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
