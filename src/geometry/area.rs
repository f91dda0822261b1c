//! Ring area on the sphere
//!
//! Spherical-excess approximation over geographic degrees (the same formula
//! web map tooling uses), so longitude spans shrink with latitude and the
//! result approximates square meters on the ground.

use super::ring::{close_ring, distinct_vertices};
use super::types::Coordinate;
use serde::Serialize;

/// WGS84 equatorial radius
pub const EARTH_RADIUS_METERS: f64 = 6378137.0;

pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;

const AREA_FACTOR: f64 = EARTH_RADIUS_METERS * EARTH_RADIUS_METERS / 2.0;

/// Relative tolerance on the cross product when testing for a straight ring
const COLLINEAR_TOLERANCE: f64 = 1e-9;

pub fn square_feet(square_meters: f64) -> f64 {
    square_meters * SQUARE_FEET_PER_SQUARE_METER
}

/// Unsigned area in m², or `None` for fewer than 3 points.
/// Winding direction does not matter. A ring whose vertices lie on one
/// straight line in lon/lat encloses nothing and measures exactly 0.
pub fn ring_area(ring: &[Coordinate]) -> Option<f64> {
    if ring.len() < 3 {
        return None;
    }
    let closed = close_ring(ring);
    if is_collinear(distinct_vertices(&closed)) {
        return Some(0.0);
    }
    Some(signed_ring_area(&closed).abs())
}

/// True when every vertex lies on the line through the first vertex and
/// the vertex farthest from it
fn is_collinear(vertices: &[Coordinate]) -> bool {
    let Some(&first) = vertices.first() else {
        return true;
    };
    let offset = |c: &Coordinate| (c.longitude - first.longitude, c.latitude - first.latitude);
    let length = |(dx, dy): (f64, f64)| dx.hypot(dy);

    let axis = vertices
        .iter()
        .map(offset)
        .max_by(|a, b| length(*a).total_cmp(&length(*b)))
        .unwrap_or((0.0, 0.0));
    let axis_length = length(axis);
    if axis_length == 0.0 {
        return true;
    }

    vertices.iter().map(offset).all(|v| {
        let cross = axis.0 * v.1 - axis.1 * v.0;
        cross.abs() <= COLLINEAR_TOLERANCE * axis_length * length(v)
    })
}

/// Signed area of a closed ring
fn signed_ring_area(closed: &[Coordinate]) -> f64 {
    let n = closed.len() - 1;
    if n <= 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..n {
        let lower = closed[i];
        let middle = closed[(i + 1) % n];
        let upper = closed[(i + 2) % n];
        total += (upper.longitude.to_radians() - lower.longitude.to_radians())
            * middle.latitude.to_radians().sin();
    }
    total * AREA_FACTOR
}

/// Live area display for the draft
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaReading {
    pub square_meters: f64,
    pub square_feet: f64,
}

impl AreaReading {
    pub fn from_square_meters(square_meters: f64) -> Self {
        Self {
            square_meters,
            square_feet: square_feet(square_meters),
        }
    }

    pub fn of_ring(ring: &[Coordinate]) -> Option<Self> {
        ring_area(ring).map(Self::from_square_meters)
    }

    /// e.g. `"2100.00 m²"`
    pub fn meters_label(&self) -> String {
        format!("{:.2} m²", self.square_meters)
    }

    /// e.g. `"22604.19 ft²"`
    pub fn feet_label(&self) -> String {
        format!("{:.2} ft²", self.square_feet)
    }
}
