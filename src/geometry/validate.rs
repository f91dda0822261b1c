//! Coordinate sanitizing
//!
//! Map events come from an untyped boundary. Nothing here ever fails: a
//! component that is missing or not a finite number becomes `0`, and the
//! result is clamped into the valid geographic ranges.

use super::types::Coordinate;
use log::{debug, warn};
use serde_json::Value;

pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Outcome of sanitizing one coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sanitized {
    pub coordinate: Coordinate,
    /// A component was absent or non-finite and replaced with 0
    pub substituted: bool,
    /// A component was finite but out of range
    pub clamped: bool,
}

/// Read a numeric-like JSON value. Returns `None` when the value cannot be
/// read as a finite number.
///
/// Numbers pass through, strings are parsed after trimming (an empty string
/// reads as `0`), booleans read as `1`/`0`.
pub fn parse_component(raw: Option<&Value>) -> Option<f64> {
    let parsed = match raw? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Clamp a pair of raw floats into a valid coordinate
pub fn sanitize(longitude: f64, latitude: f64) -> Sanitized {
    let mut substituted = false;
    let mut finite = |v: f64| {
        if v.is_finite() {
            v
        } else {
            substituted = true;
            0.0
        }
    };
    let lon = finite(longitude);
    let lat = finite(latitude);

    let coordinate = Coordinate::new(
        lon.clamp(MIN_LONGITUDE, MAX_LONGITUDE),
        lat.clamp(MIN_LATITUDE, MAX_LATITUDE),
    );
    let clamped = coordinate.longitude != lon || coordinate.latitude != lat;

    Sanitized { coordinate, substituted, clamped }
}

/// Sanitize separately supplied longitude/latitude values
pub fn validate_parts(longitude: Option<&Value>, latitude: Option<&Value>) -> Coordinate {
    let lon = parse_component(longitude);
    let lat = parse_component(latitude);
    let mut result = sanitize(lon.unwrap_or(0.0), lat.unwrap_or(0.0));
    result.substituted |= lon.is_none() || lat.is_none();
    report(&result, longitude, latitude);
    result.coordinate
}

/// Sanitize an arbitrary value into a coordinate.
///
/// Accepts `{longitude, latitude}`, `{lon, lat}`, `{lng, lat}` objects and
/// `[lon, lat]` arrays. Anything else becomes `(0, 0)`.
pub fn validate_coordinate(raw: &Value) -> Coordinate {
    match raw {
        Value::Object(map) => {
            let lon = map
                .get("longitude")
                .or_else(|| map.get("lon"))
                .or_else(|| map.get("lng"));
            let lat = map.get("latitude").or_else(|| map.get("lat"));
            validate_parts(lon, lat)
        }
        Value::Array(items) => validate_parts(items.first(), items.get(1)),
        other => {
            warn!("Coordinate input is not an object or pair, using origin: {}", other);
            Coordinate::ORIGIN
        }
    }
}

fn report(result: &Sanitized, longitude: Option<&Value>, latitude: Option<&Value>) {
    if result.substituted {
        warn!(
            "Malformed coordinate (lon={:?}, lat={:?}), substituted ({}, {})",
            longitude, latitude, result.coordinate.longitude, result.coordinate.latitude
        );
    } else if result.clamped {
        debug!(
            "Clamped coordinate into range: ({}, {})",
            result.coordinate.longitude, result.coordinate.latitude
        );
    }
}
