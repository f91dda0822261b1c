//! Ring primitives: closing, containment, bounds
//!
//! Every hit test in the crate (zones and saved polygons) goes through
//! `point_in_polygon`.

use super::types::Coordinate;

/// True when the ring has at least two points and its last point repeats the first
pub fn is_closed(ring: &[Coordinate]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => ring.len() >= 2 && first == last,
        _ => false,
    }
}

/// Append the first vertex to the end of the ring.
/// No-op when already closed or when there are fewer than 3 vertices.
pub fn close_ring(ring: &[Coordinate]) -> Vec<Coordinate> {
    let mut closed = ring.to_vec();
    if ring.len() >= 3 && !is_closed(ring) {
        closed.push(ring[0]);
    }
    closed
}

/// The ring without its closing duplicate, if it has one
pub fn distinct_vertices(ring: &[Coordinate]) -> &[Coordinate] {
    if is_closed(ring) {
        &ring[..ring.len() - 1]
    } else {
        ring
    }
}

/// Even-odd ray casting.
///
/// Works on open or closed rings (a closing duplicate contributes a
/// zero-length edge that never straddles). The result for a point lying
/// exactly on a vertex or edge is not defined.
pub fn point_in_polygon(point: Coordinate, ring: &[Coordinate]) -> bool {
    let (lng, lat) = (point.longitude, point.latitude);
    let n = ring.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (ring[i].longitude, ring[i].latitude);
        let (xj, yj) = (ring[j].longitude, ring[j].latitude);
        let intersect = (yi > lat) != (yj > lat)
            && lng < (xj - xi) * (lat - yi) / (yj - yi) + xi;
        if intersect {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// `[min_lon, min_lat, max_lon, max_lat]`, or `None` for an empty ring
pub fn ring_bounds(ring: &[Coordinate]) -> Option<[f64; 4]> {
    let first = ring.first()?;
    let init = [first.longitude, first.latitude, first.longitude, first.latitude];
    Some(ring.iter().fold(init, |b, c| {
        [
            b[0].min(c.longitude),
            b[1].min(c.latitude),
            b[2].max(c.longitude),
            b[3].max(c.latitude),
        ]
    }))
}
