//! Footprint extrusion
//!
//! Pure and deterministic: the same footprint and height always give the
//! same mesh, so it is rebuilt freely on every render.

use crate::geometry::{distinct_vertices, Coordinate, Point3};
use serde::Serialize;

pub const MIN_HEIGHT: f64 = 1.0;
pub const MAX_HEIGHT: f64 = 100.0;

/// Clamp into [MIN_HEIGHT, MAX_HEIGHT]; non-finite input falls back to the minimum
pub fn clamp_height(height: f64) -> f64 {
    if height.is_finite() {
        height.clamp(MIN_HEIGHT, MAX_HEIGHT)
    } else {
        MIN_HEIGHT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtrusionMesh {
    pub height: f64,
    /// One quad per footprint edge: `[p1@0, p2@0, p2@h, p1@h]`
    pub walls: Vec<[Point3; 4]>,
    /// Footprint at roof height, same vertex order, implicitly closed
    pub roof: Vec<Point3>,
    /// One vertical segment per footprint vertex
    pub edges: Vec<[Point3; 2]>,
}

/// Build walls/roof/edges for a footprint. Open or closed rings are both
/// accepted; `None` when there are fewer than 3 distinct vertices.
pub fn build_extrusion(footprint: &[Coordinate], height: f64) -> Option<ExtrusionMesh> {
    let vertices = distinct_vertices(footprint);
    if vertices.len() < 3 {
        return None;
    }
    let height = clamp_height(height);
    let n = vertices.len();

    let walls = (0..n)
        .map(|i| {
            let p1 = vertices[i];
            let p2 = vertices[(i + 1) % n];
            [
                p1.at_elevation(0.0),
                p2.at_elevation(0.0),
                p2.at_elevation(height),
                p1.at_elevation(height),
            ]
        })
        .collect();

    let roof = vertices.iter().map(|c| c.at_elevation(height)).collect();

    let edges = vertices
        .iter()
        .map(|c| [c.at_elevation(0.0), c.at_elevation(height)])
        .collect();

    Some(ExtrusionMesh {
        height,
        walls,
        roof,
        edges,
    })
}
