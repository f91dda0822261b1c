//! GPU buffers for extruded footprints
//!
//! Positions are stored relative to the footprint's first vertex so they
//! survive the trip to f32 without losing sub-meter precision. Buffers go
//! over JSON as base64 `Float32Array`/`Uint32Array` payloads.

use super::extrude::{build_extrusion, ExtrusionMesh};
use crate::geometry::{Coordinate, Point3};
use base64::{engine::general_purpose, Engine as _};
use rayon::prelude::*;
use serde::{Serialize, Serializer};

/// Serialize Vec<f32> as base64 of its little-endian bytes
pub fn serialize_f32_vec_base64<S>(data: &[f32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

/// Serialize Vec<u32> as base64 of its little-endian bytes
pub fn serialize_u32_vec_base64<S>(data: &[u32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

/// Renderable buffers for one extruded polygon
#[derive(Debug, Clone, Serialize)]
pub struct MeshBuffers {
    pub id: String,
    /// `[lon, lat]` subtracted from every x/y below
    pub origin: [f64; 2],
    pub height: f32,

    /// xyz triplets, 4 per wall quad
    #[serde(rename = "wallVertices", serialize_with = "serialize_f32_vec_base64")]
    pub wall_vertices: Vec<f32>,
    /// Two triangles per quad
    #[serde(rename = "wallIndices", serialize_with = "serialize_u32_vec_base64")]
    pub wall_indices: Vec<u32>,

    #[serde(rename = "roofVertices", serialize_with = "serialize_f32_vec_base64")]
    pub roof_vertices: Vec<f32>,
    #[serde(rename = "roofIndices", serialize_with = "serialize_u32_vec_base64")]
    pub roof_indices: Vec<u32>,

    /// xyz pairs forming a line list
    #[serde(rename = "edgeVertices", serialize_with = "serialize_f32_vec_base64")]
    pub edge_vertices: Vec<f32>,
}

impl MeshBuffers {
    pub fn from_mesh(id: impl Into<String>, mesh: &ExtrusionMesh) -> Self {
        let origin = mesh.roof.first().map(|p| [p.x, p.y]).unwrap_or([0.0, 0.0]);
        let push = |out: &mut Vec<f32>, p: &Point3| {
            out.push((p.x - origin[0]) as f32);
            out.push((p.y - origin[1]) as f32);
            out.push(p.z as f32);
        };

        let mut wall_vertices = Vec::with_capacity(mesh.walls.len() * 12);
        let mut wall_indices = Vec::with_capacity(mesh.walls.len() * 6);
        for (i, quad) in mesh.walls.iter().enumerate() {
            for p in quad {
                push(&mut wall_vertices, p);
            }
            let base = (i * 4) as u32;
            wall_indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        let mut roof_vertices = Vec::with_capacity(mesh.roof.len() * 3);
        for p in &mesh.roof {
            push(&mut roof_vertices, p);
        }
        let roof_indices = triangulate_roof(&mesh.roof, origin);

        let mut edge_vertices = Vec::with_capacity(mesh.edges.len() * 6);
        for [bottom, top] in &mesh.edges {
            push(&mut edge_vertices, bottom);
            push(&mut edge_vertices, top);
        }

        Self {
            id: id.into(),
            origin,
            height: mesh.height as f32,
            wall_vertices,
            wall_indices,
            roof_vertices,
            roof_indices,
            edge_vertices,
        }
    }

    pub fn wall_count(&self) -> usize {
        self.wall_vertices.len() / 12
    }

    pub fn roof_vertex_count(&self) -> usize {
        self.roof_vertices.len() / 3
    }

    pub fn edge_count(&self) -> usize {
        self.edge_vertices.len() / 6
    }
}

/// Earcut the roof outline in footprint-local coordinates
fn triangulate_roof(roof: &[Point3], origin: [f64; 2]) -> Vec<u32> {
    let flat_coords: Vec<f64> = roof
        .iter()
        .flat_map(|p| [p.x - origin[0], p.y - origin[1]])
        .collect();
    let indices = earcutr::earcut(&flat_coords, &[], 2);
    indices.unwrap_or_default().into_iter().map(|i| i as u32).collect()
}

/// Extrude many footprints in parallel. Output keeps input order and skips
/// degenerate footprints.
pub fn build_mesh_batch(footprints: &[(String, Vec<Coordinate>)], height: f64) -> Vec<MeshBuffers> {
    footprints
        .par_iter()
        .filter_map(|(id, ring)| {
            build_extrusion(ring, height).map(|mesh| MeshBuffers::from_mesh(id.clone(), &mesh))
        })
        .collect()
}
