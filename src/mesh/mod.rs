//! Extrusion geometry for the 3D view
//!
//! Turns a 2D footprint and a building height into walls, a roof and
//! vertical edges, then flattens that into GPU buffers.
//!
//! # Submodules
//! - `extrude` - Footprint + height → ExtrusionMesh (pure)
//! - `buffers` - Vertex/index buffers, roof triangulation, base64 JSON
//! - `binary` - Binary transport of mesh buffers

mod extrude;
mod buffers;
mod binary;

pub use extrude::{
    MIN_HEIGHT,
    MAX_HEIGHT,
    ExtrusionMesh,
    build_extrusion,
    clamp_height,
};

pub use buffers::{
    MeshBuffers,
    build_mesh_batch,
    serialize_f32_vec_base64,
    serialize_u32_vec_base64,
};

pub use binary::{
    MESH_MAGIC,
    serialize_meshes_binary,
};
