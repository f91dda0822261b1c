//! Binary serialization for mesh buffers
//!
//! Compact alternative to the base64 JSON form, laid out so the receiver
//! can take `Float32Array`/`Uint32Array` views without copying.

use super::buffers::MeshBuffers;

pub const MESH_MAGIC: &[u8; 8] = b"PMAPMESH";

/// Format: [magic: 8][mesh_count: u32][mesh0][mesh1]...
///
/// Each mesh:
/// `id_len(u32) + id + padding to 4 bytes`,
/// `origin (2 x f64)`, `height (f32)`,
/// `wall_vertex_floats, wall_index_count, roof_vertex_floats, roof_index_count, edge_vertex_floats` (5 x u32),
/// then the raw little-endian arrays in the same order.
pub fn serialize_meshes_binary(meshes: &[MeshBuffers]) -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(MESH_MAGIC);
    buffer.extend_from_slice(&(meshes.len() as u32).to_le_bytes());

    for mesh in meshes {
        let id_bytes = mesh.id.as_bytes();
        buffer.extend_from_slice(&(id_bytes.len() as u32).to_le_bytes());
        buffer.extend_from_slice(id_bytes);
        let id_padding = (4 - (id_bytes.len() % 4)) % 4;
        buffer.resize(buffer.len() + id_padding, 0);

        for &o in &mesh.origin {
            buffer.extend_from_slice(&o.to_le_bytes());
        }
        buffer.extend_from_slice(&mesh.height.to_le_bytes());

        for len in [
            mesh.wall_vertices.len(),
            mesh.wall_indices.len(),
            mesh.roof_vertices.len(),
            mesh.roof_indices.len(),
            mesh.edge_vertices.len(),
        ] {
            buffer.extend_from_slice(&(len as u32).to_le_bytes());
        }

        write_f32s(&mut buffer, &mesh.wall_vertices);
        write_u32s(&mut buffer, &mesh.wall_indices);
        write_f32s(&mut buffer, &mesh.roof_vertices);
        write_u32s(&mut buffer, &mesh.roof_indices);
        write_f32s(&mut buffer, &mesh.edge_vertices);
    }

    buffer
}

fn write_f32s(buffer: &mut Vec<u8>, values: &[f32]) {
    for &v in values {
        buffer.extend_from_slice(&v.to_le_bytes());
    }
}

fn write_u32s(buffer: &mut Vec<u8>, values: &[u32]) {
    for &v in values {
        buffer.extend_from_slice(&v.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use crate::mesh::build_extrusion;

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
    }

    #[test]
    fn test_header_and_layout() {
        let ring = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(0.0, 1.0),
        ];
        let mesh = MeshBuffers::from_mesh("abc", &build_extrusion(&ring, 10.0).unwrap());
        let bytes = serialize_meshes_binary(std::slice::from_ref(&mesh));

        assert_eq!(&bytes[..8], MESH_MAGIC);
        assert_eq!(read_u32(&bytes, 8), 1);
        assert_eq!(read_u32(&bytes, 12), 3);
        assert_eq!(&bytes[16..19], b"abc");
        // id padded to 4 bytes, then 16 bytes origin + 4 bytes height
        let counts_at = 20 + 16 + 4;
        assert_eq!(read_u32(&bytes, counts_at) as usize, mesh.wall_vertices.len());
        assert_eq!(read_u32(&bytes, counts_at + 16) as usize, mesh.edge_vertices.len());

        let payload = mesh.wall_vertices.len()
            + mesh.wall_indices.len()
            + mesh.roof_vertices.len()
            + mesh.roof_indices.len()
            + mesh.edge_vertices.len();
        assert_eq!(bytes.len(), counts_at + 20 + payload * 4);
        assert_eq!(bytes.len() % 4, 0);
    }

    #[test]
    fn test_empty_batch() {
        let bytes = serialize_meshes_binary(&[]);
        assert_eq!(bytes.len(), 12);
        assert_eq!(read_u32(&bytes, 8), 0);
    }
}
