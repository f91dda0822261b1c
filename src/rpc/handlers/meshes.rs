//! Extrusion mesh operations: GetMeshes, GetMeshesBinary

use crate::mesh::{serialize_meshes_binary, MeshBuffers};
use crate::rpc::protocol::{error_codes, Response};
use crate::rpc::state::ServerState;
use crate::rpc::util::{id_to_string, param};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use log::{debug, info};
use serde_json::Value;
use std::time::Instant;

/// Handle GetMeshes request - every mesh, or one when `{id}` is given
/// (`"draft"` or a saved polygon id)
pub fn handle_get_meshes(state: &ServerState, id: Option<Value>, params: Option<Value>) -> Response {
    let session = &state.session;

    let meshes: Vec<MeshBuffers> = match param(params.as_ref(), "id") {
        Some(requested) => {
            let mesh_id = match requested {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            match session.mesh_for(&mesh_id) {
                Some(mesh) => vec![MeshBuffers::from_mesh(mesh_id, &mesh)],
                None => {
                    return Response::error(
                        id,
                        error_codes::MESH_NOT_FOUND,
                        format!("Mesh not found: {}", mesh_id),
                    );
                }
            }
        }
        None => {
            let start = Instant::now();
            let meshes = session.meshes();
            debug!("Built {} meshes in {:.2?}", meshes.len(), start.elapsed());
            meshes
        }
    };

    Response::from_serializable(
        id,
        &serde_json::json!({
            "height": session.building_height(),
            "is_3d": session.is_3d(),
            "meshes": meshes,
        }),
    )
}

/// Handle GetMeshesBinary request. Returns a raw protocol line,
/// `BINARY:<id>:<base64 payload>`, instead of a JSON response.
pub fn handle_get_meshes_binary(state: &ServerState, id: Option<Value>) -> String {
    let start = Instant::now();
    let meshes = state.session.meshes();
    let binary_data = serialize_meshes_binary(&meshes);

    info!(
        "Binary mesh batch: {} meshes, {} bytes in {:.2?}",
        meshes.len(),
        binary_data.len(),
        start.elapsed()
    );

    format!("BINARY:{}:{}", id_to_string(&id), BASE64.encode(&binary_data))
}
