//! Drawing operations: MapClick, VertexDragEnd, SetBuildingHeight, Save, Reset

use crate::editor::MapEvent;
use crate::geometry::{parse_component, validate_coordinate};
use crate::rpc::protocol::{error_codes, Response};
use crate::rpc::state::ServerState;
use crate::rpc::util::{apply_event, param};
use serde_json::Value;

/// Handle MapClick request - `{lon, lat}` (also `longitude`/`lng`/`latitude`).
/// Unusable coordinates are sanitized, never rejected.
pub fn handle_map_click(
    state: &mut ServerState,
    id: Option<Value>,
    params: Option<Value>,
) -> Response {
    let point = validate_coordinate(params.as_ref().unwrap_or(&Value::Null));
    apply_event(state, id, MapEvent::MapClick(point))
}

/// Handle VertexDragEnd request - `{index, lon, lat}`
pub fn handle_vertex_drag_end(
    state: &mut ServerState,
    id: Option<Value>,
    params: Option<Value>,
) -> Response {
    // Negative indices fall through as out of range
    let index = match param(params.as_ref(), "index").and_then(Value::as_i64) {
        Some(i) => usize::try_from(i).unwrap_or(usize::MAX),
        None => {
            return Response::error(
                id,
                error_codes::INVALID_PARAMS,
                "Invalid params: expected {index: integer, lon: number, lat: number}".to_string(),
            );
        }
    };
    let coordinate = validate_coordinate(params.as_ref().unwrap_or(&Value::Null));
    apply_event(state, id, MapEvent::VertexDragEnd { index, coordinate })
}

/// Handle SetBuildingHeight request - `{value}`, clamped to [1, 100]
pub fn handle_set_building_height(
    state: &mut ServerState,
    id: Option<Value>,
    params: Option<Value>,
) -> Response {
    match parse_component(param(params.as_ref(), "value")) {
        Some(value) => apply_event(state, id, MapEvent::SetBuildingHeight(value)),
        None => Response::error(
            id,
            error_codes::INVALID_PARAMS,
            "Invalid params: expected {value: number}".to_string(),
        ),
    }
}

pub fn handle_save(state: &mut ServerState, id: Option<Value>) -> Response {
    apply_event(state, id, MapEvent::Save)
}

/// Handle Reset request - drops the draft and every saved polygon
pub fn handle_reset(state: &mut ServerState, id: Option<Value>) -> Response {
    apply_event(state, id, MapEvent::Reset)
}
