//! Map server module - line-delimited JSON-RPC front end for a `MapSession`
//!
//! One request per line in, one response per line out. The rendering layer
//! forwards clicks, drags and control actions here and draws whatever state
//! comes back.
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Server state management
//! - `util` - Param parsing and event application helpers
//! - `handlers` - Request handlers organized by functionality

pub mod handlers;
pub mod protocol;
pub mod state;
pub mod util;

// Re-export key types for convenience
pub use protocol::{error_codes, ErrorResponse, Request, Response};
pub use state::ServerState;

use log::{debug, warn};

/// Route one request to its handler and return the reply line
pub fn dispatch(state: &mut ServerState, request: Request) -> String {
    let Request { id, method, params } = request;
    debug!("Request {}", method);

    let response = match method.as_str() {
        "MapClick" => handlers::handle_map_click(state, id, params),
        "VertexDragEnd" => handlers::handle_vertex_drag_end(state, id, params),
        "SetBuildingHeight" => handlers::handle_set_building_height(state, id, params),
        "Save" => handlers::handle_save(state, id),
        "Reset" => handlers::handle_reset(state, id),
        "DeletePolygon" => handlers::handle_delete_polygon(state, id, params),
        "ToggleViewMode" => handlers::handle_toggle_view_mode(state, id),
        "SetViewMode" => handlers::handle_set_view_mode(state, id, params),
        "Toggle3D" => handlers::handle_toggle_3d(state, id),
        "ClearSelection" => handlers::handle_clear_selection(state, id),
        "GetState" => handlers::handle_get_state(state, id),
        "GetZones" => handlers::handle_get_zones(state, id),
        "ListPolygons" => handlers::handle_list_polygons(state, id),
        "GetMeshes" => handlers::handle_get_meshes(state, id, params),
        "GetMeshesBinary" => return handlers::handle_get_meshes_binary(state, id),
        "Close" => handlers::handle_close(state, id),
        _ => {
            warn!("Unknown method: {}", method);
            Response::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", method),
            )
        }
    };

    response.to_line()
}

/// Parse one input line and dispatch it. Blank lines produce no reply.
pub fn handle_line(state: &mut ServerState, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            warn!("Unparseable request line: {}", e);
            return Some(
                Response::error(None, error_codes::PARSE_ERROR, format!("Parse error: {}", e))
                    .to_line(),
            );
        }
    };

    let request_id = value.get("id").cloned();
    match serde_json::from_value::<Request>(value) {
        Ok(request) => Some(dispatch(state, request)),
        Err(e) => Some(
            Response::error(
                request_id,
                error_codes::INVALID_REQUEST,
                format!("Invalid request: {}", e),
            )
            .to_line(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn call(state: &mut ServerState, method: &str, params: Value) -> Value {
        let line = json!({"id": 1, "method": method, "params": params}).to_string();
        let reply = handle_line(state, &line).unwrap();
        serde_json::from_str(&reply).unwrap()
    }

    #[test]
    fn test_blank_line_has_no_reply() {
        let mut state = ServerState::default();
        assert!(handle_line(&mut state, "   ").is_none());
    }

    #[test]
    fn test_parse_error() {
        let mut state = ServerState::default();
        let reply: Value = serde_json::from_str(&handle_line(&mut state, "{not json").unwrap()).unwrap();
        assert_eq!(reply["error"]["code"], error_codes::PARSE_ERROR);
        assert!(reply["id"].is_null());
    }

    #[test]
    fn test_invalid_request_keeps_id() {
        let mut state = ServerState::default();
        let reply: Value = serde_json::from_str(&handle_line(&mut state, r#"{"id": 7}"#).unwrap()).unwrap();
        assert_eq!(reply["error"]["code"], error_codes::INVALID_REQUEST);
        assert_eq!(reply["id"], 7);
    }

    #[test]
    fn test_unknown_method() {
        let mut state = ServerState::default();
        let reply = call(&mut state, "Frobnicate", Value::Null);
        assert_eq!(reply["error"]["code"], error_codes::METHOD_NOT_FOUND);
    }

    #[test]
    fn test_click_with_string_coordinates() {
        let mut state = ServerState::default();
        let reply = call(&mut state, "MapClick", json!({"lon": "72.86", "lat": "19.35"}));
        assert_eq!(reply["result"]["status"], "ok");
        assert_eq!(reply["result"]["event"]["outcome"], "vertex_added");
        assert_eq!(reply["result"]["state"]["draft"]["vertices"][0]["longitude"], 72.86);
    }

    #[test]
    fn test_short_save_is_ignored_not_an_error() {
        let mut state = ServerState::default();
        call(&mut state, "MapClick", json!({"lon": 72.86, "lat": 19.35}));
        let reply = call(&mut state, "Save", Value::Null);
        assert!(reply.get("error").is_none());
        assert_eq!(reply["result"]["status"], "ignored");
        assert!(reply["result"]["reason"].as_str().unwrap().contains("3 vertices"));
        assert_eq!(reply["result"]["state"]["draft"]["vertices"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_drag_requires_index() {
        let mut state = ServerState::default();
        let reply = call(&mut state, "VertexDragEnd", json!({"lon": 1, "lat": 1}));
        assert_eq!(reply["error"]["code"], error_codes::INVALID_PARAMS);

        let reply = call(&mut state, "VertexDragEnd", json!({"index": -1, "lon": 1, "lat": 1}));
        assert_eq!(reply["result"]["status"], "ignored");
    }

    #[test]
    fn test_set_view_mode_validates_mode() {
        let mut state = ServerState::default();
        let reply = call(&mut state, "SetViewMode", json!({"mode": "satellite"}));
        assert_eq!(reply["error"]["code"], error_codes::INVALID_PARAMS);

        let reply = call(&mut state, "SetViewMode", json!({"mode": "zoning_inspection"}));
        assert_eq!(reply["result"]["event"]["mode"], "zoning_inspection");
        assert_eq!(reply["result"]["state"]["zones_visible"], true);
    }

    #[test]
    fn test_binary_meshes_line() {
        let mut state = ServerState::default();
        for (lon, lat) in [(72.86, 19.35), (72.861, 19.35), (72.8605, 19.351)] {
            call(&mut state, "MapClick", json!({"lon": lon, "lat": lat}));
        }
        let line = json!({"id": 9, "method": "GetMeshesBinary"}).to_string();
        let reply = handle_line(&mut state, &line).unwrap();
        assert!(reply.starts_with("BINARY:9:"));
    }

    #[test]
    fn test_close_sets_shutdown() {
        let mut state = ServerState::default();
        let reply = call(&mut state, "Close", Value::Null);
        assert_eq!(reply["result"]["status"], "ok");
        assert!(state.shutdown_requested);
    }
}
