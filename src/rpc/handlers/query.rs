//! Read-only queries and lifecycle: GetState, GetZones, Close

use crate::editor::MapSnapshot;
use crate::rpc::protocol::Response;
use crate::rpc::state::ServerState;
use log::info;
use serde_json::Value;

/// Handle GetState request - full snapshot plus the configured viewport
pub fn handle_get_state(state: &ServerState, id: Option<Value>) -> Response {
    Response::from_serializable(
        id,
        &serde_json::json!({
            "state": MapSnapshot::capture(&state.session),
            "viewport": state.config.viewport,
        }),
    )
}

/// Handle GetZones request - zone overlays and whether they are drawn
pub fn handle_get_zones(state: &ServerState, id: Option<Value>) -> Response {
    Response::from_serializable(
        id,
        &serde_json::json!({
            "visible": state.session.zones_visible(),
            "zones": state.session.zones().zones(),
        }),
    )
}

/// Handle Close request - the server loop exits after replying
pub fn handle_close(state: &mut ServerState, id: Option<Value>) -> Response {
    info!(
        "Close requested with {} saved polygons in memory",
        state.session.store().len()
    );
    state.shutdown_requested = true;
    Response::success(id, serde_json::json!({"status": "ok"}))
}
