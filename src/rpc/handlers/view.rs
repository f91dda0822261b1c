//! View operations: ToggleViewMode, SetViewMode, Toggle3D, ClearSelection

use crate::editor::{MapEvent, ViewMode};
use crate::rpc::protocol::Response;
use crate::rpc::state::ServerState;
use crate::rpc::util::{apply_event, parse_params};
use serde::Deserialize;
use serde_json::Value;

/// Handle ToggleViewMode request - Zoning → Property → FreeDrawing → Zoning
pub fn handle_toggle_view_mode(state: &mut ServerState, id: Option<Value>) -> Response {
    apply_event(state, id, MapEvent::ToggleViewMode)
}

/// Handle SetViewMode request - `{mode: "zoning_inspection" | "property_inspection" | "free_drawing"}`
pub fn handle_set_view_mode(
    state: &mut ServerState,
    id: Option<Value>,
    params: Option<Value>,
) -> Response {
    #[derive(Deserialize)]
    struct SetViewModeParams {
        mode: ViewMode,
    }

    let params: SetViewModeParams = match parse_params(
        id.clone(),
        params,
        "{mode: \"zoning_inspection\" | \"property_inspection\" | \"free_drawing\"}",
    ) {
        Ok(p) => p,
        Err(response) => return response,
    };

    apply_event(state, id, MapEvent::SetViewMode(params.mode))
}

pub fn handle_toggle_3d(state: &mut ServerState, id: Option<Value>) -> Response {
    apply_event(state, id, MapEvent::Toggle3D)
}

pub fn handle_clear_selection(state: &mut ServerState, id: Option<Value>) -> Response {
    apply_event(state, id, MapEvent::ClearSelection)
}
