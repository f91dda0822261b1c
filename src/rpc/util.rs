//! Shared helpers for request handlers

use crate::editor::{MapEvent, MapSnapshot};
use crate::rpc::protocol::{error_codes, Response};
use crate::rpc::state::ServerState;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize request params, or build the INVALID_PARAMS response
pub fn parse_params<T: DeserializeOwned>(
    id: Option<Value>,
    params: Option<Value>,
    expected: &str,
) -> Result<T, Response> {
    params
        .and_then(|p| serde_json::from_value(p).ok())
        .ok_or_else(|| {
            Response::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Invalid params: expected {}", expected),
            )
        })
}

/// Look up one field of an object-shaped params value
pub fn param<'a>(params: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    params.and_then(|p| p.get(key))
}

/// Apply an event and answer with its outcome plus the refreshed state
pub fn apply_event(state: &mut ServerState, id: Option<Value>, event: MapEvent) -> Response {
    let outcome = state.session.apply(event);
    let snapshot = MapSnapshot::capture(&state.session);
    let mut result = serde_json::json!({
        "status": "ok",
        "event": outcome,
        "state": snapshot,
    });
    if let Some(reason) = outcome.ignored_reason() {
        debug!("Event ignored: {}", reason);
        result["status"] = Value::from("ignored");
        result["reason"] = Value::from(reason);
    }
    Response::success(id, result)
}

/// Request id as it appears in a `BINARY:` line
pub fn id_to_string(id: &Option<Value>) -> String {
    match id {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => "null".to_string(),
    }
}
