//! Saved polygon operations: DeletePolygon, ListPolygons

use crate::editor::{MapEvent, PolygonId};
use crate::geometry::AreaReading;
use crate::rpc::protocol::{error_codes, Response};
use crate::rpc::state::ServerState;
use crate::rpc::util::{apply_event, param};
use serde_json::Value;

/// Ids are accepted as JSON numbers or, for convenience, numeric strings
fn parse_polygon_id(value: Option<&Value>) -> Option<PolygonId> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Handle DeletePolygon request - `{id}`; unknown ids are ignored
pub fn handle_delete_polygon(
    state: &mut ServerState,
    id: Option<Value>,
    params: Option<Value>,
) -> Response {
    match parse_polygon_id(param(params.as_ref(), "id")) {
        Some(polygon_id) => apply_event(state, id, MapEvent::DeletePolygon(polygon_id)),
        None => Response::error(
            id,
            error_codes::INVALID_PARAMS,
            "Invalid params: expected {id: integer}".to_string(),
        ),
    }
}

/// Handle ListPolygons request - saved polygons in creation order
pub fn handle_list_polygons(state: &ServerState, id: Option<Value>) -> Response {
    let polygons: Vec<Value> = state
        .session
        .store()
        .list()
        .iter()
        .map(|p| {
            let reading = AreaReading::from_square_meters(p.area());
            serde_json::json!({
                "id": p.id(),
                "ring": p.ring(),
                "area": reading,
                "area_labels": [reading.meters_label(), reading.feet_label()],
            })
        })
        .collect();

    Response::success(
        id,
        serde_json::json!({
            "count": polygons.len(),
            "polygons": polygons,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_polygon_id_accepts_numbers_and_strings() {
        assert_eq!(parse_polygon_id(Some(&serde_json::json!(1700000000123u64))), Some(1700000000123));
        assert_eq!(parse_polygon_id(Some(&serde_json::json!(" 42 "))), Some(42));
        assert_eq!(parse_polygon_id(Some(&serde_json::json!(-1))), None);
        assert_eq!(parse_polygon_id(Some(&serde_json::json!(true))), None);
        assert_eq!(parse_polygon_id(None), None);
    }
}
