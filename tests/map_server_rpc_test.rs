// JSON-RPC round trips through the map server dispatcher
use parcel_map::rpc::{error_codes, handle_line, ServerState};
use parcel_map::MapConfig;
use serde_json::{json, Value};

struct Client {
    state: ServerState,
    next_id: u64,
}

impl Client {
    fn new(config: MapConfig) -> Self {
        Self {
            state: ServerState::new(config),
            next_id: 1,
        }
    }

    fn call(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;
        let line = json!({"id": id, "method": method, "params": params}).to_string();
        let reply = handle_line(&mut self.state, &line).expect("every request gets a reply");
        let reply: Value = serde_json::from_str(&reply).expect("reply is JSON");
        assert_eq!(reply["id"], id);
        reply
    }

    fn result(&mut self, method: &str, params: Value) -> Value {
        let reply = self.call(method, params);
        assert!(reply.get("error").is_none(), "{} failed: {}", method, reply);
        reply["result"].clone()
    }
}

fn draw_triangle(client: &mut Client) {
    for (lon, lat) in [(72.8600, 19.3500), (72.8610, 19.3500), (72.8605, 19.3510)] {
        client.result("MapClick", json!({"lon": lon, "lat": lat}));
    }
}

#[test]
fn test_draw_save_list_reset() {
    let mut client = Client::new(MapConfig::default());
    draw_triangle(&mut client);

    let state = client.result("GetState", Value::Null);
    let draft = &state["state"]["draft"];
    assert_eq!(draft["phase"], "valid");
    assert_eq!(draft["rows"][0]["label"], "Point 1");
    assert_eq!(draft["outline"].as_array().unwrap().len(), 4);
    assert!(draft["area_labels"][0].as_str().unwrap().ends_with(" m²"));
    assert_eq!(state["viewport"]["zoom"], 15.0);

    let saved = client.result("Save", Value::Null);
    assert_eq!(saved["status"], "ok");
    assert_eq!(saved["event"]["outcome"], "saved");
    assert_eq!(saved["state"]["draft"]["phase"], "empty");

    let list = client.result("ListPolygons", Value::Null);
    assert_eq!(list["count"], 1);
    let polygon_id = list["polygons"][0]["id"].as_u64().unwrap();
    let area = &list["polygons"][0]["area"];
    let sq_m = area["square_meters"].as_f64().unwrap();
    assert_eq!(area["square_feet"].as_f64().unwrap(), sq_m * 10.7639);

    let deleted = client.result("DeletePolygon", json!({"id": polygon_id.to_string()}));
    assert_eq!(deleted["event"]["outcome"], "polygon_deleted");
    let again = client.result("DeletePolygon", json!({"id": polygon_id}));
    assert_eq!(again["status"], "ignored");

    draw_triangle(&mut client);
    client.result("Save", Value::Null);
    let reset = client.result("Reset", Value::Null);
    assert_eq!(reset["event"]["outcome"], "reset");
    assert_eq!(reset["state"]["polygons"].as_array().unwrap().len(), 0);
    assert_eq!(reset["state"]["draft"]["vertices"].as_array().unwrap().len(), 0);
}

#[test]
fn test_invalid_coordinates_are_sanitized() {
    let mut client = Client::new(MapConfig::default());
    let result = client.result("MapClick", json!({"lon": "abc", "lat": 95}));
    let vertex = &result["state"]["draft"]["vertices"][0];
    assert_eq!(vertex["longitude"], 0.0);
    assert_eq!(vertex["latitude"], 90.0);

    let result = client.result("MapClick", json!([181, -91]));
    let vertex = &result["state"]["draft"]["vertices"][1];
    assert_eq!(vertex["longitude"], 180.0);
    assert_eq!(vertex["latitude"], -90.0);
}

#[test]
fn test_inspection_with_configured_zones_and_reports() {
    let config = MapConfig::from_json_str(
        r##"{
            "initial_view_mode": "zoning_inspection",
            "zones": [{
                "id": "plot-7",
                "name": "Plot 7",
                "color": "#00aa00",
                "ring": [[0, 0], [0, 2], [2, 2], [2, 0]],
                "report": {"message": "Under review", "Zone": "R1", "FSI": null}
            }],
            "zoning_report": {"Village Name": "Bolinj", "Remarks": ""}
        }"##,
    )
    .unwrap();
    let mut client = Client::new(config);

    let zones = client.result("GetZones", Value::Null);
    assert_eq!(zones["visible"], true);
    assert_eq!(zones["zones"][0]["id"], "plot-7");

    let result = client.result("MapClick", json!({"longitude": 1, "latitude": 1}));
    assert_eq!(result["event"]["outcome"], "zone_selected");
    let selection = &result["state"]["selection"];
    assert_eq!(selection["zone_report"]["title"], "Plot 7");
    assert_eq!(selection["zone_report"]["banner"], "Under review");
    assert_eq!(selection["zone_report"]["fields"][1]["value"], "N/A");
    assert_eq!(selection["page_report"]["title"], "Zoning Report");
    assert_eq!(selection["page_report"]["fields"][1]["value"], "N/A");

    let miss = client.result("MapClick", json!({"lon": 5, "lat": 5}));
    assert_eq!(miss["status"], "ignored");
    assert_eq!(miss["state"]["selection"]["state"]["kind"], "active_zone_report");

    let cleared = client.result("ClearSelection", Value::Null);
    assert_eq!(cleared["state"]["selection"]["state"]["kind"], "none");
}

#[test]
fn test_height_and_3d_toggle() {
    let mut client = Client::new(MapConfig::default());

    let result = client.result("SetBuildingHeight", json!({"value": "250"}));
    assert_eq!(result["event"]["height"], 100.0);

    let reply = client.call("SetBuildingHeight", json!({"value": "tall"}));
    assert_eq!(reply["error"]["code"], error_codes::INVALID_PARAMS);

    let result = client.result("Toggle3D", Value::Null);
    assert_eq!(result["state"]["is_3d"], true);
    assert_eq!(result["state"]["camera"]["pitch"], 60.0);
    assert_eq!(result["state"]["camera"]["bearing"], 30.0);

    let result = client.result("Toggle3D", Value::Null);
    assert_eq!(result["state"]["camera"]["pitch"], 0.0);
}

#[test]
fn test_meshes() {
    let mut client = Client::new(MapConfig::default());
    let empty = client.result("GetMeshes", Value::Null);
    assert_eq!(empty["meshes"].as_array().unwrap().len(), 0);

    draw_triangle(&mut client);
    let all = client.result("GetMeshes", Value::Null);
    assert_eq!(all["height"], 10.0);
    let mesh = &all["meshes"][0];
    assert_eq!(mesh["id"], "draft");
    assert!(mesh["wallVertices"].as_str().is_some(), "buffers are base64 strings");

    let one = client.result("GetMeshes", json!({"id": "draft"}));
    assert_eq!(one["meshes"].as_array().unwrap().len(), 1);

    let reply = client.call("GetMeshes", json!({"id": 12345}));
    assert_eq!(reply["error"]["code"], error_codes::MESH_NOT_FOUND);
}
