//! Serializable view of a session for the rendering layer

use super::draft::{DraftPhase, VertexRow};
use super::selection::{SelectionState, ViewMode};
use super::session::MapSession;
use super::store::SavedPolygon;
use crate::geometry::{AreaReading, Coordinate};
use crate::zones::ReportView;
use serde::Serialize;

/// Camera hint: tilted in 3D, flat in 2D
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraTilt {
    pub pitch: f64,
    pub bearing: f64,
}

impl CameraTilt {
    pub fn for_view(is_3d: bool) -> Self {
        if is_3d {
            Self { pitch: 60.0, bearing: 30.0 }
        } else {
            Self { pitch: 0.0, bearing: 0.0 }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftSnapshot {
    pub phase: DraftPhase,
    pub vertices: Vec<Coordinate>,
    pub rows: Vec<VertexRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<Coordinate>>,
    /// Absent below 3 vertices
    pub area: Option<AreaReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_labels: Option<[String; 2]>,
    pub can_save: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionSnapshot {
    pub state: SelectionState,
    /// The selected zone's own report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_report: Option<ReportView>,
    /// The inspection mode's page report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_report: Option<ReportView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<SavedPolygon>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapSnapshot {
    pub mode: ViewMode,
    pub zones_visible: bool,
    pub selection: SelectionSnapshot,
    pub draft: DraftSnapshot,
    pub polygons: Vec<SavedPolygon>,
    pub building_height: f64,
    pub is_3d: bool,
    pub camera: CameraTilt,
}

impl MapSnapshot {
    pub fn capture(session: &MapSession) -> Self {
        let editor = session.editor();
        let area = editor.area();
        let draft = DraftSnapshot {
            phase: editor.phase(),
            vertices: editor.vertices().to_vec(),
            rows: editor.vertex_rows(),
            outline: editor.outline(),
            area,
            area_labels: area.map(|a| [a.meters_label(), a.feet_label()]),
            can_save: editor.can_save(),
        };

        Self {
            mode: session.mode(),
            zones_visible: session.zones_visible(),
            selection: capture_selection(session),
            draft,
            polygons: session.store().list().to_vec(),
            building_height: session.building_height(),
            is_3d: session.is_3d(),
            camera: CameraTilt::for_view(session.is_3d()),
        }
    }
}

fn capture_selection(session: &MapSession) -> SelectionSnapshot {
    let state = session.selection().clone();
    let mut snapshot = SelectionSnapshot {
        state,
        zone_report: None,
        page_report: None,
        polygon: None,
    };

    match session.selection() {
        SelectionState::ActiveZoneReport { zone_id, report } => {
            let title = session
                .zones()
                .get(zone_id)
                .map(|z| z.name.clone())
                .unwrap_or_else(|| zone_id.clone());
            snapshot.zone_report = Some(ReportView::render(title, report));
            snapshot.page_report = session
                .mode()
                .report_title()
                .zip(session.page_report())
                .map(|(title, report)| ReportView::render(title, report));
        }
        SelectionState::ActiveSavedPolygon { id } => {
            snapshot.polygon = session.store().get(*id).cloned();
        }
        SelectionState::None => {}
    }

    snapshot
}
