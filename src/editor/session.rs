//! Map session: applies input events to the editing state
//!
//! Every event is a total function of the current state. Nothing here
//! returns an error; events that cannot apply come back as
//! `EventOutcome::Ignored` with the state untouched.

use super::draft::{PolygonEditor, SaveOutcome};
use super::selection::{resolve_click, ClickResolution, SelectionState, ViewMode};
use super::store::{PolygonId, SavedPolygonStore};
use crate::config::MapConfig;
use crate::geometry::Coordinate;
use crate::mesh::{build_extrusion, build_mesh_batch, clamp_height, ExtrusionMesh, MeshBuffers};
use crate::zones::{PageReports, Report, ZoneIndex};
use log::{debug, info};
use serde::Serialize;

/// Mesh id under which the draft is rendered
pub const DRAFT_MESH_ID: &str = "draft";

/// Discrete input event, coordinates already sanitized
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    MapClick(Coordinate),
    VertexDragEnd { index: usize, coordinate: Coordinate },
    SetBuildingHeight(f64),
    Save,
    Reset,
    DeletePolygon(PolygonId),
    ToggleViewMode,
    SetViewMode(ViewMode),
    Toggle3D,
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    ZoneSelected { zone_id: String },
    PolygonSelected { id: PolygonId },
    VertexAdded { index: usize },
    VertexMoved { index: usize },
    Saved { id: PolygonId, area: f64 },
    SaveRejected { vertex_count: usize },
    Reset,
    PolygonDeleted { id: PolygonId },
    HeightChanged { height: f64 },
    ModeChanged { mode: ViewMode },
    ViewToggled { is_3d: bool },
    SelectionCleared,
    Ignored { reason: String },
}

impl EventOutcome {
    fn ignored(reason: impl Into<String>) -> Self {
        EventOutcome::Ignored { reason: reason.into() }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventOutcome::Ignored { .. } | EventOutcome::SaveRejected { .. })
    }

    /// Why the event left the state untouched, if it did
    pub fn ignored_reason(&self) -> Option<String> {
        match self {
            EventOutcome::Ignored { reason } => Some(reason.clone()),
            EventOutcome::SaveRejected { vertex_count } => Some(format!(
                "a polygon needs at least 3 vertices, draft has {}",
                vertex_count
            )),
            _ => None,
        }
    }
}

pub struct MapSession {
    zones: ZoneIndex,
    page_reports: PageReports,
    editor: PolygonEditor,
    store: SavedPolygonStore,
    mode: ViewMode,
    selection: SelectionState,
    building_height: f64,
    is_3d: bool,
}

impl MapSession {
    pub fn new(zones: ZoneIndex) -> Self {
        Self {
            zones,
            page_reports: PageReports::default(),
            editor: PolygonEditor::new(),
            store: SavedPolygonStore::new(),
            mode: ViewMode::default(),
            selection: SelectionState::None,
            building_height: MapConfig::DEFAULT_BUILDING_HEIGHT,
            is_3d: false,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        let mut session = Self::new(ZoneIndex::new(config.build_zones()));
        session.page_reports = config.page_reports();
        session.mode = config.initial_view_mode;
        session.building_height = clamp_height(config.default_building_height);
        session
    }

    /// Replace the saved-polygon store (e.g. one with a fixed clock)
    pub fn with_store(mut self, store: SavedPolygonStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn apply(&mut self, event: MapEvent) -> EventOutcome {
        debug!("Applying {:?} in {:?}", event, self.mode);
        match event {
            MapEvent::MapClick(point) => self.click(point),
            MapEvent::VertexDragEnd { index, coordinate } => self.drag(index, coordinate),
            MapEvent::SetBuildingHeight(value) => self.set_height(value),
            MapEvent::Save => self.save(),
            MapEvent::Reset => self.reset(),
            MapEvent::DeletePolygon(id) => self.delete(id),
            MapEvent::ToggleViewMode => self.switch_mode(self.mode.next()),
            MapEvent::SetViewMode(mode) => self.switch_mode(mode),
            MapEvent::Toggle3D => {
                self.is_3d = !self.is_3d;
                EventOutcome::ViewToggled { is_3d: self.is_3d }
            }
            MapEvent::ClearSelection => {
                self.selection = SelectionState::None;
                EventOutcome::SelectionCleared
            }
        }
    }

    fn click(&mut self, point: Coordinate) -> EventOutcome {
        match resolve_click(self.mode, point, &self.zones, &self.store) {
            ClickResolution::Zone(zone) => {
                let zone_id = zone.id.clone();
                self.selection = SelectionState::ActiveZoneReport {
                    zone_id: zone_id.clone(),
                    report: zone.report.clone(),
                };
                EventOutcome::ZoneSelected { zone_id }
            }
            ClickResolution::SavedPolygon(id) => {
                self.selection = SelectionState::ActiveSavedPolygon { id };
                EventOutcome::PolygonSelected { id }
            }
            ClickResolution::PlaceVertex => {
                self.selection = SelectionState::None;
                let index = self.editor.add_vertex(point);
                EventOutcome::VertexAdded { index }
            }
            ClickResolution::Miss => EventOutcome::ignored("click outside every zone"),
        }
    }

    fn drag(&mut self, index: usize, coordinate: Coordinate) -> EventOutcome {
        if index >= self.editor.len() {
            return EventOutcome::ignored(format!("no draft vertex at index {}", index));
        }
        self.selection = SelectionState::None;
        self.editor.drag_vertex(index, coordinate);
        EventOutcome::VertexMoved { index }
    }

    fn save(&mut self) -> EventOutcome {
        match self.editor.save(&mut self.store) {
            SaveOutcome::Saved { id, area } => {
                self.selection = SelectionState::None;
                EventOutcome::Saved { id, area }
            }
            SaveOutcome::Rejected { vertex_count } => EventOutcome::SaveRejected { vertex_count },
        }
    }

    /// Clears the draft and every saved polygon
    fn reset(&mut self) -> EventOutcome {
        info!(
            "Reset: dropping draft ({} points) and {} saved polygons",
            self.editor.len(),
            self.store.len()
        );
        self.editor.clear();
        self.store.reset();
        self.selection = SelectionState::None;
        EventOutcome::Reset
    }

    fn delete(&mut self, id: PolygonId) -> EventOutcome {
        if self.store.delete_by_id(id).is_none() {
            return EventOutcome::ignored(format!("no saved polygon with id {}", id));
        }
        if self.selection.references_polygon(id) {
            self.selection = SelectionState::None;
        }
        EventOutcome::PolygonDeleted { id }
    }

    fn set_height(&mut self, value: f64) -> EventOutcome {
        if !value.is_finite() {
            return EventOutcome::ignored("building height must be a finite number");
        }
        self.building_height = clamp_height(value);
        EventOutcome::HeightChanged {
            height: self.building_height,
        }
    }

    fn switch_mode(&mut self, mode: ViewMode) -> EventOutcome {
        if mode == self.mode {
            return EventOutcome::ignored("already in that mode");
        }
        info!("View mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.selection = SelectionState::None;
        EventOutcome::ModeChanged { mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn editor(&self) -> &PolygonEditor {
        &self.editor
    }

    pub fn store(&self) -> &SavedPolygonStore {
        &self.store
    }

    pub fn zones(&self) -> &ZoneIndex {
        &self.zones
    }

    pub fn building_height(&self) -> f64 {
        self.building_height
    }

    pub fn is_3d(&self) -> bool {
        self.is_3d
    }

    /// Zone overlays are only drawn while inspecting
    pub fn zones_visible(&self) -> bool {
        self.mode.is_inspection()
    }

    /// The active inspection mode's page report, if configured
    pub fn page_report(&self) -> Option<&Report> {
        match self.mode {
            ViewMode::ZoningInspection => self.page_reports.zoning_report.as_ref(),
            ViewMode::PropertyInspection => self.page_reports.property_details.as_ref(),
            ViewMode::FreeDrawing => None,
        }
    }

    /// Draft (if any) followed by saved polygons, keyed by mesh id
    pub fn footprints(&self) -> Vec<(String, Vec<Coordinate>)> {
        let mut footprints = Vec::with_capacity(self.store.len() + 1);
        if !self.editor.is_empty() {
            footprints.push((DRAFT_MESH_ID.to_string(), self.editor.vertices().to_vec()));
        }
        footprints.extend(
            self.store
                .list()
                .iter()
                .map(|p| (p.id().to_string(), p.ring().to_vec())),
        );
        footprints
    }

    /// Extrusion of one footprint by mesh id
    pub fn mesh_for(&self, mesh_id: &str) -> Option<ExtrusionMesh> {
        if mesh_id == DRAFT_MESH_ID {
            return build_extrusion(self.editor.vertices(), self.building_height);
        }
        let id: PolygonId = mesh_id.parse().ok()?;
        build_extrusion(self.store.get(id)?.ring(), self.building_height)
    }

    /// Buffers for every renderable footprint at the current height
    pub fn meshes(&self) -> Vec<MeshBuffers> {
        build_mesh_batch(&self.footprints(), self.building_height)
    }
}
