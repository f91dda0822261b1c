//! View modes, selection, and click resolution
//!
//! Inspection modes only look at zones. Free drawing looks at saved
//! polygons first, so clicking an existing shape selects it instead of
//! dropping a stray vertex inside it.

use super::store::{PolygonId, SavedPolygonStore};
use crate::geometry::Coordinate;
use crate::zones::{Report, Zone, ZoneIndex};
use serde::{Deserialize, Serialize};

/// Exactly one mode is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    ZoningInspection,
    PropertyInspection,
    #[default]
    FreeDrawing,
}

impl ViewMode {
    /// Cycle order used by the toggle control
    pub fn next(self) -> Self {
        match self {
            ViewMode::ZoningInspection => ViewMode::PropertyInspection,
            ViewMode::PropertyInspection => ViewMode::FreeDrawing,
            ViewMode::FreeDrawing => ViewMode::ZoningInspection,
        }
    }

    pub fn is_inspection(self) -> bool {
        !matches!(self, ViewMode::FreeDrawing)
    }

    /// Heading of the page report shown with a zone selection
    pub fn report_title(self) -> Option<&'static str> {
        match self {
            ViewMode::ZoningInspection => Some("Zoning Report"),
            ViewMode::PropertyInspection => Some("Property Details"),
            ViewMode::FreeDrawing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    None,
    ActiveZoneReport { zone_id: String, report: Report },
    ActiveSavedPolygon { id: PolygonId },
}

impl SelectionState {
    pub fn is_none(&self) -> bool {
        matches!(self, SelectionState::None)
    }

    pub fn references_polygon(&self, polygon_id: PolygonId) -> bool {
        matches!(self, SelectionState::ActiveSavedPolygon { id } if *id == polygon_id)
    }
}

/// What a click means in the current mode
#[derive(Debug, Clone, Copy)]
pub enum ClickResolution<'a> {
    Zone(&'a Zone),
    SavedPolygon(PolygonId),
    PlaceVertex,
    /// Inspection-mode click outside every zone
    Miss,
}

pub fn resolve_click<'a>(
    mode: ViewMode,
    point: Coordinate,
    zones: &'a ZoneIndex,
    store: &SavedPolygonStore,
) -> ClickResolution<'a> {
    if mode.is_inspection() {
        return match zones.find_containing(point) {
            Some(zone) => ClickResolution::Zone(zone),
            None => ClickResolution::Miss,
        };
    }

    match store.find_containing(point) {
        Some(polygon) => ClickResolution::SavedPolygon(polygon.id()),
        None => ClickResolution::PlaceVertex,
    }
}
