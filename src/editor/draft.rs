//! The draft polygon
//!
//! States: Empty (0 vertices) → Drawing (1-2) → Valid (3+). Saving moves
//! a Valid draft into the store and returns the editor to Empty.

use super::store::{PolygonId, SavedPolygonStore};
use crate::geometry::{close_ring, AreaReading, Coordinate};
use log::{debug, warn};
use serde::Serialize;

pub const MIN_POLYGON_VERTICES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    Empty,
    Drawing,
    Valid,
}

/// Result of a save attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved { id: PolygonId, area: f64 },
    Rejected { vertex_count: usize },
}

/// One line of the coordinate list shown next to the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexRow {
    pub label: String,
    pub latitude: String,
    pub longitude: String,
}

/// Owns the in-progress ring. The ring is never handed out mutably.
#[derive(Debug, Clone, Default)]
pub struct PolygonEditor {
    vertices: Vec<Coordinate>,
    area: Option<AreaReading>,
}

impl PolygonEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn phase(&self) -> DraftPhase {
        match self.vertices.len() {
            0 => DraftPhase::Empty,
            n if n < MIN_POLYGON_VERTICES => DraftPhase::Drawing,
            _ => DraftPhase::Valid,
        }
    }

    /// Live area; absent below 3 vertices
    pub fn area(&self) -> Option<AreaReading> {
        self.area
    }

    /// The save control is offered as soon as anything is drawn
    pub fn can_save(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Append a vertex, returning its index
    pub fn add_vertex(&mut self, coordinate: Coordinate) -> usize {
        self.vertices.push(coordinate);
        self.recompute_area();
        debug!(
            "Draft vertex {} added at ({:.6}, {:.6})",
            self.vertices.len(),
            coordinate.longitude,
            coordinate.latitude
        );
        self.vertices.len() - 1
    }

    /// Replace the vertex at `index` in place. Returns false (and changes
    /// nothing) when the index is out of bounds.
    pub fn drag_vertex(&mut self, index: usize, coordinate: Coordinate) -> bool {
        let Some(slot) = self.vertices.get_mut(index) else {
            debug!("Drag ignored: no draft vertex at index {}", index);
            return false;
        };
        *slot = coordinate;
        self.recompute_area();
        true
    }

    /// Commit the draft into `store`. Rejected below 3 vertices, in which
    /// case the editor is untouched.
    pub fn save(&mut self, store: &mut SavedPolygonStore) -> SaveOutcome {
        if self.vertices.len() < MIN_POLYGON_VERTICES {
            warn!(
                "Polygon must have at least {} points (draft has {})",
                MIN_POLYGON_VERTICES,
                self.vertices.len()
            );
            return SaveOutcome::Rejected {
                vertex_count: self.vertices.len(),
            };
        }

        let area = self.area.map(|a| a.square_meters).unwrap_or(0.0);
        let id = store.create(close_ring(&self.vertices), area);
        self.clear();
        SaveOutcome::Saved { id, area }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.area = None;
    }

    /// Preview polyline: none below 2 vertices, open at 2, closed from 3
    pub fn outline(&self) -> Option<Vec<Coordinate>> {
        if self.vertices.len() < 2 {
            return None;
        }
        Some(close_ring(&self.vertices))
    }

    pub fn vertex_rows(&self) -> Vec<VertexRow> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, c)| VertexRow {
                label: format!("Point {}", i + 1),
                latitude: format!("{:.6}", c.latitude),
                longitude: format!("{:.6}", c.longitude),
            })
            .collect()
    }

    fn recompute_area(&mut self) {
        self.area = AreaReading::of_ring(&self.vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> [Coordinate; 3] {
        [
            Coordinate::new(72.8700, 19.3680),
            Coordinate::new(72.8710, 19.3680),
            Coordinate::new(72.8705, 19.3690),
        ]
    }

    #[test]
    fn test_phases_and_live_area() {
        let mut editor = PolygonEditor::new();
        assert_eq!(editor.phase(), DraftPhase::Empty);
        assert!(!editor.can_save());

        let [a, b, c] = triangle();
        editor.add_vertex(a);
        editor.add_vertex(b);
        assert_eq!(editor.phase(), DraftPhase::Drawing);
        assert!(editor.area().is_none());
        assert!(editor.can_save());

        assert_eq!(editor.add_vertex(c), 2);
        assert_eq!(editor.phase(), DraftPhase::Valid);
        let area = editor.area().unwrap();
        assert!(area.square_meters > 0.0);
        assert_eq!(area.square_feet, area.square_meters * 10.7639);
    }

    #[test]
    fn test_drag_replaces_in_place() {
        let mut editor = PolygonEditor::new();
        for c in triangle() {
            editor.add_vertex(c);
        }
        let before = editor.area().unwrap().square_meters;

        assert!(editor.drag_vertex(2, Coordinate::new(72.8705, 19.3700)));
        assert_eq!(editor.len(), 3);
        assert_eq!(editor.vertices()[2], Coordinate::new(72.8705, 19.3700));
        assert!(editor.area().unwrap().square_meters > before);

        let snapshot = editor.vertices().to_vec();
        assert!(!editor.drag_vertex(3, Coordinate::ORIGIN));
        assert_eq!(editor.vertices(), snapshot.as_slice());
    }

    #[test]
    fn test_save_rejected_with_two_vertices() {
        let mut editor = PolygonEditor::new();
        let mut store = SavedPolygonStore::new();
        let [a, b, _] = triangle();
        editor.add_vertex(a);
        editor.add_vertex(b);

        assert_eq!(editor.save(&mut store), SaveOutcome::Rejected { vertex_count: 2 });
        assert_eq!(editor.vertices(), &[a, b]);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_save_moves_closed_ring_into_store() {
        let mut editor = PolygonEditor::new();
        let mut store = SavedPolygonStore::new();
        for c in triangle() {
            editor.add_vertex(c);
        }
        let area = editor.area().unwrap().square_meters;

        let SaveOutcome::Saved { id, area: saved_area } = editor.save(&mut store) else {
            panic!("expected save to succeed");
        };
        assert_eq!(saved_area, area);
        assert!(editor.is_empty());
        assert!(editor.area().is_none());

        let saved = store.get(id).unwrap();
        assert_eq!(saved.ring().len(), 4);
        assert_eq!(saved.ring()[0], saved.ring()[3]);
        assert_eq!(saved.area(), area);
    }

    #[test]
    fn test_outline_preview() {
        let mut editor = PolygonEditor::new();
        let [a, b, c] = triangle();
        editor.add_vertex(a);
        assert!(editor.outline().is_none());
        editor.add_vertex(b);
        assert_eq!(editor.outline().unwrap(), vec![a, b]);
        editor.add_vertex(c);
        assert_eq!(editor.outline().unwrap(), vec![a, b, c, a]);
    }

    #[test]
    fn test_vertex_rows() {
        let mut editor = PolygonEditor::new();
        editor.add_vertex(Coordinate::new(72.8705, 19.3685));
        let rows = editor.vertex_rows();
        assert_eq!(rows[0].label, "Point 1");
        assert_eq!(rows[0].latitude, "19.368500");
        assert_eq!(rows[0].longitude, "72.870500");
    }
}
