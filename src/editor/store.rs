//! Committed polygons
//!
//! A saved polygon is immutable once created. Editing one means deleting
//! it and drawing it again.

use crate::geometry::{point_in_polygon, Coordinate, Ring};
use log::{debug, info};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Creation-time derived id (milliseconds since the epoch, bumped when
/// two saves land in the same millisecond)
pub type PolygonId = u64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedPolygon {
    id: PolygonId,
    ring: Ring,
    /// m², snapshot at save time
    area: f64,
}

impl SavedPolygon {
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// Closed ring
    pub fn ring(&self) -> &[Coordinate] {
        &self.ring
    }

    pub fn area(&self) -> f64 {
        self.area
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct SavedPolygonStore {
    polygons: Vec<SavedPolygon>,
    last_id: PolygonId,
    clock: fn() -> u64,
}

impl SavedPolygonStore {
    pub fn new() -> Self {
        Self::with_clock(epoch_millis)
    }

    /// Store with a custom millisecond clock
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            polygons: Vec::new(),
            last_id: 0,
            clock,
        }
    }

    fn next_id(&mut self) -> PolygonId {
        let id = (self.clock)().max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }

    pub fn create(&mut self, ring: Ring, area: f64) -> PolygonId {
        let id = self.next_id();
        debug!("Saved polygon {} ({} points, {:.2} m²)", id, ring.len(), area);
        self.polygons.push(SavedPolygon { id, ring, area });
        id
    }

    /// Remove by id. Unknown ids are a no-op returning `None`.
    pub fn delete_by_id(&mut self, id: PolygonId) -> Option<SavedPolygon> {
        let position = self.polygons.iter().position(|p| p.id == id)?;
        Some(self.polygons.remove(position))
    }

    pub fn reset(&mut self) {
        if !self.polygons.is_empty() {
            info!("Clearing {} saved polygons", self.polygons.len());
        }
        self.polygons.clear();
    }

    /// Saved polygons in creation order
    pub fn list(&self) -> &[SavedPolygon] {
        &self.polygons
    }

    pub fn get(&self, id: PolygonId) -> Option<&SavedPolygon> {
        self.polygons.iter().find(|p| p.id == id)
    }

    /// First polygon in store order containing the point
    pub fn find_containing(&self, point: Coordinate) -> Option<&SavedPolygon> {
        self.polygons.iter().find(|p| point_in_polygon(point, &p.ring))
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl Default for SavedPolygonStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_clock() -> u64 {
        1_700_000_000_000
    }

    fn unit_square(offset: f64) -> Ring {
        vec![
            Coordinate::new(offset, 0.0),
            Coordinate::new(offset + 1.0, 0.0),
            Coordinate::new(offset + 1.0, 1.0),
            Coordinate::new(offset, 1.0),
            Coordinate::new(offset, 0.0),
        ]
    }

    #[test]
    fn test_ids_are_unique_within_one_millisecond() {
        let mut store = SavedPolygonStore::with_clock(frozen_clock);
        let a = store.create(unit_square(0.0), 1.0);
        let b = store.create(unit_square(2.0), 1.0);
        let c = store.create(unit_square(4.0), 1.0);
        assert_eq!(a, frozen_clock());
        assert!(a < b && b < c);
    }

    #[test]
    fn test_clock_at_max_does_not_overflow() {
        let mut store = SavedPolygonStore::with_clock(|| u64::MAX);
        assert_eq!(store.create(unit_square(0.0), 1.0), u64::MAX);
        assert_eq!(store.create(unit_square(2.0), 1.0), u64::MAX);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = SavedPolygonStore::new();
        let id = store.create(unit_square(0.0), 1.0);
        assert!(store.delete_by_id(id + 1000).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.delete_by_id(id).unwrap().id(), id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_hit_test_in_store_order() {
        let mut store = SavedPolygonStore::with_clock(frozen_clock);
        let first = store.create(unit_square(0.0), 1.0);
        let _second = store.create(unit_square(0.0), 1.0);
        let third = store.create(unit_square(5.0), 1.0);

        assert_eq!(store.find_containing(Coordinate::new(0.5, 0.5)).unwrap().id(), first);
        assert_eq!(store.find_containing(Coordinate::new(5.5, 0.5)).unwrap().id(), third);
        assert!(store.find_containing(Coordinate::new(3.0, 0.5)).is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = SavedPolygonStore::new();
        store.create(unit_square(0.0), 1.0);
        store.create(unit_square(2.0), 1.0);
        store.reset();
        assert!(store.list().is_empty());
    }
}
