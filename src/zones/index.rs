//! Zone lookup
//!
//! R-tree over zone bounding boxes narrows a click to a few candidates;
//! the exact ray-cast test then decides, and load order breaks ties.

use super::zone::Zone;
use crate::geometry::{point_in_polygon, ring_bounds, Coordinate};
use rstar::{RTree, RTreeObject, AABB};

/// Bounding box of one zone, keyed by its position in load order
#[derive(Clone, Debug)]
struct ZoneEnvelope {
    position: usize,
    bounds: AABB<[f64; 2]>,
}

impl ZoneEnvelope {
    fn new(position: usize, zone: &Zone) -> Option<Self> {
        let b = ring_bounds(&zone.ring)?;
        Some(Self {
            position,
            bounds: AABB::from_corners([b[0], b[1]], [b[2], b[3]]),
        })
    }
}

impl RTreeObject for ZoneEnvelope {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

impl rstar::PointDistance for ZoneEnvelope {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.bounds.distance_2(point)
    }
}

/// Read-only set of zones
pub struct ZoneIndex {
    zones: Vec<Zone>,
    tree: RTree<ZoneEnvelope>,
}

impl ZoneIndex {
    pub fn new(zones: Vec<Zone>) -> Self {
        let envelopes: Vec<ZoneEnvelope> = zones
            .iter()
            .enumerate()
            .filter_map(|(i, zone)| ZoneEnvelope::new(i, zone))
            .collect();
        Self {
            zones,
            tree: RTree::bulk_load(envelopes),
        }
    }

    /// First zone in load order whose ring contains the point
    pub fn find_containing(&self, point: Coordinate) -> Option<&Zone> {
        self.tree
            .locate_all_at_point(&point.to_array())
            .filter(|env| point_in_polygon(point, &self.zones[env.position].ring))
            .map(|env| env.position)
            .min()
            .map(|position| &self.zones[position])
    }

    pub fn get(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
