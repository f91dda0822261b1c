//! Zone and report record types

use crate::geometry::{close_ring, Coordinate, Ring};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Opaque report record: field name → display value, in insertion order
pub type Report = IndexMap<String, String>;

/// A named geofenced region
#[derive(Debug, Clone, Serialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Closed ring
    pub ring: Ring,
    pub report: Report,
}

impl Zone {
    /// Build a zone, closing its ring if needed
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        ring: &[Coordinate],
        report: Report,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            ring: close_ring(ring),
            report,
        }
    }
}

/// Flatten JSON report values into display strings.
/// Strings pass through, `null` becomes empty, everything else is printed as JSON.
pub fn report_from_json(fields: IndexMap<String, Value>) -> Report {
    fields
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key, text)
        })
        .collect()
}
