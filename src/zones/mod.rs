//! Geofenced zones and their reports
//!
//! Zones are read-only reference data loaded once at startup. A map click
//! in an inspection mode resolves to the first zone (in load order) whose
//! ring contains it.
//!
//! # Submodules
//! - `zone` - Zone and report record types
//! - `index` - ZoneIndex with an R-tree bounding-box prefilter
//! - `report` - Display rendering of opaque report records
//! - `dataset` - Built-in sample zones

mod zone;
mod index;
mod report;
mod dataset;

pub use zone::{Report, Zone, report_from_json};
pub use index::ZoneIndex;
pub use report::{PageReports, ReportField, ReportView, MESSAGE_FIELD, MISSING_VALUE};
pub use dataset::builtin_zones;
