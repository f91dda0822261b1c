//! Map annotation and geometry engine
//!
//! Users inspect predefined zones on a map, draw their own polygons by
//! clicking vertices, see the live area of the draft, save it, and view
//! saved polygons extruded as simple buildings.
//!
//! # Modules
//! - `geometry` - Coordinates, coordinate validation, ring primitives, area
//! - `zones` - Zones, their reports and the point-in-zone index
//! - `editor` - Draft polygon, saved polygons, view modes and selection
//! - `mesh` - Extrusion of footprints into walls, roof and edges
//! - `config` - Startup configuration
//! - `rpc` - JSON-RPC front end used by the `map_server` binary
//!
//! # Example
//! ```ignore
//! let mut session = MapSession::new(ZoneIndex::new(builtin_zones()));
//! session.apply(MapEvent::MapClick(Coordinate::new(72.86, 19.35)));
//! ```

pub mod config;
pub mod editor;
pub mod geometry;
pub mod mesh;
pub mod rpc;
pub mod zones;

pub use config::MapConfig;
pub use editor::{EventOutcome, MapEvent, MapSession, MapSnapshot, ViewMode};
pub use geometry::{validate_coordinate, Coordinate};
pub use zones::{builtin_zones, ZoneIndex};
