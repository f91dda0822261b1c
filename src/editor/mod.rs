//! Interactive editing state
//!
//! `MapSession` is the single owner of everything that changes: the draft
//! polygon, the saved polygons, the view mode and the current selection.
//! Every input event is applied synchronously and completely before the
//! next one, so there is no partially applied state to observe.
//!
//! # Submodules
//! - `draft` - PolygonEditor, the in-progress ring and its live area
//! - `store` - SavedPolygonStore, committed polygons
//! - `selection` - ViewMode, SelectionState and click resolution
//! - `session` - MapSession and the MapEvent it consumes
//! - `snapshot` - Serializable view of the session for the renderer

mod draft;
mod store;
mod selection;
mod session;
mod snapshot;

pub use draft::{DraftPhase, PolygonEditor, SaveOutcome, VertexRow, MIN_POLYGON_VERTICES};
pub use store::{PolygonId, SavedPolygon, SavedPolygonStore};
pub use selection::{resolve_click, ClickResolution, SelectionState, ViewMode};
pub use session::{EventOutcome, MapEvent, MapSession, DRAFT_MESH_ID};
pub use snapshot::{CameraTilt, DraftSnapshot, MapSnapshot, SelectionSnapshot};
