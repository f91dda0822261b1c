//! Handler module declarations and re-exports

pub mod drawing;
pub mod meshes;
pub mod polygons;
pub mod query;
pub mod view;

// Re-export all handlers for convenient access
pub use drawing::*;
pub use meshes::*;
pub use polygons::*;
pub use query::*;
pub use view::*;
