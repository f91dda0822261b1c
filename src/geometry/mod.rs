//! Geometry module for map annotation
//!
//! This module provides the geographic primitives shared by every higher
//! component: coordinates and rings, input sanitizing, containment tests,
//! and area on the sphere.
//!
//! # Submodules
//! - `types` - Coordinate, Ring, and the 3D point used by extrusion
//! - `validate` - Sanitizing arbitrary input into valid coordinates
//! - `ring` - Ring closing and point-in-polygon
//! - `area` - Spherical ring area and unit conversion

mod types;
mod validate;
mod ring;
mod area;

pub use types::{
    Coordinate,
    Ring,
    Point3,
};

pub use validate::{
    MIN_LONGITUDE,
    MAX_LONGITUDE,
    MIN_LATITUDE,
    MAX_LATITUDE,
    Sanitized,
    parse_component,
    sanitize,
    validate_coordinate,
    validate_parts,
};

pub use ring::{
    is_closed,
    close_ring,
    distinct_vertices,
    point_in_polygon,
    ring_bounds,
};

pub use area::{
    EARTH_RADIUS_METERS,
    SQUARE_FEET_PER_SQUARE_METER,
    AreaReading,
    ring_area,
    square_feet,
};
