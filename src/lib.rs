//! gridline - hierarchical one-dimensional grid subdivision
//!
//! Partitions a bounded interval, optionally laid along a parametric curve,
//! into nested non-overlapping cells using count, approximate-length and
//! fixed-length division policies, and maps the resulting cells back onto
//! the curve for placement geometry.

pub mod domain;
pub mod geometry;
pub mod grid;
pub mod settings;

pub use domain::Interval;
pub use geometry::{Curve, Line};
pub use grid::{EvenDivisionMode, FixedDivisionMode, Grid1d, GridError};
pub use settings::GridSettings;

/// Identifier type used for listener handles.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
