use thiserror::Error;

/// Errors raised while constructing curves.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("A polyline needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("Arc radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}
