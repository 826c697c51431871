use qtty::{Quantity, Unit};
use thiserror::Error;

use crate::domain::{Interval, IntervalError};

/// Errors raised by grid construction, splitting, and division.
///
/// Single-step operations fail before mutating anything. Batch operations
/// (`split_at_positions`, the fixed-length divisions) keep the splits that
/// were applied before the failing step.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid length must be positive and finite, got {0}")]
    InvalidLength(f64),

    #[error("Cannot divide a grid into {0} cells; the count must be at least 1")]
    InvalidCount(usize),

    #[error("Position {position} is outside the grid domain [{min}, {max}]")]
    OutOfDomain { position: f64, min: f64, max: f64 },

    #[error("This grid already has subdivisions; select a sub-cell to divide instead")]
    AlreadySubdivided,
}

impl GridError {
    pub(crate) fn out_of_domain<U: Unit>(position: Quantity<U>, domain: &Interval<U>) -> Self {
        GridError::OutOfDomain {
            position: position.value(),
            min: domain.min().value(),
            max: domain.max().value(),
        }
    }
}

impl From<IntervalError> for GridError {
    fn from(error: IntervalError) -> Self {
        match error {
            IntervalError::OutOfRange { position, min, max } => {
                GridError::OutOfDomain { position, min, max }
            }
            IntervalError::InvalidCount(count) => GridError::InvalidCount(count),
            IntervalError::Inverted { min, max } => GridError::InvalidLength(max - min),
        }
    }
}
