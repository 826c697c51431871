use thiserror::Error;

/// Errors raised by [`Interval`](super::Interval) arithmetic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntervalError {
    #[error("Interval bounds are inverted: min {min} is greater than max {max}")]
    Inverted { min: f64, max: f64 },

    #[error("Position {position} lies outside the interval [{min}, {max}]")]
    OutOfRange { position: f64, min: f64, max: f64 },

    #[error("Cannot divide an interval into {0} parts; the count must be at least 1")]
    InvalidCount(usize),
}
