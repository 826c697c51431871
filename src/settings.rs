//! Tunable tolerances for grid subdivision.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric settings shared by every node of a grid tree.
///
/// Settings are fixed when the root grid is constructed and propagate
/// unchanged to every cell produced by splitting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSettings {
    /// Leftover length below which a fixed-length division treats the
    /// remainder as zero and divides evenly instead (in the grid's unit).
    pub remainder_tolerance: f64,
}

impl GridSettings {
    /// Default remainder tolerance, in the grid's length unit.
    pub const DEFAULT_REMAINDER_TOLERANCE: f64 = 0.01;

    pub fn with_remainder_tolerance(mut self, tolerance: f64) -> Self {
        self.remainder_tolerance = tolerance;
        self
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            remainder_tolerance: Self::DEFAULT_REMAINDER_TOLERANCE,
        }
    }
}
