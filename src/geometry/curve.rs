use std::fmt::Debug;

use qtty::{Quantity, Unit};

use super::Point;

/// A parametric curve sampled by a normalized parameter `t ∈ [0, 1]`.
///
/// Implementations clamp `t` into `[0, 1]`, so sampling slightly past either
/// end (as floating-point remapping can) returns the endpoint.
pub trait Curve<U: Unit>: Debug {
    /// Total length of the curve.
    fn length(&self) -> Quantity<U>;

    /// Position at normalized parameter `t`.
    fn point_at(&self, t: f64) -> Point<U>;

    fn start(&self) -> Point<U> {
        self.point_at(0.0)
    }

    fn end(&self) -> Point<U> {
        self.point_at(1.0)
    }
}

pub(super) fn clamp_parameter(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}
