use std::fmt::Display;

use qtty::{Quantity, Unit};

use super::curve::{clamp_parameter, Curve};
use super::Point;
use crate::domain::Interval;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<U: Unit> {
    start: Point<U>,
    end: Point<U>,
}

impl<U: Unit> Line<U> {
    pub const fn new(start: Point<U>, end: Point<U>) -> Self {
        Self { start, end }
    }

    /// Segment from `(domain.min, 0, 0)` to `(domain.max, 0, 0)`.
    ///
    /// This is the reference geometry of a grid built without a curve.
    pub fn along_x_axis(domain: &Interval<U>) -> Self {
        let zero = Quantity::new(0.0);
        Self::new(
            Point::new(domain.min(), zero, zero),
            Point::new(domain.max(), zero, zero),
        )
    }

    pub const fn start(&self) -> Point<U> {
        self.start
    }

    pub const fn end(&self) -> Point<U> {
        self.end
    }

    pub fn midpoint(&self) -> Point<U> {
        self.start.lerp(&self.end, 0.5)
    }
}

impl<U: Unit> Curve<U> for Line<U> {
    fn length(&self) -> Quantity<U> {
        self.start.distance_to(&self.end)
    }

    fn point_at(&self, t: f64) -> Point<U> {
        self.start.lerp(&self.end, clamp_parameter(t))
    }
}

impl<U: Unit> Display for Line<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
