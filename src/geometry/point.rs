use std::fmt::Display;

use qtty::{Quantity, Unit};

/// A position in 3D space with unit-typed coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<U: Unit> {
    pub x: Quantity<U>,
    pub y: Quantity<U>,
    pub z: Quantity<U>,
}

impl<U: Unit> Point<U> {
    pub const fn new(x: Quantity<U>, y: Quantity<U>, z: Quantity<U>) -> Self {
        Self { x, y, z }
    }

    pub const fn from_f64(x: f64, y: f64, z: f64) -> Self {
        Self::new(Quantity::new(x), Quantity::new(y), Quantity::new(z))
    }

    pub const fn origin() -> Self {
        Self::from_f64(0.0, 0.0, 0.0)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> Quantity<U> {
        let dx = other.x.value() - self.x.value();
        let dy = other.y.value() - self.y.value();
        let dz = other.z.value() - self.z.value();
        Quantity::new((dx * dx + dy * dy + dz * dz).sqrt())
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mix = |a: Quantity<U>, b: Quantity<U>| a.value() + (b.value() - a.value()) * t;
        Self::from_f64(
            mix(self.x, other.x),
            mix(self.y, other.y),
            mix(self.z, other.z),
        )
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x.value() - other.x.value()).abs() <= tolerance
            && (self.y.value() - other.y.value()).abs() <= tolerance
            && (self.z.value() - other.z.value()).abs() <= tolerance
    }
}

impl<U: Unit> Display for Point<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3})",
            self.x.value(),
            self.y.value(),
            self.z.value()
        )
    }
}
