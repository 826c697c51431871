use std::f64::consts::PI;

use qtty::{Quantity, Unit};

use super::curve::{clamp_parameter, Curve};
use super::{GeometryError, Point};

/// A circular arc in a plane parallel to XY, swept from `start_angle` to
/// `end_angle` (radians, counter-clockwise when `end_angle > start_angle`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc<U: Unit> {
    center: Point<U>,
    radius: Quantity<U>,
    start_angle: f64,
    end_angle: f64,
}

impl<U: Unit> CircularArc<U> {
    pub fn new(
        center: Point<U>,
        radius: Quantity<U>,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, GeometryError> {
        let r = radius.value();
        if !r.is_finite() || r <= 0.0 {
            return Err(GeometryError::InvalidRadius(r));
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Half circle from angle 0 to π.
    pub fn semicircle(center: Point<U>, radius: Quantity<U>) -> Result<Self, GeometryError> {
        Self::new(center, radius, 0.0, PI)
    }

    pub const fn center(&self) -> Point<U> {
        self.center
    }

    pub const fn radius(&self) -> Quantity<U> {
        self.radius
    }

    /// Signed sweep angle in radians.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl<U: Unit> Curve<U> for CircularArc<U> {
    fn length(&self) -> Quantity<U> {
        Quantity::new(self.radius.value() * self.sweep().abs())
    }

    fn point_at(&self, t: f64) -> Point<U> {
        let angle = self.start_angle + self.sweep() * clamp_parameter(t);
        let r = self.radius.value();
        Point::from_f64(
            self.center.x.value() + r * angle.cos(),
            self.center.y.value() + r * angle.sin(),
            self.center.z.value(),
        )
    }
}
