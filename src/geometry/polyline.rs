use qtty::{Quantity, Unit};

use super::curve::{clamp_parameter, Curve};
use super::{GeometryError, Point};

/// An open chain of straight segments, parameterized by normalized arc length.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<U: Unit> {
    vertices: Vec<Point<U>>,
    /// Cumulative length at each vertex; `cumulative[0] == 0`.
    cumulative: Vec<f64>,
}

impl<U: Unit> Polyline<U> {
    pub fn new(vertices: Vec<Point<U>>) -> Result<Self, GeometryError> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }

        let mut cumulative = Vec::with_capacity(vertices.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in vertices.windows(2) {
            total += pair[0].distance_to(&pair[1]).value();
            cumulative.push(total);
        }

        Ok(Self {
            vertices,
            cumulative,
        })
    }

    pub fn vertices(&self) -> &[Point<U>] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() - 1
    }
}

impl<U: Unit> Curve<U> for Polyline<U> {
    fn length(&self) -> Quantity<U> {
        Quantity::new(self.cumulative.last().copied().unwrap_or(0.0))
    }

    fn point_at(&self, t: f64) -> Point<U> {
        let total = self.length().value();
        let t = clamp_parameter(t);
        if total == 0.0 {
            return self.vertices[0];
        }

        let target = t * total;
        // First vertex whose cumulative length reaches the target ends the segment.
        let end = self
            .cumulative
            .partition_point(|&c| c < target)
            .clamp(1, self.vertices.len() - 1);
        let start = end - 1;
        let segment = self.cumulative[end] - self.cumulative[start];
        if segment == 0.0 {
            return self.vertices[start];
        }
        let local = (target - self.cumulative[start]) / segment;
        self.vertices[start].lerp(&self.vertices[end], local)
    }
}
