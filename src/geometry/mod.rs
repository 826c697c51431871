//! Geometric collaborators of the grid: points and parametric curves.
//!
//! A grid only needs two things from a curve: its length, which becomes the
//! root domain, and a way to sample a point at a normalized parameter. Both
//! live on the [`Curve`] trait; [`Line`], [`Polyline`] and [`CircularArc`] are
//! the concrete shapes shipped with the crate.

mod arc;
mod curve;
mod error;
mod line;
mod point;
mod polyline;

pub use arc::CircularArc;
pub use curve::Curve;
pub use error::GeometryError;
pub use line::Line;
pub use point::Point;
pub use polyline::Polyline;
