//! Normalized-parameter mapping between `[0, 1]` and an [`Interval`].
//!
//! Grids use this twice: the public `split_at_parameter` API maps a fraction
//! onto a cell's own domain, and cell geometry maps an absolute position back
//! to a fraction of the *curve* domain before sampling the curve.

use qtty::{Quantity, Unit};

use super::Interval;

/// Maps `t` to `min + t * length` within `domain`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate past the bounds.
pub fn map_to_domain<U: Unit>(t: f64, domain: &Interval<U>) -> Quantity<U> {
    Quantity::new(domain.min().value() + t * domain.length().value())
}

/// Maps an absolute `position` to its fraction of `domain`.
///
/// A zero-length domain maps every position to `0.0`.
pub fn map_from_domain<U: Unit>(position: Quantity<U>, domain: &Interval<U>) -> f64 {
    let length = domain.length().value();
    if length == 0.0 {
        return 0.0;
    }
    (position.value() - domain.min().value()) / length
}
