//! Closed numeric domains and the normalized-parameter mapping between them.
//!
//! [`Interval`] is the unit of subdivision arithmetic: every grid node owns one
//! and every split produces new ones. The free functions in [`mapping`] convert
//! between absolute positions and `[0, 1]` fractions of an interval.

mod error;
mod interval;
pub mod mapping;

pub use error::IntervalError;
pub use interval::Interval;
pub use mapping::{map_from_domain, map_to_domain};
