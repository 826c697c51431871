//! Closed interval representation for grid domains.

use std::fmt::Display;

use qtty::{Quantity, Unit};

use super::error::IntervalError;

/// Closed range `[min, max]` spanned by a grid cell.
///
/// Intervals are immutable values: splitting and dividing return new
/// intervals and never touch the receiver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<U: Unit> {
    min: Quantity<U>,
    max: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates interval `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub const fn new(min: Quantity<U>, max: Quantity<U>) -> Self {
        assert!(min.value() <= max.value(), "Interval min must be <= max");
        Self { min, max }
    }

    /// Creates interval `[min, max]`, rejecting inverted or NaN bounds.
    pub fn try_new(min: Quantity<U>, max: Quantity<U>) -> Result<Self, IntervalError> {
        if min.value() <= max.value() {
            Ok(Self { min, max })
        } else {
            Err(IntervalError::Inverted {
                min: min.value(),
                max: max.value(),
            })
        }
    }

    pub const fn from_f64(min: f64, max: f64) -> Self {
        Self::new(Quantity::<U>::new(min), Quantity::<U>::new(max))
    }

    pub const fn min(&self) -> Quantity<U> {
        self.min
    }

    pub const fn max(&self) -> Quantity<U> {
        self.max
    }

    pub fn length(&self) -> Quantity<U> {
        self.max - self.min
    }

    /// Midpoint of the interval.
    pub fn center(&self) -> Quantity<U> {
        Quantity::new((self.min.value() + self.max.value()) * 0.5)
    }

    /// Converts this interval to another unit of the same dimension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qtty::{Kilometer, Meter};
    /// use gridline::domain::Interval;
    ///
    /// let metres = Interval::<Meter>::from_f64(0.0, 2500.0);
    /// let kilometres: Interval<Kilometer> = metres.to();
    /// assert!((kilometres.max().value() - 2.5).abs() < 1e-9);
    /// ```
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Interval<T> {
        Interval::new(self.min.to(), self.max.to())
    }

    /// Returns true if `position` ∈ `[min, max]`.
    pub const fn includes(&self, position: Quantity<U>) -> bool {
        self.min.value() <= position.value() && position.value() <= self.max.value()
    }

    /// Splits at `position` into `[min, position]` and `[position, max]`.
    pub fn split_at(&self, position: Quantity<U>) -> Result<(Self, Self), IntervalError> {
        if !self.includes(position) {
            return Err(self.out_of_range(position));
        }
        Ok((
            Self::new(self.min, position),
            Self::new(position, self.max),
        ))
    }

    /// Divides into `count` equal-width, contiguous intervals.
    ///
    /// The last interval always ends exactly at `max`, so accumulated rounding
    /// never leaves a gap at the end of the range.
    pub fn divide_by_count(&self, count: usize) -> Result<Vec<Self>, IntervalError> {
        if count < 1 {
            return Err(IntervalError::InvalidCount(count));
        }

        let min = self.min.value();
        let width = self.length().value() / count as f64;
        let mut parts = Vec::with_capacity(count);
        let mut start = min;
        for i in 1..=count {
            let end = if i == count {
                self.max.value()
            } else {
                min + width * i as f64
            };
            parts.push(Self::from_f64(start, end));
            start = end;
        }
        Ok(parts)
    }

    /// Maps a normalized parameter `t` to the absolute position `min + t * length`.
    pub fn map_to_domain(&self, t: f64) -> Quantity<U> {
        super::mapping::map_to_domain(t, self)
    }

    /// Maps an absolute `position` to its `[0, 1]` fraction within this interval.
    pub fn map_from_domain(&self, position: Quantity<U>) -> f64 {
        super::mapping::map_from_domain(position, self)
    }

    fn out_of_range(&self, position: Quantity<U>) -> IntervalError {
        IntervalError::OutOfRange {
            position: position.value(),
            min: self.min.value(),
            max: self.max.value(),
        }
    }
}

impl<U: Unit> Display for Interval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min.value(), self.max.value())
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Interval<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("min", &self.min.value())?;
        s.serialize_field("max", &self.max.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Interval<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            min: f64,
            max: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::try_new(Quantity::<U>::new(raw.min), Quantity::<U>::new(raw.max))
            .map_err(serde::de::Error::custom)
    }
}
