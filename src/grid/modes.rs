//! Division policies: how a target length becomes a cell count, and where
//! the leftover of a fixed-length division ends up.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::MAX_CELL_COUNT;

/// How a target cell length is rounded to a whole number of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EvenDivisionMode {
    /// Closest count; cells may end up longer or shorter than the target.
    /// Exact halves round to the even count.
    #[default]
    Nearest,
    /// Round the count up; cells are never longer than the target.
    RoundUp,
    /// Round the count down; cells are never shorter than the target.
    RoundDown,
}

impl EvenDivisionMode {
    /// Rounds a raw (fractional) cell count according to this mode.
    ///
    /// Negative inputs round to zero. Returns `None` for NaN or when the
    /// rounded count exceeds [`MAX_CELL_COUNT`].
    pub fn round(self, raw: f64) -> Option<usize> {
        let rounded = match self {
            EvenDivisionMode::Nearest => raw.round_ties_even(),
            EvenDivisionMode::RoundUp => raw.ceil(),
            EvenDivisionMode::RoundDown => raw.floor(),
        };
        if rounded.is_nan() || rounded > MAX_CELL_COUNT as f64 {
            return None;
        }
        Some(rounded.max(0.0) as usize)
    }
}

/// Where the leftover of a fixed-length division is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FixedDivisionMode {
    /// Half of the remainder at each end.
    RemainderAtBothEnds,
    /// The remainder is the first cell.
    RemainderAtStart,
    /// The remainder is the last cell.
    #[default]
    RemainderAtEnd,
    /// The remainder follows the first `panel_count / 2` full panels.
    RemainderNearMiddle,
}

/// Split offsets closer than this (relative to the total) to the far end are
/// dropped, so rounding never produces a sliver cell at the boundary.
const END_EPSILON: f64 = 1e-9;

impl FixedDivisionMode {
    /// Offsets from the start of the domain at which to split.
    ///
    /// `panel_count` full panels of `length` plus `remainder` fill `total`.
    pub(crate) fn split_offsets(
        self,
        total: f64,
        length: f64,
        panel_count: usize,
        remainder: f64,
    ) -> Vec<f64> {
        let limit = total - END_EPSILON * total.max(1.0);
        let walk = move |first: f64| {
            (0_usize..)
                .map(move |k| first + k as f64 * length)
                .take_while(move |&offset| offset < limit)
        };

        match self {
            FixedDivisionMode::RemainderAtBothEnds => walk(remainder / 2.0).collect(),
            FixedDivisionMode::RemainderAtStart => walk(remainder).collect(),
            FixedDivisionMode::RemainderAtEnd => {
                (1..=panel_count).map(|k| k as f64 * length).collect()
            }
            FixedDivisionMode::RemainderNearMiddle => {
                let panels_on_left = panel_count / 2;
                let left = (1..=panels_on_left).map(|k| k as f64 * length);
                let right = walk(panels_on_left as f64 * length + remainder);
                left.chain(right).collect()
            }
        }
    }
}
