//! Division policies built on top of splitting.

use qtty::{Quantity, Unit};
use tracing::debug;

use super::{EvenDivisionMode, FixedDivisionMode, Grid1d, GridError, MAX_CELL_COUNT};

impl<U: Unit> Grid1d<U> {
    /// Divides a single cell into `count` equal cells.
    ///
    /// Fails with [`GridError::AlreadySubdivided`] if this grid already has
    /// children; divide one of its cells instead. Dividing into one cell
    /// leaves the grid unchanged. Counts above [`MAX_CELL_COUNT`] are
    /// rejected with [`GridError::InvalidCount`].
    pub fn divide_by_count(&mut self, count: usize) -> Result<(), GridError> {
        if !self.is_single_cell() {
            return Err(GridError::AlreadySubdivided);
        }
        if count > MAX_CELL_COUNT {
            return Err(GridError::InvalidCount(count));
        }

        let domains = self.domain.divide_by_count(count)?;
        if domains.len() < 2 {
            return Ok(());
        }

        debug!(count, domain = %self.domain, "dividing grid by count");
        let cells: Vec<_> = domains.into_iter().map(|d| self.child(d)).collect();
        self.cells = cells;
        self.notify_changed();
        Ok(())
    }

    /// Divides into equal cells as close to `target_length` as `mode` allows.
    ///
    /// A target so short that the cell count would exceed [`MAX_CELL_COUNT`]
    /// fails with [`GridError::InvalidLength`].
    pub fn divide_by_approximate_length(
        &mut self,
        target_length: Quantity<U>,
        mode: EvenDivisionMode,
    ) -> Result<(), GridError> {
        let target = Self::checked_length(target_length)?.value();
        let raw = self.domain.length().value() / target;
        let count = mode.round(raw).ok_or(GridError::InvalidLength(target))?;
        debug!(target_length = target, raw, count, ?mode, "dividing grid by approximate length");
        self.divide_by_count(count)
    }

    /// Divides into cells of exactly `length`, walking forward and then
    /// backward from `position`.
    ///
    /// Whatever does not fit a whole cell is left at both extremities. There
    /// is no rollback if a step fails; earlier splits stay applied.
    pub fn divide_by_fixed_length_from_position(
        &mut self,
        length: Quantity<U>,
        position: Quantity<U>,
    ) -> Result<(), GridError> {
        let step = self.checked_panel_length(length)?;
        if !self.domain.includes(position) {
            return Err(GridError::out_of_domain(position, &self.domain));
        }

        debug!(length = step, position = position.value(), domain = %self.domain,
            "dividing grid by fixed length from position");
        let anchor = position.value();
        self.batch(|grid, changed| {
            for k in 0_usize.. {
                let p = Quantity::new(anchor + k as f64 * step);
                if !grid.domain.includes(p) {
                    break;
                }
                *changed |= grid.split_silently(p)?;
            }
            for k in 1_usize.. {
                let p = Quantity::new(anchor - k as f64 * step);
                if !grid.domain.includes(p) {
                    break;
                }
                *changed |= grid.split_silently(p)?;
            }
            Ok(())
        })
    }

    /// Divides into as many whole cells of `length` as fit, minus
    /// `sacrificial_panels`, placing the leftover according to `mode`.
    ///
    /// Nothing happens if not even one whole cell fits. A leftover below
    /// [`GridSettings::remainder_tolerance`](crate::settings::GridSettings)
    /// is treated as zero and the grid is divided evenly instead.
    pub fn divide_by_fixed_length(
        &mut self,
        length: Quantity<U>,
        mode: FixedDivisionMode,
        sacrificial_panels: usize,
    ) -> Result<(), GridError> {
        let step = self.checked_panel_length(length)?;
        let total = self.domain.length().value();
        let whole_panels = (total / step).floor() as usize;
        let Some(panel_count) = whole_panels
            .checked_sub(sacrificial_panels)
            .filter(|&count| count >= 1)
        else {
            debug!(length = step, total, sacrificial_panels, "no whole panel fits");
            return Ok(());
        };

        let remainder = total - panel_count as f64 * step;
        if remainder < self.settings().remainder_tolerance {
            return self.divide_by_count(panel_count);
        }

        debug!(length = step, panel_count, remainder, ?mode, "dividing grid by fixed length");
        let origin = self.domain.min().value();
        let offsets = mode.split_offsets(total, step, panel_count, remainder);
        self.batch(|grid, changed| {
            for offset in offsets {
                *changed |= grid.split_silently(Quantity::new(origin + offset))?;
            }
            Ok(())
        })
    }

    /// Validates a fixed panel length, rejecting lengths that would cut this
    /// domain into more than [`MAX_CELL_COUNT`] cells.
    fn checked_panel_length(&self, length: Quantity<U>) -> Result<f64, GridError> {
        let step = Self::checked_length(length)?.value();
        if self.domain.length().value() / step > MAX_CELL_COUNT as f64 {
            return Err(GridError::InvalidLength(step));
        }
        Ok(step)
    }
}
