//! Splitting: the fundamental grid mutator and its convenience wrappers.

use qtty::{Quantity, Unit};
use tracing::trace;

use super::{Grid1d, GridError};

impl<U: Unit> Grid1d<U> {
    /// Splits the grid at an absolute `position` along its domain.
    ///
    /// On a single cell this creates two children. On a subdivided grid the
    /// cell containing `position` is split and replaced in place by its new
    /// children, keeping this level sorted and contiguous. Splitting exactly
    /// on an existing cell boundary changes nothing.
    ///
    /// Fails with [`GridError::OutOfDomain`] before mutating anything if
    /// `position` lies outside the domain.
    pub fn split_at_position(&mut self, position: Quantity<U>) -> Result<(), GridError> {
        if self.split_silently(position)? {
            self.notify_changed();
        }
        Ok(())
    }

    /// Splits at `distance` measured back from the end of the domain.
    pub fn split_at_position_from_end(&mut self, distance: Quantity<U>) -> Result<(), GridError> {
        self.split_at_position(self.from_end(distance))
    }

    /// Splits at each position in turn.
    ///
    /// There is no rollback: if a position is out of domain, the splits
    /// before it stay applied. Fires at most one notification.
    pub fn split_at_positions<I>(&mut self, positions: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = Quantity<U>>,
    {
        self.batch(|grid, changed| {
            for position in positions {
                *changed |= grid.split_silently(position)?;
            }
            Ok(())
        })
    }

    /// Like [`Grid1d::split_at_positions`] with every distance measured back
    /// from the end of the domain.
    pub fn split_at_positions_from_end<I>(&mut self, distances: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = Quantity<U>>,
    {
        self.batch(|grid, changed| {
            for distance in distances {
                let position = grid.from_end(distance);
                *changed |= grid.split_silently(position)?;
            }
            Ok(())
        })
    }

    /// Splits at a normalized parameter `t ∈ [0, 1]` of this grid's domain.
    pub fn split_at_parameter(&mut self, t: f64) -> Result<(), GridError> {
        self.split_at_position(self.domain.map_to_domain(t))
    }

    /// Splits at each normalized parameter in turn; later parameters operate
    /// on the already-split tree but are still relative to this domain.
    pub fn split_at_parameters<I>(&mut self, parameters: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = f64>,
    {
        self.batch(|grid, changed| {
            for t in parameters {
                let position = grid.domain.map_to_domain(t);
                *changed |= grid.split_silently(position)?;
            }
            Ok(())
        })
    }

    fn from_end(&self, distance: Quantity<U>) -> Quantity<U> {
        Quantity::new(self.domain.max().value() - distance.value())
    }

    /// Runs a multi-step mutation and notifies once if anything changed,
    /// including when a later step fails.
    pub(super) fn batch<F>(&mut self, op: F) -> Result<(), GridError>
    where
        F: FnOnce(&mut Self, &mut bool) -> Result<(), GridError>,
    {
        let mut changed = false;
        let result = op(self, &mut changed);
        if changed {
            self.notify_changed();
        }
        result
    }

    /// Splits without notifying. Returns whether the tree changed.
    pub(super) fn split_silently(&mut self, position: Quantity<U>) -> Result<bool, GridError> {
        if !self.domain.includes(position) {
            return Err(GridError::out_of_domain(position, &self.domain));
        }

        if self.is_single_cell() {
            let p = position.value();
            if p == self.domain.min().value() || p == self.domain.max().value() {
                return Ok(false);
            }
            let (left, right) = self.domain.split_at(position)?;
            trace!(domain = %self.domain, position = p, "splitting single cell");
            self.cells = vec![self.child(left), self.child(right)];
            return Ok(true);
        }

        let index = self.find_cell_index(position);
        let cell = &mut self.cells[index];
        if !cell.split_silently(position)? {
            return Ok(false);
        }
        let replacement = std::mem::take(&mut cell.cells);
        self.cells.splice(index..=index, replacement);
        Ok(true)
    }

    /// Index of the immediate child containing `position`.
    ///
    /// A position strictly inside a cell resolves to that cell; a position on
    /// an internal boundary resolves to the cell starting there; the end of
    /// the domain resolves to the last cell. The caller guarantees that this
    /// grid is subdivided and that `position` lies in its domain.
    ///
    /// # Panics
    ///
    /// Panics if no cell matches, which means the cells no longer partition
    /// the domain.
    pub(super) fn find_cell_index(&self, position: Quantity<U>) -> usize {
        let p = position.value();

        let inside = self
            .cells
            .iter()
            .position(|c| c.domain.min().value() < p && p < c.domain.max().value());
        if let Some(index) = inside {
            return index;
        }

        let starting_here = self
            .cells
            .iter()
            .position(|c| c.domain.min().value() == p);
        if let Some(index) = starting_here {
            return index;
        }

        match self.cells.last() {
            Some(last) if last.domain.max().value() == p => self.cells.len() - 1,
            _ => panic!(
                "no cell of grid {} contains position {}; cells do not partition the domain",
                self.domain, p
            ),
        }
    }
}
