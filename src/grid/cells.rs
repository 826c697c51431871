//! Reading a grid back: leaf enumeration, position lookup, cell geometry.

use qtty::{Quantity, Unit};

use super::{Grid1d, GridError};
use crate::domain::Interval;
use crate::geometry::Line;

impl<U: Unit> Grid1d<U> {
    /// All leaf cells below this grid, left to right.
    ///
    /// A single cell returns itself. For just the immediate children use
    /// [`Grid1d::children`].
    pub fn get_cells(&self) -> Vec<&Grid1d<U>> {
        let mut cells = Vec::with_capacity(self.cells.len().max(1));
        self.collect_cells(&mut cells);
        cells
    }

    fn collect_cells<'a>(&'a self, out: &mut Vec<&'a Grid1d<U>>) {
        if self.is_single_cell() {
            out.push(self);
            return;
        }
        for cell in &self.cells {
            cell.collect_cells(out);
        }
    }

    /// Domains of all leaf cells, left to right.
    pub fn cell_domains(&self) -> Vec<Interval<U>> {
        self.get_cells().into_iter().map(|c| c.domain).collect()
    }

    /// Number of leaf cells, without allocating.
    pub fn cell_count(&self) -> usize {
        if self.is_single_cell() {
            1
        } else {
            self.cells.iter().map(|c| c.cell_count()).sum()
        }
    }

    /// The immediate child containing `position`, or this grid itself if it
    /// is a single cell.
    ///
    /// This looks one level down only. A position on an internal boundary
    /// resolves to the cell that starts there.
    pub fn find_cell_at_position(&self, position: Quantity<U>) -> Result<&Grid1d<U>, GridError> {
        if !self.domain.includes(position) {
            return Err(GridError::out_of_domain(position, &self.domain));
        }
        if self.is_single_cell() {
            return Ok(self);
        }
        Ok(&self.cells[self.find_cell_index(position)])
    }

    /// Mutable variant of [`Grid1d::find_cell_at_position`], for subdividing
    /// the cell that was found.
    pub fn find_cell_at_position_mut(
        &mut self,
        position: Quantity<U>,
    ) -> Result<&mut Grid1d<U>, GridError> {
        if !self.domain.includes(position) {
            return Err(GridError::out_of_domain(position, &self.domain));
        }
        if self.is_single_cell() {
            return Ok(self);
        }
        let index = self.find_cell_index(position);
        Ok(&mut self.cells[index])
    }

    /// Straight segment spanning this cell on the original curve.
    ///
    /// The cell bounds are first expressed as fractions of the curve domain,
    /// which stays fixed while cells are split, and the curve is sampled at
    /// those fractions. Without a curve the segment lies on the X axis.
    pub fn get_cell_geometry(&self) -> Line<U> {
        let Some(curve) = &self.context.curve else {
            return Line::along_x_axis(&self.domain);
        };

        let curve_domain = &self.context.curve_domain;
        let t1 = curve_domain.map_from_domain(self.domain.min());
        let t2 = curve_domain.map_from_domain(self.domain.max());
        Line::new(curve.point_at(t1), curve.point_at(t2))
    }
}
