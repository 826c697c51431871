//! Hierarchical one-dimensional grids.
//!
//! A [`Grid1d`] owns a closed [`Interval`] domain and, once subdivided, an
//! ordered list of child grids whose domains partition it contiguously. The
//! tree is restructured in place by the split and divide operations and read
//! back through [`Grid1d::get_cells`] and [`Grid1d::get_cell_geometry`].
//!
//! # Example
//!
//! ```
//! use gridline::grid::{FixedDivisionMode, Grid1d};
//! use qtty::{Meter, Quantity};
//!
//! let mut grid = Grid1d::<Meter>::new(Quantity::new(10.0)).unwrap();
//! grid.divide_by_fixed_length(Quantity::new(3.0), FixedDivisionMode::RemainderAtEnd, 0)
//!     .unwrap();
//!
//! let lengths: Vec<f64> = grid
//!     .get_cells()
//!     .iter()
//!     .map(|cell| cell.domain().length().value())
//!     .collect();
//! assert_eq!(lengths, vec![3.0, 3.0, 3.0, 1.0]);
//! ```

mod cells;
mod divide;
mod error;
mod events;
mod modes;
mod split;


pub use error::GridError;
pub use events::ListenerId;
pub use modes::{EvenDivisionMode, FixedDivisionMode};

use std::fmt;
use std::sync::Arc;

use qtty::{Quantity, Unit};

use crate::domain::Interval;
use crate::geometry::Curve;
use crate::settings::GridSettings;
use events::ListenerRegistry;

/// Upper bound on the number of cells a single divide call may create.
///
/// Division requests that would need more cells than this are rejected
/// before anything is allocated.
pub const MAX_CELL_COUNT: usize = 1_000_000;

/// Read-only state shared by every node of one grid tree.
///
/// `curve_domain` is the root domain at the time the curve was attached; it
/// never changes, so any cell can map its own bounds back onto the curve.
struct GridContext<U: Unit> {
    curve: Option<Arc<dyn Curve<U>>>,
    curve_domain: Interval<U>,
    settings: GridSettings,
}

/// A node in a recursively subdivided one-dimensional grid.
///
/// An empty child list means the node is a single cell. Otherwise the
/// children are sorted, contiguous, and their union is exactly `domain`.
pub struct Grid1d<U: Unit> {
    domain: Interval<U>,
    cells: Vec<Grid1d<U>>,
    context: Arc<GridContext<U>>,
    listeners: ListenerRegistry<U>,
}

impl<U: Unit> Grid1d<U> {
    /// Creates a grid over `[0, length]` lying along the X axis.
    pub fn new(length: Quantity<U>) -> Result<Self, GridError> {
        Self::from_domain(Interval::new(Quantity::new(0.0), Self::checked_length(length)?))
    }

    /// Creates a grid over an arbitrary domain lying along the X axis.
    pub fn from_domain(domain: Interval<U>) -> Result<Self, GridError> {
        Self::checked_length(domain.length())?;
        Ok(Self::root(domain, None))
    }

    /// Creates a grid spanning `[0, curve.length()]` that samples `curve` for
    /// cell geometry.
    pub fn from_curve<C: Curve<U> + 'static>(curve: C) -> Result<Self, GridError> {
        Self::from_shared_curve(Arc::new(curve))
    }

    /// Like [`Grid1d::from_curve`] for a curve that is already shared.
    pub fn from_shared_curve(curve: Arc<dyn Curve<U>>) -> Result<Self, GridError> {
        let length = Self::checked_length(curve.length())?;
        let domain = Interval::new(Quantity::new(0.0), length);
        Ok(Self::root(domain, Some(curve)))
    }

    /// Replaces the settings of this grid and every cell below it.
    pub fn with_settings(mut self, settings: GridSettings) -> Self {
        let context = Arc::new(GridContext {
            curve: self.context.curve.clone(),
            curve_domain: self.context.curve_domain,
            settings,
        });
        self.set_context(&context);
        self
    }

    fn set_context(&mut self, context: &Arc<GridContext<U>>) {
        self.context = Arc::clone(context);
        for cell in &mut self.cells {
            cell.set_context(context);
        }
    }

    fn root(domain: Interval<U>, curve: Option<Arc<dyn Curve<U>>>) -> Self {
        let context = GridContext {
            curve,
            curve_domain: domain,
            settings: GridSettings::default(),
        };
        Self {
            domain,
            cells: Vec::new(),
            context: Arc::new(context),
            listeners: ListenerRegistry::default(),
        }
    }

    /// Builds a single-cell child sharing this grid's curve context.
    fn child(&self, domain: Interval<U>) -> Self {
        Self {
            domain,
            cells: Vec::new(),
            context: Arc::clone(&self.context),
            listeners: ListenerRegistry::default(),
        }
    }

    fn checked_length(length: Quantity<U>) -> Result<Quantity<U>, GridError> {
        let value = length.value();
        if value.is_finite() && value > 0.0 {
            Ok(length)
        } else {
            Err(GridError::InvalidLength(value))
        }
    }

    pub const fn domain(&self) -> Interval<U> {
        self.domain
    }

    /// Returns true if this grid has no subdivisions.
    pub fn is_single_cell(&self) -> bool {
        self.cells.is_empty()
    }

    /// Immediate child cells; empty for a single cell.
    ///
    /// Use [`Grid1d::get_cells`] for the leaf cells of the whole subtree.
    pub fn children(&self) -> &[Grid1d<U>] {
        &self.cells
    }

    /// Mutable access to the immediate child at `index`, e.g. to subdivide it.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Grid1d<U>> {
        self.cells.get_mut(index)
    }

    /// The curve this grid samples for geometry, if one was attached.
    pub fn curve(&self) -> Option<&Arc<dyn Curve<U>>> {
        self.context.curve.as_ref()
    }

    /// Domain of the root grid when the curve was attached.
    pub fn curve_domain(&self) -> Interval<U> {
        self.context.curve_domain
    }

    pub fn settings(&self) -> &GridSettings {
        &self.context.settings
    }

    /// Returns true if `other` belongs to the same tree as `self`.
    pub fn shares_context_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.context, &other.context)
    }
}

/// A single cell over `[0, 1]` lying along the X axis.
impl<U: Unit> Default for Grid1d<U> {
    fn default() -> Self {
        Self::root(Interval::from_f64(0.0, 1.0), None)
    }
}

impl<U: Unit> fmt::Debug for Grid1d<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid1d")
            .field("domain", &self.domain)
            .field("cells", &self.cells)
            .field("curve", &self.context.curve)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
