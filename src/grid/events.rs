//! Change notification for grid restructuring.
//!
//! Listeners are invoked synchronously, on the node where the public split or
//! divide call was made, after the tree has been restructured. Ancestors are
//! not notified; callers that need propagation subscribe at the level they
//! care about.

use std::panic::{self, AssertUnwindSafe};

use qtty::Unit;
use tracing::trace;

use super::Grid1d;
use crate::{generate_id, Id};

/// Handle returned by [`Grid1d::subscribe`], used to unsubscribe.
pub type ListenerId = Id;

type Listener<U> = Box<dyn FnMut(&Grid1d<U>)>;

/// Listeners registered on one grid node, in subscription order.
pub(super) struct ListenerRegistry<U: Unit> {
    entries: Vec<(ListenerId, Listener<U>)>,
}

impl<U: Unit> Default for ListenerRegistry<U> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<U: Unit> ListenerRegistry<U> {
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, listener: Listener<U>) -> ListenerId {
        let id = generate_id();
        self.entries.push((id.clone(), listener));
        id
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| entry_id != id);
        self.entries.len() != before
    }

    fn dispatch(&mut self, sender: &Grid1d<U>) {
        for (id, listener) in &mut self.entries {
            trace!(listener = %id, domain = %sender.domain, "notifying grid listener");
            listener(sender);
        }
    }
}

impl<U: Unit> Grid1d<U> {
    /// Registers `listener` to be called each time this node is restructured
    /// by one of its own split or divide calls.
    ///
    /// Listeners on a cell are dropped when a split through one of its
    /// ancestors replaces that cell with its own children.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use gridline::grid::Grid1d;
    /// use qtty::{Meter, Quantity};
    ///
    /// let mut grid = Grid1d::<Meter>::new(Quantity::new(10.0)).unwrap();
    /// let fired = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&fired);
    /// grid.subscribe(move |_| counter.set(counter.get() + 1));
    ///
    /// grid.divide_by_count(4).unwrap();
    /// assert_eq!(fired.get(), 1);
    /// ```
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Grid1d<U>) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Removes a listener. Returns false if `id` was not registered here.
    pub fn unsubscribe(&mut self, id: &str) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Invokes every listener of this node with the node itself.
    ///
    /// A panicking listener aborts the remaining listeners and unwinds out of
    /// the triggering call; the restructuring has already been applied. The
    /// registry is put back before unwinding, so a caller that catches the
    /// panic keeps every subscription.
    pub(super) fn notify_changed(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let mut listeners = std::mem::take(&mut self.listeners);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| listeners.dispatch(self)));
        self.listeners = listeners;
        if let Err(payload) = outcome {
            panic::resume_unwind(payload);
        }
    }
}
