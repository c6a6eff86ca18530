//! Write access to view state, whether held directly or behind a reactive signal.
//!
//! The list and login flows are written against [`StateStore`], so the Dioxus views and
//! the native tests drive the same code: tests hand in the plain state value, the views
//! hand in their `Signal`. An update never spans an await point.

use crate::client::{list::ListState, session::SessionContext};

pub trait StateStore<T> {
    /// Runs `f` with exclusive access to the state.
    fn update<O>(&mut self, f: impl FnOnce(&mut T) -> O) -> O;
}

impl<T> StateStore<ListState<T>> for ListState<T> {
    fn update<O>(&mut self, f: impl FnOnce(&mut ListState<T>) -> O) -> O {
        f(self)
    }
}

impl<S> StateStore<SessionContext<S>> for SessionContext<S> {
    fn update<O>(&mut self, f: impl FnOnce(&mut SessionContext<S>) -> O) -> O {
        f(self)
    }
}
