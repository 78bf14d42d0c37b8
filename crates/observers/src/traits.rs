//! Capability traits for generic observers.
//!
//! These traits abstract over solver event and action types, so an observer
//! can be written once and used wherever the capabilities it needs exist.
//!
//! # Event traits
//!
//! - [`HasSubproblem`] — events that describe a solved or reused subproblem
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rodcut_core::Observer;
//! use rodcut_observers::traits::{CanStopEarly, HasSubproblem};
//!
//! /// Stops once some subproblem is worth at least `target`.
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasSubproblem, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.max_profit() >= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use rodcut_solvers::rod_cutting;

/// An event that describes one subproblem of a rod-cutting solve.
pub trait HasSubproblem {
    /// Returns the rod length of the subproblem.
    fn length(&self) -> usize;

    /// Returns the best profit for that length.
    fn max_profit(&self) -> f64;

    /// Returns the number of cuts in the best plan for that length.
    fn number_of_cuts(&self) -> usize;

    /// Returns true if the answer was reused rather than computed.
    fn is_reused(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasSubproblem for rod_cutting::Event<'_> {
    fn length(&self) -> usize {
        rod_cutting::Event::length(self)
    }

    fn max_profit(&self) -> f64 {
        self.plan().max_profit()
    }

    fn number_of_cuts(&self) -> usize {
        self.plan().number_of_cuts()
    }

    fn is_reused(&self) -> bool {
        rod_cutting::Event::is_reused(self)
    }
}

impl CanStopEarly for rod_cutting::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
