//! An observer that caps the work a solve may do.

use rodcut_core::Observer;

use crate::traits::{CanStopEarly, HasSubproblem};

/// Stops a solve once it has visited more subproblems than allowed.
///
/// Every event counts as one visit: a freshly solved length or, for the
/// top-down solver, a memo hit. Bottom-up solves visit exactly `L`
/// subproblems for a rod of length `L`; top-down solves visit roughly `L²/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    limit: usize,
    visited: usize,
}

impl Budget {
    /// Creates a budget allowing `limit` visits.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { limit, visited: 0 }
    }

    /// Returns the number of visits observed so far.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Returns true once the budget is spent.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.visited >= self.limit
    }
}

impl<E: HasSubproblem, A: CanStopEarly> Observer<E, A> for Budget {
    fn observe(&mut self, _event: &E) -> Option<A> {
        if self.is_exhausted() {
            return Some(A::stop_early());
        }
        self.visited += 1;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rodcut_core::{PriceTable, RodLength};
    use rodcut_solvers::rod_cutting::{self, Action, Config, Error, Event};

    fn prices() -> PriceTable {
        PriceTable::new(vec![2.0, 5.0, 7.0, 8.0, 10.0]).unwrap()
    }

    #[test]
    fn enough_budget_lets_the_solve_finish() {
        let mut budget = Budget::new(5);
        let observer = |event: &Event<'_>| -> Option<Action> { budget.observe(event) };

        let plan = rod_cutting::bottom_up(RodLength::new(5), &prices(), &Config::default(), observer)
            .expect("should solve");

        assert_relative_eq!(plan.max_profit(), 12.0);
        assert_eq!(budget.visited(), 5);
        assert!(budget.is_exhausted());
    }

    #[test]
    fn spent_budget_stops_the_solve() {
        let result = rod_cutting::bottom_up(
            RodLength::new(5),
            &prices(),
            &Config::default(),
            Budget::new(2),
        );

        assert_eq!(result, Err(Error::StoppedByObserver { length: 3 }));
    }

    #[test]
    fn memo_hits_count_against_the_budget() {
        // Top-down on length 5 makes 5 solves and 6 memo hits.
        let mut budget = Budget::new(100);
        let observer = |event: &Event<'_>| -> Option<Action> { budget.observe(event) };

        rod_cutting::top_down(RodLength::new(5), &prices(), &Config::default(), observer)
            .expect("should solve");

        assert_eq!(budget.visited(), 11);
    }
}
