//! Logging observer backed by `tracing`.

use rodcut_core::Observer;

use crate::traits::HasSubproblem;

/// Forwards solver events to `tracing`.
///
/// Solved subproblems are logged at `debug` and memo hits at `trace`, both
/// under the `rodcut::solve` target, tagged with the strategy name. The
/// observer never steers the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    strategy: &'static str,
    solved: usize,
    reused: usize,
}

impl TraceObserver {
    /// Creates an observer that tags every record with `strategy`.
    #[must_use]
    pub fn new(strategy: &'static str) -> Self {
        Self {
            strategy,
            solved: 0,
            reused: 0,
        }
    }

    /// Returns how many subproblems were solved.
    #[must_use]
    pub fn solved(&self) -> usize {
        self.solved
    }

    /// Returns how many subproblems were answered from a memo.
    #[must_use]
    pub fn reused(&self) -> usize {
        self.reused
    }

    /// Logs a one-line summary of the solve at `info`.
    pub fn summarize(&self) {
        tracing::info!(
            target: "rodcut::solve",
            strategy = self.strategy,
            solved = self.solved,
            reused = self.reused,
            "solve finished"
        );
    }
}

impl<E: HasSubproblem, A> Observer<E, A> for TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.is_reused() {
            self.reused += 1;
            tracing::trace!(
                target: "rodcut::solve",
                strategy = self.strategy,
                length = event.length(),
                max_profit = event.max_profit(),
                "reused subproblem"
            );
        } else {
            self.solved += 1;
            tracing::debug!(
                target: "rodcut::solve",
                strategy = self.strategy,
                length = event.length(),
                max_profit = event.max_profit(),
                cuts = event.number_of_cuts(),
                "solved subproblem"
            );
        }
        None
    }
}
