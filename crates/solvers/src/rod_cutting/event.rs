use super::CutPlan;

/// Events emitted by the rod-cutting solvers.
///
/// Each event names a subproblem (a rod length) and its optimal plan.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The optimal plan for `length` was just computed.
    Solved {
        /// The subproblem length.
        length: usize,

        /// The optimal plan for that length.
        plan: &'a CutPlan,
    },

    /// The top-down solver answered `length` from its memo.
    Reused {
        /// The subproblem length.
        length: usize,

        /// The memoized plan.
        plan: &'a CutPlan,
    },
}

impl<'a> Event<'a> {
    /// Returns the subproblem length.
    #[must_use]
    pub fn length(&self) -> usize {
        match self {
            Self::Solved { length, .. } | Self::Reused { length, .. } => *length,
        }
    }

    /// Returns the plan for the subproblem.
    #[must_use]
    pub fn plan(&self) -> &'a CutPlan {
        match self {
            Self::Solved { plan, .. } | Self::Reused { plan, .. } => *plan,
        }
    }

    /// Returns true if the plan came from the memo.
    #[must_use]
    pub fn is_reused(&self) -> bool {
        matches!(self, Self::Reused { .. })
    }
}
