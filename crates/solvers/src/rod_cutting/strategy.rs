use std::fmt;

/// Which solver computes the plan.
///
/// Both strategies return the same plan for the same input; they differ in
/// how subproblems are visited and in recursion depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Iterative tabulation, see [`bottom_up`](super::bottom_up).
    #[default]
    BottomUp,

    /// Memoized recursion, see [`top_down`](super::top_down).
    TopDown,
}

impl Strategy {
    /// Every strategy, in a fixed order.
    pub const ALL: [Self; 2] = [Self::BottomUp, Self::TopDown];

    /// Returns a short, stable name for the strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BottomUp => "bottom-up",
            Self::TopDown => "top-down",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
