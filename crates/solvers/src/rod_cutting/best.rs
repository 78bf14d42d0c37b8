/// A candidate first cut and the total profit it leads to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Choice {
    pub(super) first_cut: usize,
    pub(super) profit: f64,
}

/// Tracks the best first cut offered so far.
///
/// The first offer is always kept. Later offers replace it only with a
/// strictly greater profit, so when offers arrive in ascending order of
/// `first_cut`, the smallest first cut reaching the maximum wins.
pub(super) struct Best {
    choice: Choice,
}

impl Best {
    /// Starts tracking with the first candidate.
    pub(super) fn new(first_cut: usize, profit: f64) -> Self {
        Self {
            choice: Choice { first_cut, profit },
        }
    }

    /// Replaces the current choice if `profit` is strictly greater.
    pub(super) fn offer(&mut self, first_cut: usize, profit: f64) {
        if profit > self.choice.profit {
            self.choice = Choice { first_cut, profit };
        }
    }

    pub(super) fn into_choice(self) -> Choice {
        self.choice
    }
}
