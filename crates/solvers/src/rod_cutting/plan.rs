use super::best::Choice;

/// The most profitable way to cut a rod.
///
/// `cuts` lists segment lengths in the order they were chosen: the first
/// cut, then the plan for the remainder. Every cut is at least 1 and the cuts
/// sum to the rod length. An uncut plan (no cuts, zero profit) answers a
/// zero-length rod or an empty price table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CutPlan {
    max_profit: f64,
    cuts: Vec<usize>,
    number_of_cuts: usize,
}

impl CutPlan {
    /// Returns the base-case plan: no cuts and no profit.
    #[must_use]
    pub fn uncut() -> Self {
        Self {
            max_profit: 0.0,
            cuts: Vec::new(),
            number_of_cuts: 0,
        }
    }

    /// Builds a plan that makes `choice.first_cut` and then follows `rest`.
    pub(super) fn prepend(choice: Choice, rest: &CutPlan) -> Self {
        let mut cuts = Vec::with_capacity(rest.cuts.len() + 1);
        cuts.push(choice.first_cut);
        cuts.extend_from_slice(&rest.cuts);

        Self {
            max_profit: choice.profit,
            number_of_cuts: cuts.len(),
            cuts,
        }
    }

    /// Returns the total sale price of the segments.
    #[must_use]
    pub fn max_profit(&self) -> f64 {
        self.max_profit
    }

    /// Returns the segment lengths in the order they were chosen.
    #[must_use]
    pub fn cuts(&self) -> &[usize] {
        &self.cuts
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn number_of_cuts(&self) -> usize {
        self.number_of_cuts
    }

    /// Returns the rod length this plan cuts, the sum of its segments.
    #[must_use]
    pub fn length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// Consumes the plan and returns its segment lengths.
    #[must_use]
    pub fn into_cuts(self) -> Vec<usize> {
        self.cuts
    }
}

impl Default for CutPlan {
    fn default() -> Self {
        Self::uncut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn uncut_is_empty() {
        let plan = CutPlan::uncut();

        assert_relative_eq!(plan.max_profit(), 0.0);
        assert!(plan.cuts().is_empty());
        assert_eq!(plan.number_of_cuts(), 0);
        assert_eq!(plan.length(), 0);
    }

    #[test]
    fn prepend_puts_first_cut_in_front() {
        let rest = CutPlan::prepend(
            Choice {
                first_cut: 2,
                profit: 5.0,
            },
            &CutPlan::uncut(),
        );
        let plan = CutPlan::prepend(
            Choice {
                first_cut: 1,
                profit: 7.0,
            },
            &rest,
        );

        assert_eq!(plan.cuts(), &[1, 2]);
        assert_eq!(plan.number_of_cuts(), 2);
        assert_eq!(plan.length(), 3);
        assert_relative_eq!(plan.max_profit(), 7.0);

        // The remainder's plan is left untouched.
        assert_eq!(rest.cuts(), &[2]);
    }

    #[test]
    fn into_cuts_hands_over_segments() {
        let plan = CutPlan::prepend(
            Choice {
                first_cut: 3,
                profit: 8.0,
            },
            &CutPlan::uncut(),
        );

        assert_eq!(plan.into_cuts(), vec![3]);
        assert!(CutPlan::uncut().into_cuts().is_empty());
    }
}
