use rodcut_core::Observer;

use super::{Action, CutPlan, Error, Event, best::Best, pricing::Pricing};

/// Top-down rod cutting.
///
/// The memo lives for one call. Entry 0 is the uncut base case; an entry
/// for any other length is filled exactly once, when that length is first
/// solved, and never changes afterwards.
pub(super) fn memoize<Obs>(
    length: usize,
    pricing: &Pricing<'_>,
    observer: Obs,
) -> Result<CutPlan, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut entries: Vec<Option<CutPlan>> = Vec::new();
    let size = length
        .checked_add(1)
        .filter(|&size| entries.try_reserve_exact(size).is_ok())
        .ok_or(Error::TableTooLarge { length })?;
    entries.push(Some(CutPlan::uncut()));
    entries.resize(size, None);

    let mut memo = Memo {
        pricing,
        entries,
        observer,
    };
    memo.solve(length)?;

    Ok(memo.entries.pop().flatten().unwrap_or_default())
}

struct Memo<'m, 'p, Obs> {
    pricing: &'m Pricing<'p>,
    entries: Vec<Option<CutPlan>>,
    observer: Obs,
}

impl<Obs> Memo<'_, '_, Obs>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    /// Solves `length`, memoizing its plan, and returns its maximum profit.
    fn solve(&mut self, length: usize) -> Result<f64, Error> {
        if length == 0 {
            return Ok(0.0);
        }

        if let Some(plan) = &self.entries[length] {
            let event = Event::Reused { length, plan };
            if let Some(Action::StopEarly) = self.observer.observe(&event) {
                return Err(Error::StoppedByObserver { length });
            }
            return Ok(plan.max_profit());
        }

        let mut best = Best::new(1, self.pricing.price(1) + self.solve(length - 1)?);
        for first_cut in 2..=length {
            let rest = self.solve(length - first_cut)?;
            best.offer(first_cut, self.pricing.price(first_cut) + rest);
        }

        let choice = best.into_choice();
        let Some(rest) = &self.entries[length - choice.first_cut] else {
            unreachable!("every smaller length is memoized before its parent finishes");
        };
        let plan = CutPlan::prepend(choice, rest);

        let event = Event::Solved {
            length,
            plan: &plan,
        };
        if let Some(Action::StopEarly) = self.observer.observe(&event) {
            return Err(Error::StoppedByObserver { length });
        }

        let profit = plan.max_profit();
        self.entries[length] = Some(plan);
        Ok(profit)
    }
}
