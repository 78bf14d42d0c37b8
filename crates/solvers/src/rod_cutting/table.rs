use rodcut_core::Observer;

use super::{Action, CutPlan, Error, Event, best::Best, pricing::Pricing};

/// Bottom-up rod cutting.
///
/// `table[size]` holds the optimal plan for a rod of length `size`. Entry 0
/// is the uncut base case; every later entry reads only smaller ones, so
/// filling in increasing order means each lookup is already final.
pub(super) fn tabulate<Obs>(
    length: usize,
    pricing: &Pricing<'_>,
    mut observer: Obs,
) -> Result<CutPlan, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut table: Vec<CutPlan> = Vec::new();
    length
        .checked_add(1)
        .and_then(|entries| table.try_reserve_exact(entries).ok())
        .ok_or(Error::TableTooLarge { length })?;
    table.push(CutPlan::uncut());

    for size in 1..=length {
        let mut best = Best::new(1, pricing.price(1) + table[size - 1].max_profit());
        for first_cut in 2..=size {
            let profit = pricing.price(first_cut) + table[size - first_cut].max_profit();
            best.offer(first_cut, profit);
        }

        let choice = best.into_choice();
        let plan = CutPlan::prepend(choice, &table[size - choice.first_cut]);

        let event = Event::Solved {
            length: size,
            plan: &plan,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Err(Error::StoppedByObserver { length: size });
        }

        table.push(plan);
    }

    Ok(table.pop().unwrap_or_default())
}
