//! Rod cutting: find the most profitable way to cut a rod into segments.
//!
//! # Problem
//!
//! Given a rod of integer length `L` and a [`PriceTable`] where a segment of
//! length `j` sells for `price(j)`, choose segment lengths summing to `L`
//! that maximize the total sale price. The optimum has optimal substructure:
//!
//! ```text
//! best(0) = 0
//! best(L) = max over j in 1..=L of price(j) + best(L - j)
//! ```
//!
//! # Solvers
//!
//! - [`bottom_up`] — tabulation, fills `best(0)..=best(L)` in increasing order
//! - [`top_down`] — recursion with a per-call memo; depth is bounded by
//!   [`Config::max_depth`], so prefer [`bottom_up`] for very long rods
//!
//! Both return the same [`CutPlan`] for the same input. Each solve owns its
//! table or memo, so concurrent solves share nothing.
//!
//! # Tie-break
//!
//! Candidates are compared with strict `>` in ascending order of the first
//! cut `j`, so the smallest first cut reaching the maximum wins. The first
//! candidate (`j = 1`) is always accepted, which keeps `sum(cuts) == L` even
//! when every decomposition is worth zero.
//!
//! # Degenerate input and price coverage
//!
//! A zero length or an empty price table returns [`CutPlan::uncut`]: no
//! cuts, no profit. Otherwise, if the table does not price every segment
//! length up to `L`, [`Config::coverage`] decides:
//!
//! - [`CoveragePolicy::Reject`] — fail with [`Error::PriceCoverageGap`]
//!   before any work is done (the default)
//! - [`CoveragePolicy::Unpriced`] — unpriced segments are worth zero but
//!   remain legal cuts
//!
//! # Observer Events
//!
//! The solvers emit one [`Event`] per subproblem visit:
//!
//! - [`Event::Solved`] — the plan for a length was finalized (once per length)
//! - [`Event::Reused`] — the top-down solver answered from its memo
//!
//! Observers can return [`Action::StopEarly`] to halt the solve, which then
//! returns [`Error::StoppedByObserver`].

mod action;
mod best;
mod config;
mod error;
mod event;
mod memo;
mod plan;
mod pricing;
mod strategy;
mod table;


pub use action::Action;
pub use config::{Config, ConfigError, CoveragePolicy};
pub use error::Error;
pub use event::Event;
pub use plan::CutPlan;
pub use strategy::Strategy;

use rodcut_core::{Observer, PriceTable, RodLength};

use pricing::Pricing;

/// Finds the most profitable cuts by filling a table from length 0 upward.
///
/// The observer receives an [`Event::Solved`] for every length `1..=length`.
/// See the [module docs](self) for tie-break and coverage rules.
///
/// # Errors
///
/// Returns an error if the price table does not cover `length` under
/// [`CoveragePolicy::Reject`], if the table for `length` cannot be
/// allocated, or if the observer stops the solve.
pub fn bottom_up<Obs>(
    length: RodLength,
    prices: &PriceTable,
    config: &Config,
    observer: Obs,
) -> Result<CutPlan, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let Some(pricing) = Pricing::prepare(length, prices, config.coverage())? else {
        return Ok(CutPlan::uncut());
    };

    table::tabulate(length.get(), &pricing, observer)
}

/// Finds the most profitable cuts by tabulation, without observer support.
///
/// This is a convenience wrapper around [`bottom_up`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the price table does not cover `length` under
/// [`CoveragePolicy::Reject`].
pub fn bottom_up_unobserved(
    length: RodLength,
    prices: &PriceTable,
    config: &Config,
) -> Result<CutPlan, Error> {
    bottom_up(length, prices, config, ())
}

/// Finds the most profitable cuts by memoized recursion.
///
/// The observer receives an [`Event::Solved`] the first time each length is
/// solved and an [`Event::Reused`] each time a memoized length is requested
/// again. See the [module docs](self) for tie-break and coverage rules.
///
/// # Errors
///
/// Returns an error if the price table does not cover `length` under
/// [`CoveragePolicy::Reject`], if `length` exceeds [`Config::max_depth`],
/// if the memo cannot be allocated, or if the observer stops the solve.
pub fn top_down<Obs>(
    length: RodLength,
    prices: &PriceTable,
    config: &Config,
    observer: Obs,
) -> Result<CutPlan, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let Some(pricing) = Pricing::prepare(length, prices, config.coverage())? else {
        return Ok(CutPlan::uncut());
    };

    if length.get() > config.max_depth() {
        return Err(Error::DepthLimit {
            length: length.get(),
            max_depth: config.max_depth(),
        });
    }

    memo::memoize(length.get(), &pricing, observer)
}

/// Finds the most profitable cuts by memoized recursion, without observer support.
///
/// This is a convenience wrapper around [`top_down`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the price table does not cover `length` under
/// [`CoveragePolicy::Reject`], or if `length` exceeds [`Config::max_depth`].
pub fn top_down_unobserved(
    length: RodLength,
    prices: &PriceTable,
    config: &Config,
) -> Result<CutPlan, Error> {
    top_down(length, prices, config, ())
}

/// Solves with the given strategy.
///
/// # Errors
///
/// Returns the errors of [`bottom_up`] or [`top_down`].
pub fn solve<Obs>(
    strategy: Strategy,
    length: RodLength,
    prices: &PriceTable,
    config: &Config,
    observer: Obs,
) -> Result<CutPlan, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    match strategy {
        Strategy::BottomUp => bottom_up(length, prices, config, observer),
        Strategy::TopDown => top_down(length, prices, config, observer),
    }
}

/// Validates raw input and solves it bottom-up with the default [`Config`].
///
/// # Examples
///
/// ```
/// use rodcut_solvers::rod_cutting::optimize;
///
/// let plan = optimize(3, &[1.0, 3.0, 8.0]).unwrap();
/// assert_eq!(plan.max_profit(), 8.0);
/// assert_eq!(plan.cuts(), &[3]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] for a negative length,
/// [`Error::InvalidPrices`] for a NaN, infinite, or negative price, and
/// [`Error::PriceCoverageGap`] if a needed segment length has no price.
pub fn optimize(length: i64, prices: &[f64]) -> Result<CutPlan, Error> {
    let length = RodLength::try_from(length)?;
    let prices = PriceTable::try_from(prices)?;
    bottom_up_unobserved(length, &prices, &Config::default())
}
