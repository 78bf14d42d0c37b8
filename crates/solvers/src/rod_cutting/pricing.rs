use rodcut_core::{PriceTable, RodLength};

use super::{CoveragePolicy, Error};

/// Segment prices as seen by a solver, with the coverage policy applied.
pub(super) struct Pricing<'p> {
    prices: &'p PriceTable,
}

impl<'p> Pricing<'p> {
    /// Checks the input before any table is built.
    ///
    /// Returns `Ok(None)` for degenerate input (zero length or no prices),
    /// whose answer is the uncut plan.
    ///
    /// # Errors
    ///
    /// Returns `Error::PriceCoverageGap` if `policy` is `Reject` and some
    /// segment length in `1..=length` has no price.
    pub(super) fn prepare(
        length: RodLength,
        prices: &'p PriceTable,
        policy: CoveragePolicy,
    ) -> Result<Option<Self>, Error> {
        if length.is_zero() || prices.is_empty() {
            return Ok(None);
        }

        if policy == CoveragePolicy::Reject && !prices.covers(length.get()) {
            return Err(Error::PriceCoverageGap {
                length: length.get(),
                covered: prices.coverage(),
            });
        }

        Ok(Some(Self { prices }))
    }

    /// Returns the price of a segment, zero if unpriced.
    pub(super) fn price(&self, segment: usize) -> f64 {
        self.prices.price(segment).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn table(prices: &[f64]) -> PriceTable {
        PriceTable::try_from(prices).unwrap()
    }

    #[test]
    fn degenerate_input_needs_no_pricing() {
        let prices = table(&[1.0]);
        let empty = PriceTable::empty();

        for policy in [CoveragePolicy::Reject, CoveragePolicy::Unpriced] {
            assert!(matches!(
                Pricing::prepare(RodLength::ZERO, &prices, policy),
                Ok(None)
            ));
            assert!(matches!(
                Pricing::prepare(RodLength::new(9), &empty, policy),
                Ok(None)
            ));
        }
    }

    #[test]
    fn reject_fails_on_gap() {
        let prices = table(&[1.0, 2.0]);
        let result = Pricing::prepare(RodLength::new(3), &prices, CoveragePolicy::Reject);

        assert!(matches!(
            result,
            Err(Error::PriceCoverageGap {
                length: 3,
                covered: 2
            })
        ));
    }

    #[test]
    fn unpriced_segments_are_worth_zero() {
        let prices = table(&[1.0, 2.0]);
        let pricing = Pricing::prepare(RodLength::new(4), &prices, CoveragePolicy::Unpriced)
            .unwrap()
            .unwrap();

        assert_relative_eq!(pricing.price(2), 2.0);
        assert_relative_eq!(pricing.price(3), 0.0);
        assert_relative_eq!(pricing.price(4), 0.0);
    }
}
