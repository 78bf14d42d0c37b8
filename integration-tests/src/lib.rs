pub mod reference {
    /// Best profit for a rod, found by trying every way to cut it.
    ///
    /// A rod of length `L` has `2^(L-1)` ordered cuttings, so this is only
    /// usable for short rods. It shares no code with the solvers, which makes
    /// it a useful oracle. Segments beyond `prices` are worth zero.
    pub fn exhaustive_max_profit(length: usize, prices: &[f64]) -> f64 {
        assert!(length <= 20, "exhaustive search is exponential in length");

        if length == 0 {
            return 0.0;
        }

        // Bit `i` of `mask` set means "cut after unit i + 1".
        let mut best = f64::NEG_INFINITY;
        for mask in 0_u32..(1 << (length - 1)) {
            let mut profit = 0.0;
            let mut start = 0;
            for unit in 1..=length {
                let cut_here = unit == length || mask & (1 << (unit - 1)) != 0;
                if cut_here {
                    profit += price(prices, unit - start);
                    start = unit;
                }
            }
            best = best.max(profit);
        }
        best
    }

    /// Total price of the given segments; segments beyond `prices` are worth zero.
    pub fn price_of(cuts: &[usize], prices: &[f64]) -> f64 {
        cuts.iter().map(|&segment| price(prices, segment)).sum()
    }

    fn price(prices: &[f64], segment: usize) -> f64 {
        prices.get(segment - 1).copied().unwrap_or(0.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn exhaustive_matches_textbook() {
            assert_eq!(exhaustive_max_profit(5, &[2.0, 5.0, 7.0, 8.0, 10.0]), 12.0);
            assert_eq!(exhaustive_max_profit(3, &[1.0, 3.0, 8.0]), 8.0);
            assert_eq!(exhaustive_max_profit(0, &[1.0]), 0.0);
        }

        #[test]
        fn price_of_sums_segments() {
            assert_eq!(price_of(&[1, 2, 2], &[2.0, 5.0]), 12.0);
            assert_eq!(price_of(&[3], &[2.0, 5.0]), 0.0);
        }
    }
}
