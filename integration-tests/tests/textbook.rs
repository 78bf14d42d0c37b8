use approx::assert_relative_eq;

use integration_tests::reference::price_of;
use rodcut_core::{PriceTable, RodLength};
use rodcut_observers::budget::Budget;
use rodcut_solvers::rod_cutting::{self, Config, CutPlan, Error, Strategy, optimize};

/// Solves with every strategy and checks they agree before returning the plan.
fn solve_all(length: usize, prices: &[f64]) -> CutPlan {
    let table = PriceTable::try_from(prices).expect("valid prices");
    let [tabulated, memoized] = Strategy::ALL.map(|strategy| {
        rod_cutting::solve(
            strategy,
            RodLength::new(length),
            &table,
            &Config::default(),
            (),
        )
        .expect("should solve")
    });

    assert_eq!(tabulated, memoized);
    tabulated
}

#[test]
fn basic_case() {
    let prices = [2.0, 5.0, 7.0, 8.0, 10.0];
    let plan = solve_all(5, &prices);

    assert_relative_eq!(plan.max_profit(), 12.0);
    assert_eq!(plan.length(), 5);
    assert_relative_eq!(price_of(plan.cuts(), &prices), 12.0);
}

#[test]
fn optimal_not_to_cut() {
    let plan = solve_all(3, &[1.0, 3.0, 8.0]);

    assert_relative_eq!(plan.max_profit(), 8.0);
    assert_eq!(plan.cuts(), &[3]);
    assert_eq!(plan.number_of_cuts(), 1);
}

#[test]
fn uniform_cuts() {
    let plan = solve_all(4, &[3.0, 5.0, 6.0, 7.0]);

    assert_relative_eq!(plan.max_profit(), 12.0);
    assert_eq!(plan.cuts(), &[1, 1, 1, 1]);
    assert_eq!(plan.number_of_cuts(), 4);
}

#[test]
fn optimize_matches_typed_solvers() {
    let prices = [1.0, 5.0, 8.0, 9.0, 10.0, 17.0, 17.0, 20.0];

    for length in 0..=8 {
        let raw = optimize(i64::try_from(length).unwrap(), &prices).expect("should solve");
        assert_eq!(raw, solve_all(length, &prices));
    }
}

#[test]
fn base_cases() {
    assert_eq!(optimize(0, &[5.0, 6.0]), Ok(CutPlan::uncut()));
    assert_eq!(optimize(0, &[]), Ok(CutPlan::uncut()));
    assert_eq!(optimize(9, &[]), Ok(CutPlan::uncut()));
}

#[test]
fn invalid_input_is_reported() {
    assert!(matches!(optimize(-4, &[1.0]), Err(Error::InvalidLength(_))));
    assert!(matches!(
        optimize(1, &[f64::NAN]),
        Err(Error::InvalidPrices(_))
    ));
    assert!(matches!(
        optimize(1, &[-1.0]),
        Err(Error::InvalidPrices(_))
    ));
}

#[test]
fn budget_stops_both_strategies() {
    let table = PriceTable::new(vec![2.0, 5.0, 7.0, 8.0, 10.0]).unwrap();

    for strategy in Strategy::ALL {
        let result = rod_cutting::solve(
            strategy,
            RodLength::new(5),
            &table,
            &Config::default(),
            Budget::new(1),
        );

        assert_eq!(result, Err(Error::StoppedByObserver { length: 2 }));
    }
}
