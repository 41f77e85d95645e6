use ratlp::R64;
use ratlp::algorithm::error::SimplexError;
use ratlp::algorithm::simplex::SimplexConfig;
use ratlp::algorithm::simplex::strategy::pivot_rule::PivotRule;
use ratlp::data::linear_program::solution::SimplexStatus;
use ratlp::data::number_types::rational::ExactRational;

use super::read;

fn bland() -> SimplexConfig {
    SimplexConfig { pivot_rule: PivotRule::Bland, ..SimplexConfig::default() }
}

fn named(names: &[&str], values: &[ExactRational]) -> Vec<(String, ExactRational)> {
    names.iter().map(|name| name.to_string()).zip(values.iter().copied()).collect()
}

#[test]
fn wyndor() {
    let problem = read("wyndor");
    assert_eq!(problem.variable_order(), &["x1", "x2"]);

    for config in [SimplexConfig::default(), bland()] {
        let result = problem.solve(&config).unwrap();
        assert_eq!(result.status(), &SimplexStatus::Optimal {
            value: R64!(36),
            variables: vec![R64!(2), R64!(6)],
        });
    }
}

#[test]
fn production() {
    let problem = read("production");
    let result = problem.solve(&SimplexConfig::default()).unwrap();

    assert_eq!(result.optimal_value(), Some(&R64!(1800)));
    let values = result.variable_values().unwrap();
    let computed = problem.named_values(values)
        .map(|(name, value)| (name.to_string(), *value))
        .collect::<Vec<_>>();
    assert_eq!(computed, named(&["P", "Q"], &[R64!(20), R64!(20)]));
}

#[test]
fn minimize() {
    // minimize -x - 2y is solved as maximize x + 2y, the reported value is that of the latter
    let problem = read("minimize");
    let result = problem.solve(&SimplexConfig::default()).unwrap();

    assert_eq!(result.status(), &SimplexStatus::Optimal {
        value: R64!(7),
        variables: vec![R64!(1), R64!(3)],
    });
}

#[test]
fn equality() {
    let problem = read("equality");
    assert_eq!(problem.nr_constraints(), 3);

    let result = problem.solve(&SimplexConfig::default()).unwrap();
    assert_eq!(result.optimal_value(), Some(&R64!(6)));
    assert_eq!(result.variable_values(), Some(&[R64!(3), R64!(3)][..]));
}

#[test]
fn unbounded() {
    let result = read("unbounded").solve(&SimplexConfig::default()).unwrap();

    assert_eq!(result.status(), &SimplexStatus::Unbounded);
    assert_eq!(
        result.message(),
        "Problem is unbounded (entering variable in column 0 can increase indefinitely).",
    );
}

#[test]
fn alternative_optima() {
    let result = read("alternative").solve(&SimplexConfig::default()).unwrap();

    assert_eq!(result.status(), &SimplexStatus::InfiniteSolutions {
        value: R64!(4),
        variables: vec![R64!(4), R64!(0)],
    });
}

#[test]
fn beale() {
    let problem = read("beale");

    let config = SimplexConfig { max_iterations: 100, ..SimplexConfig::default() };
    assert_eq!(problem.solve(&config).unwrap().status(), &SimplexStatus::ErrorMaxIterations);
    assert_eq!(problem.solve(&bland()).unwrap().optimal_value(), Some(&R64!(5, 4)));
}

#[test]
fn diet() {
    // A covering problem needs a first phase, which is not available
    let problem = read("diet");

    assert!(matches!(
        problem.solve(&SimplexConfig::default()),
        Err(SimplexError::NegativeRightHandSide { row: 0, .. }),
    ));
}
