//! Simple linear program.
//!
//! From the first chapter of many textbooks on linear programming, the "Wyndor Glass" problem.
use crate::R64;
use crate::algorithm::simplex::SimplexConfig;
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::parsed::ParsedLP;
use crate::data::linear_program::solution::SimplexStatus;
use crate::data::number_types::rational::ExactRational;
use crate::io::parse;

#[test]
fn conversion_pipeline() {
    // Parsing
    let parsed = parse(LP_LITERAL_STRING).unwrap();
    assert_eq!(parsed, parsed_form());

    // Solving
    let result = parsed.solve(&SimplexConfig::default()).unwrap();
    assert_eq!(result.status(), &SimplexStatus::Optimal {
        value: R64!(36),
        variables: vec![R64!(2), R64!(6)],
    });
    assert_eq!(result.iterations(), 2);

    let values = result.variable_values().unwrap();
    let named = parsed.named_values(values).collect::<Vec<_>>();
    assert_eq!(named, vec![("x1", &R64!(2)), ("x2", &R64!(6))]);
}

#[test]
fn bland() {
    let parsed = parse(LP_LITERAL_STRING).unwrap();
    let config = SimplexConfig { pivot_rule: PivotRule::Bland, ..SimplexConfig::default() };
    let result = parsed.solve(&config).unwrap();

    assert_eq!(result.optimal_value(), Some(&R64!(36)));
    assert_eq!(result.variable_values(), Some(&[R64!(2), R64!(6)][..]));
}

#[test]
fn minimize() {
    // The same problem, with the objective negated
    let parsed = parse("Minimize: -3x1 - 5x2\nSubject To: x1 <= 4, 2x2 <= 12, 3x1+2x2<=18").unwrap();
    assert_eq!(parsed, parsed_form());
}

pub const LP_LITERAL_STRING: &str = "Maximize: 3x1 + 5x2
Subject To: x1 <= 4, 2x2 <= 12, 3x1+2x2<=18
";

pub fn matrix_form() -> (Vec<ExactRational>, DenseMatrix<ExactRational>, Vec<ExactRational>) {
    let c = vec![R64!(3), R64!(5)];
    let a = DenseMatrix::from_data(vec![
        vec![R64!(1), R64!(0)],
        vec![R64!(0), R64!(2)],
        vec![R64!(3), R64!(2)],
    ]);
    let b = vec![R64!(4), R64!(12), R64!(18)];

    (c, a, b)
}

pub fn parsed_form() -> ParsedLP {
    let (c, a, b) = matrix_form();

    ParsedLP::new(vec!["x1".to_string(), "x2".to_string()], c, a, b)
}
