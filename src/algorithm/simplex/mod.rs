//! # The Simplex algorithm
//!
//! A dense tableau implementation of the primal Simplex method over exact rationals, for problems
//! of the form
//!
//! ```text
//! maximize    c^T x
//! subject to  A x <= b
//!             x >= 0
//! ```
//!
//! with `b >= 0`. The slack variables then form a basic feasible solution, so no first phase is
//! needed. Problems with a negative right-hand side are rejected.
use log::debug;

use crate::algorithm::error::SimplexError;
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::solution::SimplexSolution;
use crate::data::number_types::rational::ExactRational;

pub mod logic;
pub mod strategy;
pub mod tableau;

/// Iteration limit used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Settings of a single `solve` call.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SimplexConfig {
    /// Number of pivots after which the method gives up, reporting `ErrorMaxIterations`.
    pub max_iterations: usize,
    /// How to select the entering column and break ties in the ratio test.
    pub pivot_rule: PivotRule,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            pivot_rule: PivotRule::default(),
        }
    }
}

/// Maximize `c^T x` subject to `A x <= b` and `x >= 0`.
///
/// # Arguments
///
/// * `c`: Objective coefficients, length `m`.
/// * `a`: Constraint matrix of size `k` x `m`.
/// * `b`: Right-hand side of length `k`, nonnegative.
/// * `config`: Iteration limit and pivot rule.
///
/// # Return value
///
/// The solution status: optimal (possibly with alternative optima), unbounded, or the iteration
/// limit being reached.
///
/// # Errors
///
/// If the dimensions don't match, `b` has a negative entry, or the computation overflows.
pub fn solve(
    c: &[ExactRational],
    a: &DenseMatrix<ExactRational>,
    b: &[ExactRational],
    config: &SimplexConfig,
) -> Result<SimplexSolution, SimplexError> {
    validate(c, a, b)?;

    debug!(
        "Solving with {} variables, {} constraints, {:?}, at most {} iterations",
        c.len(), b.len(), config.pivot_rule, config.max_iterations,
    );
    let mut tableau = Tableau::new(c, a, b)?;
    let solution = logic::primal(&mut tableau, config)?;
    debug!("{}", solution.message());

    Ok(solution)
}

/// Check the preconditions of `solve`.
fn validate(
    c: &[ExactRational],
    a: &DenseMatrix<ExactRational>,
    b: &[ExactRational],
) -> Result<(), SimplexError> {
    if c.is_empty() {
        return Err(SimplexError::EmptyObjective);
    }
    if a.nr_rows() == 0 || a.nr_columns() == 0 {
        return Err(SimplexError::EmptyConstraintMatrix { rows: a.nr_rows(), columns: a.nr_columns() });
    }
    if a.nr_columns() != c.len() {
        return Err(SimplexError::ColumnMismatch { columns: a.nr_columns(), variables: c.len() });
    }
    if b.len() != a.nr_rows() {
        return Err(SimplexError::RowMismatch { length: b.len(), rows: a.nr_rows() });
    }
    if let Some((row, value)) = b.iter().enumerate().find(|(_, value)| value.is_negative()) {
        return Err(SimplexError::NegativeRightHandSide { row, value: *value });
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::R64;
    use crate::algorithm::error::SimplexError;
    use crate::algorithm::simplex::{SimplexConfig, solve};
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::solution::SimplexStatus;
    use crate::data::number_types::rational::ArithmeticError;
    use crate::tests::problem_1;

    #[test]
    fn solve_matrix() {
        let (c, a, b) = problem_1::matrix_form();
        let result = solve(&c, &a, &b, &SimplexConfig::default()).unwrap();

        assert_eq!(result.optimal_value(), Some(&R64!(36)));
        assert_eq!(result.variable_values(), Some(&[R64!(2), R64!(6)][..]));
    }

    #[test]
    fn deterministic() {
        let (c, a, b) = problem_1::matrix_form();
        let config = SimplexConfig::default();

        assert_eq!(solve(&c, &a, &b, &config), solve(&c, &a, &b, &config));
    }

    #[test]
    fn negative_rhs() {
        let (c, a, _) = problem_1::matrix_form();
        let b = vec![R64!(4), R64!(-1, 2), R64!(18)];

        assert_eq!(
            solve(&c, &a, &b, &SimplexConfig::default()),
            Err(SimplexError::NegativeRightHandSide { row: 1, value: R64!(-1, 2) }),
        );
    }

    #[test]
    fn malformed_dimensions() {
        let (c, a, b) = problem_1::matrix_form();
        let config = SimplexConfig::default();

        assert_eq!(solve(&[], &a, &b, &config), Err(SimplexError::EmptyObjective));
        assert_eq!(
            solve(&c, &DenseMatrix::from_data(vec![]), &[], &config),
            Err(SimplexError::EmptyConstraintMatrix { rows: 0, columns: 0 }),
        );
        assert_eq!(
            solve(&c[..1], &a, &b, &config),
            Err(SimplexError::ColumnMismatch { columns: 2, variables: 1 }),
        );
        assert_eq!(
            solve(&c, &a, &b[..2], &config),
            Err(SimplexError::RowMismatch { length: 2, rows: 3 }),
        );
    }

    #[test]
    fn overflow() {
        let c = vec![R64!(1, i64::MAX - 1)];
        let a = DenseMatrix::from_data(vec![vec![R64!(1, i64::MAX)]]);
        let b = vec![R64!(i64::MAX)];

        assert_eq!(
            solve(&c, &a, &b, &SimplexConfig::default()),
            Err(SimplexError::Arithmetic(ArithmeticError::Overflow)),
        );
    }

    #[test]
    fn error_messages() {
        let error = SimplexError::NegativeRightHandSide { row: 0, value: R64!(-3) };
        assert_eq!(
            error.to_string(),
            "constraint 1 has negative right-hand side -3; only b >= 0 is supported",
        );

        let (c, a, b) = problem_1::matrix_form();
        let config = SimplexConfig { max_iterations: 1, ..SimplexConfig::default() };
        let result = solve(&c, &a, &b, &config).unwrap();
        assert_eq!(result.status(), &SimplexStatus::ErrorMaxIterations);
        assert_eq!(result.message(), "Maximum iterations (1) reached. Check for cycling or increase limit.");
    }
}
