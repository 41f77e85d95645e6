//! # High-level Simplex logic
//!
//! High level methods implementing the simplex algorithm. The details of this logic are hidden away
//! mostly in the `Tableau` type.
use log::{debug, trace, warn};

use crate::algorithm::simplex::SimplexConfig;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::solution::{SimplexSolution, SimplexStatus};
use crate::data::number_types::rational::ArithmeticError;

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Return value
///
/// The outcome of the method, which may be the iteration limit being exceeded.
///
/// # Errors
///
/// When a value computed during pivoting doesn't fit in an `ExactRational`.
pub(crate) fn primal(
    tableau: &mut Tableau,
    config: &SimplexConfig,
) -> Result<SimplexSolution, ArithmeticError> {
    for iteration in 0..config.max_iterations {
        let Some(column) = config.pivot_rule.select_primal_pivot_column(tableau) else {
            return Ok(extract_optimum(tableau, iteration));
        };

        let Some(row) = tableau.select_primal_pivot_row(column, config.pivot_rule)? else {
            debug!("Unbounded after {} iterations, column {} can increase indefinitely", iteration, column);
            return Ok(SimplexSolution::new(
                SimplexStatus::Unbounded,
                format!(
                    "Problem is unbounded (entering variable in column {} can increase indefinitely).",
                    column,
                ),
                iteration,
            ));
        };

        let pivot = *tableau.element(row, column);
        if !pivot.is_positive() {
            return Ok(SimplexSolution::new(
                SimplexStatus::ErrorInternal,
                format!("Internal error: pivot element is non-positive ({}) at row {}, column {}.", pivot, row, column),
                iteration,
            ));
        }

        trace!(
            "Iteration {}: column {} enters, row {} (basic column {}) leaves, ratio {}",
            iteration, column, row, tableau.basis_column(row),
            tableau.constraint_value(row).checked_div(&pivot)?,
        );
        tableau.bring_into_basis(column, row)?;
    }

    warn!("Simplex stopped after {} iterations without reaching an optimum", config.max_iterations);
    Ok(SimplexSolution::new(
        SimplexStatus::ErrorMaxIterations,
        format!(
            "Maximum iterations ({}) reached. Check for cycling or increase limit.",
            config.max_iterations,
        ),
        config.max_iterations,
    ))
}

/// Read the solution from an optimal tableau.
///
/// A non-basic column with zero relative cost indicates alternative optima. This is only a
/// necessary condition: whether that column can actually enter the basis is not checked.
fn extract_optimum(tableau: &Tableau, iterations: usize) -> SimplexSolution {
    let value = *tableau.objective_function_value();
    let variables = tableau.current_bfs();

    match tableau.zero_cost_non_basic_column() {
        Some(column) => {
            debug!("Optimum {} after {} iterations, non-basic column {} has zero cost", value, iterations, column);
            SimplexSolution::new(
                SimplexStatus::InfiniteSolutions { value, variables },
                "Optimal solution found, but infinite solutions exist (zero objective coefficient for a non-basic variable).",
                iterations,
            )
        },
        None => {
            debug!("Optimum {} after {} iterations", value, iterations);
            SimplexSolution::new(
                SimplexStatus::Optimal { value, variables },
                "Optimal solution found.",
                iterations,
            )
        },
    }
}

#[cfg(test)]
mod test {
    use crate::R64;
    use crate::algorithm::simplex::SimplexConfig;
    use crate::algorithm::simplex::logic::primal;
    use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::solution::SimplexStatus;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn simplex() {
        let (c, a, b) = problem_1::matrix_form();
        let mut tableau = Tableau::new(&c, &a, &b).unwrap();
        let result = primal(&mut tableau, &SimplexConfig::default()).unwrap();

        assert_eq!(result.status(), &SimplexStatus::Optimal {
            value: R64!(36),
            variables: vec![R64!(2), R64!(6)],
        });
        assert_eq!(result.iterations(), 2);
        assert_eq!(result.message(), "Optimal solution found.");
    }

    #[test]
    fn alternative_optima() {
        // maximize x + y subject to x + y <= 4
        let c = vec![R64!(1), R64!(1)];
        let a = DenseMatrix::from_data(vec![vec![R64!(1), R64!(1)]]);
        let b = vec![R64!(4)];
        let mut tableau = Tableau::new(&c, &a, &b).unwrap();
        let result = primal(&mut tableau, &SimplexConfig::default()).unwrap();

        assert_eq!(result.status(), &SimplexStatus::InfiniteSolutions {
            value: R64!(4),
            variables: vec![R64!(4), R64!(0)],
        });
        assert!(result.has_optimal_solution());
    }

    #[test]
    fn unbounded() {
        // maximize x subject to -x <= 0
        let c = vec![R64!(1)];
        let a = DenseMatrix::from_data(vec![vec![R64!(-1)]]);
        let b = vec![R64!(0)];
        let mut tableau = Tableau::new(&c, &a, &b).unwrap();
        let result = primal(&mut tableau, &SimplexConfig::default()).unwrap();

        assert_eq!(result.status(), &SimplexStatus::Unbounded);
        assert_eq!(result.optimal_value(), None);
    }

    #[test]
    fn cycling() {
        let (c, a, b) = problem_2::matrix_form();

        let config = SimplexConfig { max_iterations: 50, ..SimplexConfig::default() };
        let mut tableau = Tableau::new(&c, &a, &b).unwrap();
        let result = primal(&mut tableau, &config).unwrap();
        assert_eq!(result.status(), &SimplexStatus::ErrorMaxIterations);
        assert_eq!(result.iterations(), 50);

        let config = SimplexConfig { pivot_rule: PivotRule::Bland, ..config };
        let mut tableau = Tableau::new(&c, &a, &b).unwrap();
        let result = primal(&mut tableau, &config).unwrap();
        assert_eq!(result.optimal_value(), Some(&R64!(5, 4)));
    }

    #[test]
    fn zero_iterations() {
        let (c, a, b) = problem_1::matrix_form();
        let mut tableau = Tableau::new(&c, &a, &b).unwrap();
        let config = SimplexConfig { max_iterations: 0, ..SimplexConfig::default() };

        assert_eq!(primal(&mut tableau, &config).unwrap().status(), &SimplexStatus::ErrorMaxIterations);
    }
}
