//! # Standardization
//!
//! Bring the constraints as they were read into `<=` form and collect them in dense matrices.
use std::collections::BTreeMap;

use log::debug;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Relation;
use crate::data::linear_program::parsed::{Constraint, ParsedLP};
use crate::data::number_types::rational::{ArithmeticError, ExactRational};
use crate::io::error::ParseError;

/// Build the canonical form.
///
/// `<` is read as `<=`, `>` and `>=` constraints are negated and an `=` constraint becomes two
/// rows: the original and its negation.
///
/// # Arguments
///
/// * `variable_order`: Names of all variables, indexed by column.
/// * `objective`: Coefficients to maximize, indexed by column. Absent variables have coefficient
/// zero.
/// * `constraints`: Constraints in the order in which they were read.
pub(super) fn standardize(
    variable_order: Vec<String>,
    objective: &BTreeMap<usize, ExactRational>,
    constraints: Vec<Constraint>,
) -> Result<ParsedLP, ParseError> {
    let nr_variables = variable_order.len();

    let mut rows = Vec::with_capacity(constraints.len());
    let mut rhs = Vec::with_capacity(constraints.len());
    for (index, Constraint { coefficients, relation, rhs: value }) in constraints.into_iter().enumerate() {
        let negation_error = |error: ArithmeticError| ParseError::wrap_other(
            error, format!("can't negate constraint {}", index + 1),
        );
        let row = dense_row(&coefficients, nr_variables);

        match relation {
            Relation::LessOrEqual | Relation::Less => {
                rows.push(row);
                rhs.push(value);
            },
            Relation::GreaterOrEqual | Relation::Greater => {
                rows.push(negate(&row).map_err(negation_error)?);
                rhs.push(value.checked_neg().map_err(negation_error)?);
            },
            Relation::Equal => {
                let negated = negate(&row).map_err(negation_error)?;
                let negated_value = value.checked_neg().map_err(negation_error)?;
                rows.push(row);
                rhs.push(value);
                rows.push(negated);
                rhs.push(negated_value);
            },
        }
    }

    debug!("Standardized to {} variables and {} rows", nr_variables, rows.len());
    Ok(ParsedLP::new(
        variable_order,
        dense_row(objective, nr_variables),
        DenseMatrix::from_data(rows),
        rhs,
    ))
}

fn dense_row(coefficients: &BTreeMap<usize, ExactRational>, length: usize) -> Vec<ExactRational> {
    let mut row = vec![ExactRational::from_integer(0); length];
    for (&index, &value) in coefficients {
        row[index] = value;
    }
    row
}

fn negate(row: &[ExactRational]) -> Result<Vec<ExactRational>, ArithmeticError> {
    row.iter().map(ExactRational::checked_neg).collect()
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use crate::R64;
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::elements::Relation;
    use crate::data::linear_program::parsed::Constraint;
    use crate::io::lp::standardize::standardize;

    fn constraint(coefficients: &[(usize, i64)], relation: Relation, rhs: i64) -> Constraint {
        Constraint {
            coefficients: coefficients.iter().map(|&(index, value)| (index, R64!(value))).collect(),
            relation,
            rhs: R64!(rhs),
        }
    }

    #[test]
    fn relations() {
        let constraints = vec![
            constraint(&[(0, 1)], Relation::Less, 4),
            constraint(&[(1, 2)], Relation::GreaterOrEqual, 1),
            constraint(&[(0, 1), (2, -1)], Relation::Equal, 3),
        ];
        let objective = BTreeMap::from([(2, R64!(5))]);
        let variables = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let result = standardize(variables, &objective, constraints).unwrap();

        assert_eq!(result.objective_coefficients(), &[R64!(0), R64!(0), R64!(5)]);
        assert_eq!(result.constraint_matrix(), &DenseMatrix::from_data(vec![
            vec![R64!(1), R64!(0), R64!(0)],
            vec![R64!(0), R64!(-2), R64!(0)],
            vec![R64!(1), R64!(0), R64!(-1)],
            vec![R64!(-1), R64!(0), R64!(1)],
        ]));
        assert_eq!(result.constraint_rhs(), &[R64!(4), R64!(-1), R64!(3), R64!(-3)]);
        assert_eq!(result.nr_constraints(), 4);
    }
}
