//! # The Simplex tableau
//!
//! A dense tableau of exact rationals together with the basis it represents. The tableau for a
//! problem with `m` variables and `k` constraints looks like
//!
//! ```text
//! [  A   I   b ]    k rows
//! [ -c   0   0 ]    objective row
//! ```
//!
//! where the identity block holds one slack variable per constraint. The bottom-right cell holds
//! the objective function value of the current basic solution.
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use num_traits::Zero;

use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::rational::{ArithmeticError, ExactRational};

/// The Simplex tableau.
///
/// Owned by a single `solve` call and mutated in place by pivoting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau {
    /// Matrix of size (k + 1) x (m + k + 1); the last row is the objective row, the last column
    /// the right-hand side.
    data: DenseMatrix<ExactRational>,
    /// Number of variables of the original problem, `m`.
    nr_original_variables: usize,
    /// Maps the rows to the column that is basic in it.
    ///
    /// This attribute changes with a basis change.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading.
    basis_columns: HashSet<usize>,
}

impl Tableau {
    /// Create the initial tableau, in which the slack variables form the basis.
    ///
    /// # Arguments
    ///
    /// * `c`: Objective coefficients to maximize, length `m`.
    /// * `a`: Constraint matrix of size `k` x `m`.
    /// * `b`: Right-hand side, length `k`.
    ///
    /// # Errors
    ///
    /// If an objective coefficient can't be negated.
    pub fn new(
        c: &[ExactRational],
        a: &DenseMatrix<ExactRational>,
        b: &[ExactRational],
    ) -> Result<Self, ArithmeticError> {
        debug_assert_eq!(a.nr_columns(), c.len());
        debug_assert_eq!(a.nr_rows(), b.len());

        let m = c.len();
        let k = b.len();

        let mut data = DenseMatrix::zeros(k + 1, m + k + 1);
        for (i, row) in a.rows().enumerate() {
            for (j, value) in row.iter().enumerate() {
                data.set_value(i, j, *value);
            }
            data.set_value(i, m + i, ExactRational::from_integer(1));
            data.set_value(i, m + k, b[i]);
        }
        for (j, cost) in c.iter().enumerate() {
            data.set_value(k, j, cost.checked_neg()?);
        }

        let basis_indices = (m..m + k).collect::<Vec<_>>();
        let basis_columns = basis_indices.iter().copied().collect();

        Ok(Self { data, nr_original_variables: m, basis_indices, basis_columns })
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the right-hand side and a strictly positive
    /// entry of the column. Equal ratios are resolved by the pivot rule.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column, in range `0` until `self.nr_columns()`.
    /// * `rule`: Decides between rows with equal ratios.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(
        &self,
        column: usize,
        rule: PivotRule,
    ) -> Result<Option<usize>, ArithmeticError> {
        debug_assert!(column < self.nr_columns());

        // (chosen row, minimum ratio)
        let mut min_values: Option<(usize, ExactRational)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.data.get_value(row, column);
            if !xij.is_positive() {
                continue;
            }

            let ratio = self.constraint_value(row).checked_div(xij)?;
            min_values = match min_values {
                Some((min_row, min_ratio)) => {
                    if ratio < min_ratio || (ratio == min_ratio && rule.prefers_leaving(self, row, min_row)) {
                        Some((row, ratio))
                    } else {
                        Some((min_row, min_ratio))
                    }
                },
                None => Some((row, ratio)),
            };
        }

        Ok(min_values.map(|(row, _)| row))
    }

    /// Brings a column into the basis by a pivot on (`pivot_row`, `pivot_column`).
    ///
    /// The pivot row is divided by the pivot element, after which multiples of it are subtracted
    /// from all other rows, including the objective row, such that the pivot column becomes a unit
    /// vector.
    ///
    /// # Errors
    ///
    /// If a value overflows. The tableau is then left in an inconsistent state and should be
    /// discarded.
    pub fn bring_into_basis(
        &mut self,
        pivot_column: usize,
        pivot_row: usize,
    ) -> Result<(), ArithmeticError> {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(self.data.get_value(pivot_row, pivot_column).is_positive());

        let pivot = *self.data.get_value(pivot_row, pivot_column);
        self.data.divide_row(pivot_row, &pivot)?;

        for row in (0..=self.nr_rows()).filter(|&row| row != pivot_row) {
            let factor = *self.data.get_value(row, pivot_column);
            if !factor.is_zero() {
                self.data.mul_sub_rows(pivot_row, row, &factor)?;
            }
        }

        self.update_basis_indices(pivot_row, pivot_column);
        Ok(())
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_row: usize, pivot_column: usize) {
        let leaving_column = self.basis_indices[pivot_row];
        self.basis_columns.remove(&leaving_column);
        self.basis_indices[pivot_row] = pivot_column;
        self.basis_columns.insert(pivot_column);
    }

    /// Entry of the objective row in column `j`.
    ///
    /// A negative value means that bringing the column into the basis increases the objective.
    pub fn relative_cost(&self, j: usize) -> &ExactRational {
        debug_assert!(j < self.nr_columns());

        self.data.get_value(self.nr_rows(), j)
    }

    /// Value of a single tableau cell, `i` may be the objective row.
    pub fn element(&self, i: usize, j: usize) -> &ExactRational {
        debug_assert!(i <= self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.data.get_value(i, j)
    }

    /// Right-hand side of constraint row `i`.
    pub fn constraint_value(&self, i: usize) -> &ExactRational {
        debug_assert!(i < self.nr_rows());

        self.data.get_value(i, self.nr_columns())
    }

    /// Get the cost of the current solution.
    pub fn objective_function_value(&self) -> &ExactRational {
        self.data.get_value(self.nr_rows(), self.nr_columns())
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Column that is basic in row `row`.
    pub fn basis_column(&self, row: usize) -> usize {
        self.basis_indices[row]
    }

    /// Values of the original variables in the current basic solution.
    ///
    /// A basic variable takes the right-hand side of its row, the others are zero.
    pub fn current_bfs(&self) -> Vec<ExactRational> {
        let mut values = vec![ExactRational::zero(); self.nr_original_variables];
        for (row, &column) in self.basis_indices.iter().enumerate() {
            if column < self.nr_original_variables {
                values[column] = *self.constraint_value(row);
            }
        }

        values
    }

    /// First non-basic column with a zero entry in the objective row, if any.
    ///
    /// Such a column could enter the basis without changing the objective value, although this
    /// is not verified.
    pub fn zero_cost_non_basic_column(&self) -> Option<usize> {
        (0..self.nr_columns())
            .filter(|&column| !self.is_in_basis(column))
            .find(|&column| self.relative_cost(column).is_zero())
    }

    /// Number of constraint rows, `k`.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variable columns, original and slack, `m + k`.
    pub fn nr_columns(&self) -> usize {
        self.nr_original_variables + self.nr_rows()
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let column_width = 10;
        let counter_width = 8;

        writeln!(f, "Tableau:")?;
        write!(f, "{0:width$}", "", width = counter_width)?;
        for column in 0..self.nr_columns() {
            write!(f, "{0:^width$}", column, width = column_width)?;
        }
        writeln!(f, "|{0:^width$}", "b", width = column_width)?;

        let separator = "-".repeat(counter_width + (self.nr_columns() + 1) * column_width + 1);
        writeln!(f, "{}", separator)?;

        for row in 0..=self.nr_rows() {
            let label = if row < self.nr_rows() { row.to_string() } else { "cost".to_string() };
            if row == self.nr_rows() {
                writeln!(f, "{}", separator)?;
            }
            write!(f, "{0:>width$}", format!("{}  |", label), width = counter_width)?;
            let (variables, rhs) = self.data.row(row).split_at(self.nr_columns());
            for value in variables {
                write!(f, "{0:^width$}", value.to_string(), width = column_width)?;
            }
            writeln!(f, "|{0:^width$}", rhs[0].to_string(), width = column_width)?;
        }

        writeln!(f, "Basis: {}", self.basis_indices.iter()
            .enumerate()
            .map(|(row, column)| format!("{}->{}", row, column))
            .join(", "))
    }
}

#[cfg(test)]
mod test {
    use crate::R64;
    use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::tests::problem_1;

    #[test]
    fn create_tableau() {
        let (c, a, b) = problem_1::matrix_form();
        let tableau = Tableau::new(&c, &a, &b).unwrap();

        assert_eq!(tableau.nr_rows(), 3);
        assert_eq!(tableau.nr_columns(), 5);
        assert_eq!(tableau.relative_cost(0), &R64!(-3));
        assert_eq!(tableau.relative_cost(1), &R64!(-5));
        assert_eq!(tableau.relative_cost(2), &R64!(0));
        assert_eq!(tableau.element(2, 4), &R64!(1));
        assert_eq!(tableau.element(2, 3), &R64!(0));
        assert_eq!(tableau.constraint_value(1), &R64!(12));
        assert_eq!(tableau.objective_function_value(), &R64!(0));
        assert!(tableau.is_in_basis(2) && tableau.is_in_basis(3) && tableau.is_in_basis(4));
        assert!(!tableau.is_in_basis(0));
        assert_eq!(tableau.current_bfs(), vec![R64!(0), R64!(0)]);
    }

    #[test]
    fn select_pivot_row() {
        let (c, a, b) = problem_1::matrix_form();
        let tableau = Tableau::new(&c, &a, &b).unwrap();

        // Ratios 4/1 and 18/3
        assert_eq!(tableau.select_primal_pivot_row(0, PivotRule::MostNegative), Ok(Some(0)));
        // Ratios 12/2 and 18/2
        assert_eq!(tableau.select_primal_pivot_row(1, PivotRule::MostNegative), Ok(Some(1)));
        // Slack column 2 only has a positive entry in row 0
        assert_eq!(tableau.select_primal_pivot_row(2, PivotRule::MostNegative), Ok(Some(0)));
    }

    #[test]
    fn bring_into_basis() {
        let (c, a, b) = problem_1::matrix_form();
        let mut tableau = Tableau::new(&c, &a, &b).unwrap();

        tableau.bring_into_basis(1, 1).unwrap();
        assert!(tableau.is_in_basis(1));
        assert!(!tableau.is_in_basis(3));
        assert_eq!(tableau.basis_column(1), 1);
        assert_eq!(tableau.objective_function_value(), &R64!(30));
        assert_eq!(tableau.constraint_value(1), &R64!(6));
        assert_eq!(tableau.constraint_value(2), &R64!(6));
        assert_eq!(tableau.relative_cost(1), &R64!(0));
        assert_eq!(tableau.relative_cost(3), &R64!(5, 2));

        tableau.bring_into_basis(0, 2).unwrap();
        assert_eq!(tableau.objective_function_value(), &R64!(36));
        assert_eq!(tableau.current_bfs(), vec![R64!(2), R64!(6)]);
        assert_eq!(tableau.zero_cost_non_basic_column(), None);
    }

    #[test]
    fn display() {
        let (c, a, b) = problem_1::matrix_form();
        let tableau = Tableau::new(&c, &a, &b).unwrap();
        let text = tableau.to_string();

        assert!(text.starts_with("Tableau:"));
        assert!(text.contains("cost  |"));
        assert!(text.ends_with("Basis: 0->2, 1->3, 2->4\n"));
    }
}
