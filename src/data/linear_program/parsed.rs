//! # Parsed linear programs
//!
//! The result of reading a textual linear program. The problem is stored in the canonical form
//!
//! ```text
//! maximize    c^T x
//! subject to  A x <= b
//!             x >= 0
//! ```
//!
//! with one column per variable, numbered in order of first appearance in the text.
use std::collections::BTreeMap;

use crate::algorithm::error::SimplexError;
use crate::algorithm::simplex::{self, SimplexConfig};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Relation;
use crate::data::linear_program::solution::SimplexSolution;
use crate::data::number_types::rational::ExactRational;

/// A single constraint as it was read, before standardization.
///
/// Coefficients are keyed by variable index. Variables that don't appear have coefficient zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    /// Nonzero coefficients by variable index.
    pub coefficients: BTreeMap<usize, ExactRational>,
    /// Relation as written.
    pub relation: Relation,
    /// Constant on the right-hand side, after moving constants over.
    pub rhs: ExactRational,
}

/// A linear program in canonical matrix form.
///
/// A minimization problem has been turned into a maximization problem by negating the objective
/// coefficients. The original direction is not retained.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedLP {
    variable_order: Vec<String>,
    objective_coefficients: Vec<ExactRational>,
    constraint_matrix: DenseMatrix<ExactRational>,
    constraint_rhs: Vec<ExactRational>,
}

impl ParsedLP {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `variable_order`: Variable names, indexed by column.
    /// * `objective_coefficients`: Coefficients to maximize, one per variable.
    /// * `constraint_matrix`: One `<=` row per constraint, one column per variable.
    /// * `constraint_rhs`: Right-hand side, one per row. May be negative.
    pub fn new(
        variable_order: Vec<String>,
        objective_coefficients: Vec<ExactRational>,
        constraint_matrix: DenseMatrix<ExactRational>,
        constraint_rhs: Vec<ExactRational>,
    ) -> Self {
        debug_assert_eq!(objective_coefficients.len(), variable_order.len());
        debug_assert!(constraint_matrix.nr_rows() == 0 || constraint_matrix.nr_columns() == variable_order.len());
        debug_assert_eq!(constraint_rhs.len(), constraint_matrix.nr_rows());

        Self { variable_order, objective_coefficients, constraint_matrix, constraint_rhs }
    }

    /// The objective is always maximized after parsing.
    pub fn objective_maximize(&self) -> bool {
        true
    }

    /// Variable names in order of first appearance, which is the column order.
    pub fn variable_order(&self) -> &[String] {
        &self.variable_order
    }

    /// Coefficients of the maximization objective, `c`.
    pub fn objective_coefficients(&self) -> &[ExactRational] {
        &self.objective_coefficients
    }

    /// Coefficients of the standardized `<=` constraints, `A`.
    pub fn constraint_matrix(&self) -> &DenseMatrix<ExactRational> {
        &self.constraint_matrix
    }

    /// Right-hand side of the standardized constraints, `b`.
    pub fn constraint_rhs(&self) -> &[ExactRational] {
        &self.constraint_rhs
    }

    /// Number of distinct variables.
    pub fn nr_variables(&self) -> usize {
        self.variable_order.len()
    }

    /// Number of rows after standardization; equality constraints count twice.
    pub fn nr_constraints(&self) -> usize {
        self.constraint_rhs.len()
    }

    /// Solve this problem with the Simplex method.
    ///
    /// # Errors
    ///
    /// If the problem has a negative right-hand side, or if the computation overflows.
    pub fn solve(&self, config: &SimplexConfig) -> Result<SimplexSolution, SimplexError> {
        simplex::solve(
            &self.objective_coefficients,
            &self.constraint_matrix,
            &self.constraint_rhs,
            config,
        )
    }

    /// Pair each variable name with its value.
    ///
    /// # Arguments
    ///
    /// * `values`: Values indexed by variable, as found in an optimal Simplex solution.
    pub fn named_values<'a>(
        &'a self,
        values: &'a [ExactRational],
    ) -> impl Iterator<Item = (&'a str, &'a ExactRational)> + 'a {
        debug_assert_eq!(values.len(), self.nr_variables());

        self.variable_order.iter().map(String::as_str).zip(values)
    }
}
