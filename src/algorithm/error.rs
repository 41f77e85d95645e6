//! # Input errors of the solvers
//!
//! Malformed input is rejected before any computation starts. These errors are never used to
//! describe properties of a well-formed problem, such as being unbounded; those are reported as a
//! status of the solution.
use thiserror::Error;

use crate::data::number_types::rational::{ArithmeticError, ExactRational};

/// The input of the Simplex method is malformed or can't be computed with.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SimplexError {
    /// There are no objective coefficients.
    #[error("objective coefficient vector c can't be empty")]
    EmptyObjective,
    /// The constraint matrix has no rows or no columns.
    #[error("constraint matrix A must have positive dimensions, found {rows} x {columns}")]
    EmptyConstraintMatrix {
        /// Number of rows found.
        rows: usize,
        /// Number of columns found.
        columns: usize,
    },
    /// The number of columns doesn't match the number of objective coefficients.
    #[error("constraint matrix A has {columns} columns, but there are {variables} objective coefficients")]
    ColumnMismatch {
        /// Number of columns of `A`.
        columns: usize,
        /// Length of `c`.
        variables: usize,
    },
    /// The length of the right-hand side doesn't match the number of rows.
    #[error("right-hand side b has length {length}, but constraint matrix A has {rows} rows")]
    RowMismatch {
        /// Length of `b`.
        length: usize,
        /// Number of rows of `A`.
        rows: usize,
    },
    /// Only problems with `b >= 0` have a trivial basic feasible solution.
    #[error("constraint {} has negative right-hand side {value}; only b >= 0 is supported", .row + 1)]
    NegativeRightHandSide {
        /// Index of the offending constraint, counting from zero.
        row: usize,
        /// The negative value.
        value: ExactRational,
    },
    /// A value computed while pivoting can't be represented.
    #[error("arithmetic failure while pivoting: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

/// The input of the linear system solver is malformed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LinearSystemError {
    /// The matrix has no rows or no columns.
    #[error("matrix A must have positive dimensions, found {rows} x {columns}")]
    EmptyMatrix {
        /// Number of rows found.
        rows: usize,
        /// Number of columns found.
        columns: usize,
    },
    /// The matrix is not square.
    #[error("matrix A must be square, found {rows} x {columns}")]
    NotSquare {
        /// Number of rows found.
        rows: usize,
        /// Number of columns found.
        columns: usize,
    },
    /// The length of the right-hand side doesn't match the number of rows.
    #[error("dimension mismatch: A has {rows} rows, but b has length {length}")]
    DimensionMismatch {
        /// Number of rows of `A`.
        rows: usize,
        /// Length of `b`.
        length: usize,
    },
    /// An entry is NaN or infinite.
    #[error("matrix A or vector b contains NaN or Inf")]
    NonFinite,
}
