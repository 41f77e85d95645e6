//! # Dense matrices
//!
//! A row-major `DenseMatrix` holds the constraint matrix of a parsed linear program and the
//! Simplex tableau. Dimensions are fixed at creation.
use std::fmt::{self, Display, Formatter};
use std::slice::Iter;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::number_types::rational::{ArithmeticError, ExactRational};

/// Uses a `Vec<Vec<F>>` as underlying data structure. Indices start at `0`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from row-major data.
    ///
    /// An empty `data` vector results in a matrix with zero rows and columns.
    ///
    /// # Panics
    ///
    /// When the rows are not all of the same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);
        Self { data, nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, Vec<F>> {
        self.data.iter()
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Zero + Clone> DenseMatrix<F> {
    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }
}

impl DenseMatrix<ExactRational> {
    /// Divide row `i` by `divisor`.
    ///
    /// # Errors
    ///
    /// When `divisor` is zero or a value overflows. The row may then be partially updated.
    pub fn divide_row(&mut self, i: usize, divisor: &ExactRational) -> Result<(), ArithmeticError> {
        debug_assert!(i < self.nr_rows);

        for value in self.data[i].iter_mut() {
            *value = value.checked_div(divisor)?;
        }

        Ok(())
    }

    /// Subtract a multiple of row `read_row` from row `write_row`.
    ///
    /// # Errors
    ///
    /// When a value overflows. The row may then be partially updated.
    pub fn mul_sub_rows(
        &mut self,
        read_row: usize,
        write_row: usize,
        factor: &ExactRational,
    ) -> Result<(), ArithmeticError> {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let difference = factor.checked_mul(&self.data[read_row][j])?;
            self.data[write_row][j] = self.data[write_row][j].checked_sub(&difference)?;
        }

        Ok(())
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.data.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

        for row in cells {
            writeln!(f, "[{}]", row.iter().map(|cell| format!("{:>width$}", cell, width = width)).join(" "))?;
        }

        Ok(())
    }
}

/// Number of rows and columns of row-major data.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}
