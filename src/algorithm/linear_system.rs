//! # Square linear systems
//!
//! Classify and solve `A x = b` in floating point by comparing the rank of `A` with the rank of
//! the augmented matrix `[A|b]`.
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};

use crate::algorithm::error::LinearSystemError;
use crate::data::linear_program::solution::{LinearSystemSolution, LinearSystemStatus};

/// Relative residual above which a unique solution is reported with a warning.
pub const RESIDUAL_TOLERANCE: f64 = 1e-6;
/// Smallest magnitude a pivot needs to count towards the rank, if the matrix is zero.
const MINIMUM_RANK_TOLERANCE: f64 = 1e-12;

/// Solve the square system `A x = b`.
///
/// # Return value
///
/// A unique solution with its relative residual, or whether there are no or infinitely many
/// solutions.
///
/// # Errors
///
/// If `A` is empty or not square, the length of `b` doesn't match, or an entry isn't finite.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<LinearSystemSolution, LinearSystemError> {
    validate(a, b)?;

    let n = a.nrows();
    // Both ranks are measured against the scale of `A`.
    let tolerance = tolerance(a);
    let lu = a.clone().full_piv_lu();
    let rank_a = rank(&lu.u(), tolerance);

    let augmented = DMatrix::from_fn(n, n + 1, |i, j| if j < n { a[(i, j)] } else { b[i] });
    let rank_augmented = rank(&augmented.full_piv_lu().u(), tolerance);
    debug!("Rank of A is {}, rank of [A|b] is {}, n = {}", rank_a, rank_augmented, n);

    if rank_a < n {
        return Ok(if rank_a < rank_augmented {
            LinearSystemSolution::new(
                LinearSystemStatus::NoSolution,
                "No solution exists (inconsistent system - rank(A) < rank([A|B])).",
            )
        } else {
            LinearSystemSolution::new(
                LinearSystemStatus::InfiniteSolutions,
                "Infinite solutions exist (rank(A) == rank([A|B]) < n).",
            )
        });
    }

    let x = match lu.solve(b) {
        Some(x) if x.iter().all(|value| value.is_finite()) => x,
        _ => return Ok(LinearSystemSolution::new(
            LinearSystemStatus::NumericalError,
            "Numerical Error: Solution contains NaN or Inf. Matrix might be severely ill-conditioned.",
        )),
    };

    let residual = relative_residual(a, &x, b);
    let mut message = String::from("Unique solution found.");
    if residual > RESIDUAL_TOLERANCE {
        warn!("Relative residual {:e} exceeds {:e}", residual, RESIDUAL_TOLERANCE);
        message.push_str(&format!(
            " Warning: High relative residual ({:.6}) suggests potential numerical instability or ill-conditioning.",
            residual,
        ));
    }

    Ok(LinearSystemSolution::unique(x, message, residual))
}

fn validate(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<(), LinearSystemError> {
    let (rows, columns) = a.shape();
    if rows == 0 || columns == 0 {
        return Err(LinearSystemError::EmptyMatrix { rows, columns });
    }
    if rows != columns {
        return Err(LinearSystemError::NotSquare { rows, columns });
    }
    if b.len() != rows {
        return Err(LinearSystemError::DimensionMismatch { rows, length: b.len() });
    }
    if a.iter().chain(b.iter()).any(|value| !value.is_finite()) {
        return Err(LinearSystemError::NonFinite);
    }

    Ok(())
}

/// Number of diagonal entries of an upper triangular factor exceeding the tolerance.
///
/// The factor may be rectangular, only the leading square part has a diagonal.
fn rank(u: &DMatrix<f64>, tolerance: f64) -> usize {
    (0..u.nrows().min(u.ncols()))
        .filter(|&i| u[(i, i)].abs() > tolerance)
        .count()
}

/// `rows * ||M||_inf * EPSILON`, the threshold below which a pivot is considered zero.
fn tolerance(matrix: &DMatrix<f64>) -> f64 {
    let infinity_norm = matrix.row_iter()
        .map(|row| row.iter().map(|value| value.abs()).sum::<f64>())
        .fold(0_f64, f64::max);
    let tolerance = matrix.nrows() as f64 * infinity_norm * f64::EPSILON;

    if tolerance > 0_f64 { tolerance } else { MINIMUM_RANK_TOLERANCE }
}

/// `||Ax - b|| / ||b||`, or a measure of `||Ax||` for a homogeneous system.
fn relative_residual(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    let ax = a * x;
    let b_norm = b.norm();

    if b_norm > f64::EPSILON {
        (ax - b).norm() / b_norm
    } else {
        let a_norm = a.norm();
        if a_norm > f64::EPSILON {
            ax.norm() / a_norm
        } else {
            ax.norm()
        }
    }
}
