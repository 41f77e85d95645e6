//! # Results of solving
//!
//! Both solvers report the outcome of a computation as a status with a message meant for the end
//! user. Being infeasible, unbounded or singular is a property of the problem and is reported here;
//! malformed input is reported as an error instead.
use nalgebra::DVector;

use crate::data::number_types::rational::ExactRational;

/// Outcome of the Simplex method.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SimplexStatus {
    /// A unique optimum was found.
    Optimal {
        /// Objective function value.
        value: ExactRational,
        /// Values of the original variables, in column order.
        variables: Vec<ExactRational>,
    },
    /// An optimum was found, and a non-basic column has a zero reduced cost, which suggests that
    /// other variable assignments attain the same value.
    ///
    /// This is a heuristic: it is not checked whether that column could actually enter the basis.
    InfiniteSolutions {
        /// Objective function value.
        value: ExactRational,
        /// One of the optimal assignments.
        variables: Vec<ExactRational>,
    },
    /// The objective function can be increased without limit.
    Unbounded,
    /// The iteration limit was reached, typically because the method is cycling.
    ErrorMaxIterations,
    /// A pivot was attempted on a non-positive element.
    ErrorInternal,
}

/// Result of `algorithm::simplex::solve`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimplexSolution {
    status: SimplexStatus,
    message: String,
    iterations: usize,
}

impl SimplexSolution {
    pub(crate) fn new(status: SimplexStatus, message: impl Into<String>, iterations: usize) -> Self {
        Self { status, message: message.into(), iterations }
    }

    /// How the Simplex method terminated.
    pub fn status(&self) -> &SimplexStatus {
        &self.status
    }

    /// Description of the outcome for the end user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of pivots that were performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether an optimum was found, unique or not.
    pub fn has_optimal_solution(&self) -> bool {
        matches!(self.status, SimplexStatus::Optimal { .. } | SimplexStatus::InfiniteSolutions { .. })
    }

    /// Objective function value, if an optimum was found.
    pub fn optimal_value(&self) -> Option<&ExactRational> {
        match &self.status {
            SimplexStatus::Optimal { value, .. } | SimplexStatus::InfiniteSolutions { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Variable values, if an optimum was found.
    pub fn variable_values(&self) -> Option<&[ExactRational]> {
        match &self.status {
            SimplexStatus::Optimal { variables, .. }
            | SimplexStatus::InfiniteSolutions { variables, .. } => Some(variables),
            _ => None,
        }
    }
}

/// Outcome of classifying and solving a square linear system.
#[derive(Clone, Debug, PartialEq)]
pub enum LinearSystemStatus {
    /// The matrix has full rank; the solution is unique.
    Unique(DVector<f64>),
    /// The system is inconsistent.
    NoSolution,
    /// The matrix is singular and the system is consistent.
    InfiniteSolutions,
    /// The matrix has full rank, but the computed solution isn't finite.
    NumericalError,
}

/// Result of `algorithm::linear_system::solve`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystemSolution {
    status: LinearSystemStatus,
    message: String,
    residual: Option<f64>,
}

impl LinearSystemSolution {
    pub(crate) fn new(status: LinearSystemStatus, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), residual: None }
    }

    pub(crate) fn unique(solution: DVector<f64>, message: impl Into<String>, residual: f64) -> Self {
        Self {
            status: LinearSystemStatus::Unique(solution),
            message: message.into(),
            residual: Some(residual),
        }
    }

    /// Classification of the system.
    pub fn status(&self) -> &LinearSystemStatus {
        &self.status
    }

    /// Description of the outcome, possibly including a warning about the residual.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether a unique solution vector is available.
    pub fn has_unique_solution(&self) -> bool {
        matches!(self.status, LinearSystemStatus::Unique(_))
    }

    /// The solution vector of a uniquely solvable system.
    pub fn solution_vector(&self) -> Option<&DVector<f64>> {
        match &self.status {
            LinearSystemStatus::Unique(solution) => Some(solution),
            _ => None,
        }
    }

    /// Relative residual `||Ax - b|| / ||b||` of a unique solution.
    ///
    /// For `b = 0` this is `||Ax||` relative to the norm of `A`.
    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}
