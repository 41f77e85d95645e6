//! # An exact linear program solver
//!
//! Linear programs written in a small text format are parsed into a canonical form with exact
//! rational coefficients and solved using the tableau Simplex method. A floating point solver for
//! square linear systems is included as well.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
