//! # Number types
//!
//! The linear program path computes exclusively with exact rationals, such that the Simplex
//! method never makes a pivoting decision based on a rounding error. The linear system path works
//! with `f64` values and lives in `algorithm::linear_system`.
pub mod rational;
