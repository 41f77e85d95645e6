//! # Storing of linear programs in memory
//!
//! Exact rational numbers, the dense matrices built from them, the canonical form of a parsed
//! linear program and the results of both solvers.
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
