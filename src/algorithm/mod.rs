//! # Algorithms
//!
//! An exact Simplex method for linear programs and a floating point solver for square linear
//! systems.
pub mod error;
pub mod linear_system;
pub mod simplex;
