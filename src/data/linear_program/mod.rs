//! # Representing linear programs
//!
//! Parsed linear programs are kept in a canonical matrix form in which the objective is always
//! maximized and every constraint is a `<=` relation. The results of both solvers are described
//! here as well.
pub mod elements;
pub mod parsed;
pub mod solution;
