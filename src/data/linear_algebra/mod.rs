//! # Linear algebra primitives
//!
//! Dense storage for exact rational data. The floating point path of the crate uses `nalgebra`
//! types directly.

pub mod matrix;
