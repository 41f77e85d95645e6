//! # Pivoting strategies
//!
//! Which column enters the basis, and which row leaves it when the ratio test ties.
pub mod pivot_rule;
