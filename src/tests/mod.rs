//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const LP_LITERAL_STRING`
//! * `fn matrix_form()`
//! * `fn parsed_form()`
pub mod problem_1;
