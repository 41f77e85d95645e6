//! # Small textbook problems
//!
//! Problems small enough to be solved by hand, stored as LP text files next to this module.
use std::path::{Path, PathBuf};

use ratlp::data::linear_program::parsed::ParsedLP;
use ratlp::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("lp")
}

fn read(name: &str) -> ParsedLP {
    import(&get_test_file_path(name)).unwrap()
}
