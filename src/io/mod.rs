//! # Reading of linear programs
//!
//! This module provides read functionality for the LP text format.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::linear_program::parsed::ParsedLP;
use crate::io::error::{ImportError, ParseError};

pub mod error;
pub mod lp;

/// Parse a linear program from text.
///
/// # Errors
///
/// When the text is not a valid LP text program.
pub fn parse(program: &str) -> Result<ParsedLP, ParseError> {
    lp::parse(program)
}

/// Import a problem from a file.
///
/// Files with the `lp` and `txt` extensions are read as LP text programs.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the contents can't be
/// parsed.
pub fn import(file_path: &Path) -> Result<ParsedLP, ImportError> {
    // Choose the parser before reading the file
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("lp" | "txt") => (),
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }

    let mut program = String::new();
    File::open(file_path)?.read_to_string(&mut program)?;

    Ok(parse(&program)?)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::io::error::ImportError;
    use crate::io::import;

    #[test]
    fn unknown_extension() {
        assert!(matches!(import(Path::new("problem.mps")), Err(ImportError::FileExtension(_))));
        assert!(matches!(import(Path::new("problem")), Err(ImportError::FileExtension(_))));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(import(Path::new("does/not/exist.lp")), Err(ImportError::IO(_))));
    }
}
