//! # Error reporting for reading of linear program files
//!
//! A collection of types describing any problems encountered during reading and parsing.
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program is infeasible or unbounded, that will not be represented with this
    /// error. This variant is only created for syntactically incorrect files.
    #[error("could not parse the problem file: {0}")]
    Parse(#[from] ParseError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold another error to provide more detail, and it may know the line at which
/// it was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    location: Option<(usize, String)>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// A line number, counting from 1, and the contents of that line.
pub type FileLocation<'a> = (usize, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None, source: None }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// The location, if known, moves to the outer error.
    ///
    /// # Arguments
    ///
    /// * `description`: What went wrong, at a higher level than the existing error.
    pub fn wrap(mut self, description: impl Into<String>) -> Self {
        let location = self.location.take();
        Self { description: description.into(), location, source: Some(Box::new(self)) }
    }

    /// Create a `ParseError` caused by an error of another type.
    ///
    /// # Arguments
    ///
    /// * `error`: What caused this error, for example a malformed literal.
    /// * `description`: What went wrong while parsing.
    pub fn wrap_other(
        error: impl Error + Send + Sync + 'static,
        description: impl Into<String>,
    ) -> Self {
        Self { description: description.into(), location: None, source: Some(Box::new(error)) }
    }

    /// Attach the line at which this error was caused.
    ///
    /// An existing location is kept, it is the more specific one.
    pub fn with_location(mut self, (line_number, line): FileLocation) -> Self {
        if self.location.is_none() {
            self.location = Some((line_number, line.to_string()));
        }
        self
    }

    /// Human-readable description, without cause or location.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Line number at which the error was caused, if known.
    pub fn line_number(&self) -> Option<usize> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)?;
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }
        if let Some((line_number, line)) = &self.location {
            write!(f, " (line {}: \"{}\")", line_number, line)?;
        }

        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|error| error as &(dyn Error + 'static))
    }
}
