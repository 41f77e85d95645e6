//! # LP text files
//!
//! A small human-writable format for linear programs:
//!
//! ```text
//! # A comment
//! Maximize: 3x1 + 5x2
//! Subject To: x1 <= 4, 2x2 <= 12
//! 3x1 + 2x2 <= 18
//! ```
//!
//! The objective line comes first. The constraints keyword is optional, constraints may also
//! start on the line right after the objective. Several constraints can be written on one line,
//! separated by commas.
use std::collections::BTreeMap;

use log::debug;

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::parsed::{Constraint, ParsedLP};
use crate::data::number_types::rational::ExactRational;
use crate::io::error::{FileLocation, ParseError};
use crate::io::lp::expression::{Variables, parse_constraint, parse_expression};
use crate::io::lp::token::{
    ABBREVIATIONS, COMMENT_INDICATOR, CONSTRAINT_SEPARATOR, CONSTRAINTS, KEYWORD_TERMINATOR, MAXIMIZE,
    MINIMIZE,
};

mod expression;
mod standardize;
pub mod token;

/// Parse a linear program in the LP text format.
///
/// Every call starts from a fresh state; nothing is shared between calls.
///
/// # Arguments
///
/// * `program`: The entire program.
///
/// # Return value
///
/// The program in canonical form, with a minimization turned into a maximization.
///
/// # Errors
///
/// If a line can't be read, or the objective or all constraints are missing.
pub fn parse(program: &str) -> Result<ParsedLP, ParseError> {
    let mut parser = Parser::default();
    for (location, content) in into_lines(program) {
        parser.process_line(content).map_err(|error| error.with_location(location))?;
    }

    parser.finish()
}

/// Split a program into numbered lines, skipping comments and blank lines.
///
/// # Return value
///
/// The location of each line for error reporting, and the line without comment or surrounding
/// whitespace.
fn into_lines(program: &str) -> impl Iterator<Item = (FileLocation<'_>, &str)> {
    program.lines()
        .enumerate()
        .map(|(number, line)| ((number + 1, line), line)) // Count from 1
        .map(|(location, line)| {
            let content = match line.find(COMMENT_INDICATOR) {
                Some(start) => &line[..start],
                None => line,
            };
            (location, content.trim())
        })
        .filter(|(_, content)| !content.is_empty())
}

/// The sections of the file, which are visited in order and never revisited.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
enum ParserState {
    #[default]
    ExpectObjective,
    ExpectConstraintsKeyword,
    ExpectConstraints,
}

/// Everything read so far during a single `parse` call.
#[derive(Debug, Default)]
struct Parser {
    state: ParserState,
    variables: Variables,
    objective: Option<BTreeMap<usize, ExactRational>>,
    constraints: Vec<Constraint>,
}

impl Parser {
    fn process_line(&mut self, line: &str) -> Result<(), ParseError> {
        match self.state {
            ParserState::ExpectObjective => {
                self.parse_objective(line)?;
                self.transition(ParserState::ExpectConstraintsKeyword);
            },
            ParserState::ExpectConstraintsKeyword => {
                let rest = CONSTRAINTS.iter().find_map(|keyword| strip_keyword(line, keyword));
                self.parse_constraints(rest.unwrap_or(line))?;
                self.transition(ParserState::ExpectConstraints);
            },
            ParserState::ExpectConstraints => self.parse_constraints(line)?,
        }

        Ok(())
    }

    fn transition(&mut self, state: ParserState) {
        debug!("Parser state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Read the objective function, negating it for a minimization.
    fn parse_objective(&mut self, line: &str) -> Result<(), ParseError> {
        let (objective, expression) = if let Some(rest) = MAXIMIZE.iter().find_map(|keyword| strip_keyword(line, keyword)) {
            (Objective::Maximize, rest)
        } else if let Some(rest) = MINIMIZE.iter().find_map(|keyword| strip_keyword(line, keyword)) {
            (Objective::Minimize, rest)
        } else {
            return Err(ParseError::new("expected the objective, starting with \"maximize\" or \"minimize\""));
        };
        if expression.is_empty() {
            return Err(ParseError::new("objective expression missing"));
        }

        let mut coefficients = parse_expression(expression, &mut self.variables)
            .map_err(|error| error.wrap("invalid objective"))?;
        debug!("Objective direction {:?}", objective);
        if objective == Objective::Minimize {
            for coefficient in coefficients.values_mut() {
                *coefficient = coefficient.checked_neg()
                    .map_err(|error| ParseError::wrap_other(error, "can't negate the objective"))?;
            }
        }
        self.objective = Some(coefficients);

        Ok(())
    }

    /// Read all comma separated constraints on a line.
    ///
    /// Empty pieces are skipped, such that a line holding only a keyword adds nothing.
    fn parse_constraints(&mut self, line: &str) -> Result<(), ParseError> {
        for text in line.split(CONSTRAINT_SEPARATOR).map(str::trim).filter(|text| !text.is_empty()) {
            let constraint = parse_constraint(text, &mut self.variables)
                .map_err(|error| error.wrap("invalid constraint"))?;
            self.constraints.push(constraint);
        }

        Ok(())
    }

    fn finish(self) -> Result<ParsedLP, ParseError> {
        let Some(objective) = self.objective else {
            return Err(ParseError::new("no objective found"));
        };
        if self.constraints.is_empty() {
            return Err(ParseError::new("no constraints found"));
        }

        debug!(
            "Read {} variables and {} constraints",
            self.variables.len(), self.constraints.len(),
        );
        standardize::standardize(self.variables.into_order(), &objective, self.constraints)
    }
}

/// Match a keyword at the start of a line, ignoring case.
///
/// An abbreviated keyword needs to be followed by the end of the line, a colon or whitespace.
///
/// # Return value
///
/// The rest of the line after the keyword and an optional colon, if the keyword matched.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let start = line.get(..keyword.len())?;
    if !start.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let rest = &line[keyword.len()..];
    let boundary = rest.is_empty()
        || rest.starts_with(KEYWORD_TERMINATOR)
        || rest.starts_with(char::is_whitespace);
    if !boundary && ABBREVIATIONS.iter().any(|&abbreviation| abbreviation == keyword) {
        return None;
    }

    let rest = rest.trim_start();
    Some(rest.strip_prefix(KEYWORD_TERMINATOR).unwrap_or(rest).trim())
}
