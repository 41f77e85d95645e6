//! # Linear expressions
//!
//! Reading the left-hand sides of constraints and the objective function: signed sums of terms
//! like `3x1`, `- 1/2 y`, `2.5*z` or `w`.
use std::collections::{BTreeMap, HashMap};

use crate::data::linear_program::elements::Relation;
use crate::data::linear_program::parsed::Constraint;
use crate::data::number_types::rational::ExactRational;
use crate::io::error::ParseError;
use crate::io::lp::token::MULTIPLICATION;

/// Assigns column indices to variable names in order of first appearance.
#[derive(Debug, Default)]
pub(super) struct Variables {
    index: HashMap<String, usize>,
    order: Vec<String>,
}

impl Variables {
    /// Index of a variable, registering it if it wasn't seen before.
    fn get_or_insert(&mut self, name: &str) -> usize {
        if let Some(&index) = self.index.get(name) {
            index
        } else {
            let index = self.order.len();
            self.index.insert(name.to_string(), index);
            self.order.push(name.to_string());
            index
        }
    }

    pub(super) fn len(&self) -> usize {
        self.order.len()
    }

    pub(super) fn into_order(self) -> Vec<String> {
        self.order
    }
}

/// Read a single constraint such as `3x + 2y <= 18`.
///
/// The relation is the first operator found when searching for `<=`, `>=`, `<`, `>` and `=`, in
/// that order.
pub(super) fn parse_constraint(text: &str, variables: &mut Variables) -> Result<Constraint, ParseError> {
    let (relation, position) = Relation::SEARCH_ORDER.iter()
        .find_map(|&relation| text.find(relation.symbol()).map(|position| (relation, position)))
        .ok_or_else(|| ParseError::new(format!("no relation found in constraint \"{}\"", text)))?;

    let left = text[..position].trim();
    let right = text[position + relation.symbol().len()..].trim();
    if left.is_empty() {
        return Err(ParseError::new(format!("missing left-hand side in constraint \"{}\"", text)));
    }
    if right.is_empty() {
        return Err(ParseError::new(format!("missing right-hand side in constraint \"{}\"", text)));
    }

    let coefficients = parse_expression(left, variables)?;
    let rhs = right.parse()
        .map_err(|error| ParseError::wrap_other(error, format!("can't read right-hand side \"{}\"", right)))?;

    Ok(Constraint { coefficients, relation, rhs })
}

/// Read a signed sum of terms.
///
/// Whitespace is insignificant. Coefficients of a variable that appears more than once are summed.
///
/// # Return value
///
/// Coefficients indexed by variable column. A variable whose coefficients cancel is still present,
/// with value zero.
pub(super) fn parse_expression(
    expression: &str,
    variables: &mut Variables,
) -> Result<BTreeMap<usize, ExactRational>, ParseError> {
    let mut coefficients = BTreeMap::new();

    let mut negative = None;
    let mut term = String::new();
    for character in expression.chars().filter(|c| !c.is_whitespace()) {
        match character {
            '+' | '-' if !term.is_empty() => {
                add_term(&term, negative.unwrap_or(false), variables, &mut coefficients)?;
                term.clear();
                negative = Some(character == '-');
            },
            '+' | '-' => {
                if negative.is_some() {
                    return Err(ParseError::new(format!("repeated sign in expression \"{}\"", expression)));
                }
                negative = Some(character == '-');
            },
            _ => term.push(character),
        }
    }

    if term.is_empty() {
        return Err(ParseError::new(format!("expression \"{}\" doesn't end with a term", expression)));
    }
    add_term(&term, negative.unwrap_or(false), variables, &mut coefficients)?;

    Ok(coefficients)
}

fn add_term(
    term: &str,
    negative: bool,
    variables: &mut Variables,
    coefficients: &mut BTreeMap<usize, ExactRational>,
) -> Result<(), ParseError> {
    let (coefficient, name) = parse_term(term)?;
    let coefficient = if negative { coefficient.checked_neg() } else { Ok(coefficient) }
        .map_err(|error| ParseError::wrap_other(error, format!("can't negate term \"{}\"", term)))?;

    let index = variables.get_or_insert(name);
    let sum = match coefficients.get(&index) {
        Some(existing) => coefficient.checked_add(existing)
            .map_err(|error| ParseError::wrap_other(error, format!("can't add coefficients of \"{}\"", name)))?,
        None => coefficient,
    };
    coefficients.insert(index, sum);

    Ok(())
}

/// Split an unsigned term into its coefficient and variable name.
///
/// The variable name starts at the first letter; everything before it is the coefficient.
fn parse_term(term: &str) -> Result<(ExactRational, &str), ParseError> {
    let Some(start) = term.find(|c: char| c.is_ascii_alphabetic()) else {
        return Err(ParseError::new(format!("constant term \"{}\" is not supported, every term needs a variable", term)));
    };

    let (coefficient, name) = term.split_at(start);
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ParseError::new(format!("invalid variable name \"{}\"", name)));
    }

    let coefficient = match coefficient.strip_suffix(MULTIPLICATION) {
        Some("") => return Err(ParseError::new(format!("missing coefficient before \"{}\" in term \"{}\"", MULTIPLICATION, term))),
        Some(coefficient) => coefficient,
        None => coefficient,
    };
    let coefficient = if coefficient.is_empty() {
        ExactRational::from_integer(1)
    } else {
        coefficient.parse()
            .map_err(|error| ParseError::wrap_other(error, format!("can't read coefficient of \"{}\"", name)))?
    };

    Ok((coefficient, name))
}
