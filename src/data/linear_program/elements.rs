//! # Building blocks to describe linear programs.
use std::fmt::{self, Display, Formatter};

/// Relation between the left- and right-hand side of a constraint as written in the input.
///
/// After standardization only `LessOrEqual` remains.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Relation {
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `<`, read as `<=`.
    Less,
    /// `>`, read as `>=`.
    Greater,
    /// `=`
    Equal,
}

impl Relation {
    /// All relations, in the order in which a constraint is searched for them.
    ///
    /// The two-character operators come first, such that `<=` is never read as `<`.
    pub const SEARCH_ORDER: [Relation; 5] = [
        Relation::LessOrEqual,
        Relation::GreaterOrEqual,
        Relation::Less,
        Relation::Greater,
        Relation::Equal,
    ];

    /// Textual operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::LessOrEqual => "<=",
            Relation::GreaterOrEqual => ">=",
            Relation::Less => "<",
            Relation::Greater => ">",
            Relation::Equal => "=",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    /// Find the largest value.
    Maximize,
    /// Find the smallest value.
    Minimize,
}

