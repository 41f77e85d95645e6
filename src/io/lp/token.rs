//! # Tokens used in LP text files

/// Indicates the start of a comment, either on its own line or after a constraint.
pub const COMMENT_INDICATOR: char = '#';

/// Keywords starting the objective line that ask for a maximum, longest first.
pub const MAXIMIZE: [&str; 2] = ["maximize", "max"];

/// Keywords starting the objective line that ask for a minimum, longest first.
pub const MINIMIZE: [&str; 2] = ["minimize", "min"];

/// Optional keywords marking the start of the constraints.
pub const CONSTRAINTS: [&str; 4] = ["constraints", "subject to", "s.t.", "st"];

/// Short keywords that could also start a variable name, they need to be followed by a boundary.
pub const ABBREVIATIONS: [&str; 3] = ["max", "min", "st"];

/// May follow a keyword.
pub const KEYWORD_TERMINATOR: char = ':';

/// Separates constraints written on the same line.
pub const CONSTRAINT_SEPARATOR: char = ',';

/// May be written between a coefficient and a variable.
pub const MULTIPLICATION: char = '*';
