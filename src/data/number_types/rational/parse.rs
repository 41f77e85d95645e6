//! # Numeric literals
//!
//! Reading exact rationals from text. Three forms are recognized:
//!
//! * integers, `-?[0-9]+`
//! * decimals, `-?[0-9]*\.[0-9]+` (a trailing dot as in `2.` is accepted too)
//! * fractions, `-?[0-9]+/[0-9]+`
//!
//! There is no exponent notation. A leading `+` is allowed, surrounding whitespace is ignored.
use std::str::FromStr;

use thiserror::Error;

use crate::data::number_types::rational::{ArithmeticError, ExactRational};

/// Reading a literal failed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LiteralError {
    /// Nothing but whitespace.
    #[error("empty numeric literal")]
    Empty,
    /// Not an integer, decimal or fraction.
    #[error("\"{0}\" is not an integer, decimal or fraction literal")]
    Malformed(String),
    /// Well-formed, but the value doesn't fit.
    #[error("literal \"{literal}\" can't be represented: {source}")]
    Arithmetic {
        /// The text that was read.
        literal: String,
        /// Why it can't be represented.
        source: ArithmeticError,
    },
}

/// Largest number of significant decimal places; `10^38` still fits in a `u128`.
const MAX_DECIMAL_PLACES: usize = 38;

impl FromStr for ExactRational {
    type Err = LiteralError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LiteralError::Empty);
        }
        let malformed = || LiteralError::Malformed(text.to_string());
        let arithmetic = |source| LiteralError::Arithmetic { literal: text.to_string(), source };

        let (negative, unsigned) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (magnitude, denominator) = if let Some((numerator, denominator)) = unsigned.split_once('/') {
            let numerator = digits(numerator.trim()).ok_or_else(malformed)?;
            let denominator = digits(denominator.trim()).ok_or_else(malformed)?;
            (numerator.map_err(arithmetic)?, denominator.map_err(arithmetic)?)
        } else if let Some((integer, fraction)) = unsigned.split_once('.') {
            if integer.is_empty() && fraction.is_empty() {
                return Err(malformed());
            }
            let integer = if integer.is_empty() { Some(Ok(0)) } else { digits(integer) };
            let integer = integer.ok_or_else(malformed)?.map_err(arithmetic)?;

            if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(malformed());
            }
            // Trailing zeros only inflate the scale.
            let fraction = fraction.trim_end_matches('0');
            if fraction.len() > MAX_DECIMAL_PLACES {
                return Err(arithmetic(ArithmeticError::Overflow));
            }
            let scale = 10_u128.pow(fraction.len() as u32);
            let fractional = if fraction.is_empty() {
                0
            } else {
                digits(fraction).ok_or_else(malformed)?.map_err(arithmetic)?
            };

            let magnitude = integer.checked_mul(scale)
                .and_then(|value| value.checked_add(fractional))
                .ok_or_else(|| arithmetic(ArithmeticError::Overflow))?;
            (magnitude, scale)
        } else {
            (digits(unsigned).ok_or_else(malformed)?.map_err(arithmetic)?, 1)
        };

        let numerator = i128::try_from(magnitude).map_err(|_| arithmetic(ArithmeticError::Overflow))?;
        let numerator = if negative { -numerator } else { numerator };
        let denominator = i128::try_from(denominator).map_err(|_| arithmetic(ArithmeticError::Overflow))?;

        ExactRational::from_wide(numerator, denominator).map_err(arithmetic)
    }
}

/// Read a nonempty string of ASCII digits.
///
/// # Return value
///
/// `None` if the text isn't a digit string, an `Overflow` error if the digits don't fit.
fn digits(text: &str) -> Option<Result<u128, ArithmeticError>> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    Some(text.parse().map_err(|_| ArithmeticError::Overflow))
}

#[cfg(test)]
mod test {
    use test_case::test_case;

    use crate::R64;
    use crate::data::number_types::rational::{ArithmeticError, ExactRational};
    use crate::data::number_types::rational::parse::LiteralError;

    #[test_case("3", 3, 1; "integer")]
    #[test_case("-17", -17, 1; "negative integer")]
    #[test_case("+4", 4, 1; "explicit plus")]
    #[test_case("  12  ", 12, 1; "surrounding whitespace")]
    #[test_case("0.5", 1, 2; "decimal")]
    #[test_case("-.25", -1, 4; "decimal without integer part")]
    #[test_case("2.", 2, 1; "trailing dot")]
    #[test_case("1.500", 3, 2; "trailing zeros")]
    #[test_case("-3.125", -25, 8; "negative decimal")]
    #[test_case("1/3", 1, 3; "fraction")]
    #[test_case("-6/4", -3, 2; "negative fraction is reduced")]
    #[test_case("0/9", 0, 1; "zero fraction")]
    fn valid(text: &str, numerator: i64, denominator: i64) {
        assert_eq!(text.parse::<ExactRational>(), Ok(R64!(numerator, denominator)));
    }

    #[test_case("x"; "letter")]
    #[test_case("1e5"; "exponent")]
    #[test_case("."; "lone dot")]
    #[test_case("1.2.3"; "two dots")]
    #[test_case("1/"; "missing denominator")]
    #[test_case("/2"; "missing numerator")]
    #[test_case("1/2/3"; "double fraction")]
    #[test_case("--1"; "double sign")]
    #[test_case("1.5/2"; "decimal numerator")]
    fn malformed(text: &str) {
        assert!(matches!(text.parse::<ExactRational>(), Err(LiteralError::Malformed(_))));
    }

    #[test]
    fn empty() {
        assert_eq!("   ".parse::<ExactRational>(), Err(LiteralError::Empty));
    }

    #[test]
    fn unrepresentable() {
        let error = |text: &str| match text.parse::<ExactRational>() {
            Err(LiteralError::Arithmetic { source, .. }) => source,
            other => panic!("expected an arithmetic error, got {:?}", other),
        };

        assert_eq!(error("3/0"), ArithmeticError::DivisionByZero);
        assert_eq!(error("9223372036854775808"), ArithmeticError::Overflow);
        assert_eq!(error("0.0000000000000000000001"), ArithmeticError::Overflow);
        assert_eq!(error("123456789012345678901234567890123456789012"), ArithmeticError::Overflow);
        assert_eq!("-9223372036854775808".parse::<ExactRational>(), Ok(R64!(i64::MIN)));
    }
}
