//! # Exact rational numbers
//!
//! Every number that takes part in a pivoting decision is represented by an `ExactRational`, so
//! that comparisons with zero and between ratios are exact.
//!
//! Values are stored as a reduced `Ratio<i64>`. Arithmetic is done on a `Ratio<i128>`, and an
//! operation fails with an `ArithmeticError` when the reduced result does not fit in 64 bits
//! again. Nothing wraps around silently.
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Zero};
use thiserror::Error;

pub mod parse;
mod macros;

/// Failure of an arithmetic operation on exact rationals.
///
/// These are never results of solving a problem; they indicate that the input can't be
/// represented.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ArithmeticError {
    /// A fraction with a zero denominator was requested.
    #[error("division by zero")]
    DivisionByZero,
    /// The reduced result doesn't fit in a 64-bit numerator and denominator.
    #[error("rational overflow: the result doesn't fit in 64 bits")]
    Overflow,
}

/// A fraction `numerator / denominator` in canonical form.
///
/// The denominator is strictly positive and coprime with the numerator. Zero is stored as `0/1`.
/// Because the form is canonical, the derived `Eq` and `Hash` agree with numerical equality.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ExactRational(Ratio<i64>);

/// Intermediate representation, wide enough for any sum or product of two 64-bit fractions.
type Wide = Ratio<i128>;

impl ExactRational {
    /// Create a new value and bring it in canonical form.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the denominator is zero, `Overflow` if the canonical form can't be
    /// represented (this happens only for `i64::MIN` in combination with a negative value).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// An integer value, always representable.
    pub const fn from_integer(value: i64) -> Self {
        Self(Ratio::new_raw(value, 1))
    }

    /// Reduce a fraction given with 128-bit precision.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        if numerator == i128::MIN || denominator == i128::MIN {
            return Err(ArithmeticError::Overflow);
        }

        Self::narrow(Ratio::new(numerator, denominator))
    }

    /// Convert a reduced wide value back, if it fits.
    fn narrow(value: Wide) -> Result<Self, ArithmeticError> {
        let numerator = i64::try_from(*value.numer()).map_err(|_| ArithmeticError::Overflow)?;
        let denominator = i64::try_from(*value.denom()).map_err(|_| ArithmeticError::Overflow)?;

        Ok(Self(Ratio::new_raw(numerator, denominator)))
    }

    fn widen(&self) -> Wide {
        Ratio::new_raw(*self.0.numer() as i128, *self.0.denom() as i128)
    }

    /// Numerator of the canonical form, carries the sign.
    pub fn numerator(&self) -> i64 {
        *self.0.numer()
    }

    /// Denominator of the canonical form, always positive.
    pub fn denominator(&self) -> i64 {
        *self.0.denom()
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator() > 0
    }

    /// Strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator() < 0
    }

    /// Sum of two values.
    ///
    /// # Errors
    ///
    /// `Overflow` if the reduced sum doesn't fit.
    pub fn checked_add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let sum = self.widen().checked_add(&other.widen()).ok_or(ArithmeticError::Overflow)?;
        Self::narrow(sum)
    }

    /// Difference of two values.
    ///
    /// # Errors
    ///
    /// `Overflow` if the reduced difference doesn't fit.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let difference = self.widen().checked_sub(&other.widen()).ok_or(ArithmeticError::Overflow)?;
        Self::narrow(difference)
    }

    /// Product of two values.
    ///
    /// # Errors
    ///
    /// `Overflow` if the reduced product doesn't fit.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let product = self.widen().checked_mul(&other.widen()).ok_or(ArithmeticError::Overflow)?;
        Self::narrow(product)
    }

    /// Quotient of two values.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `other` is zero, `Overflow` if the reduced quotient doesn't fit.
    pub fn checked_div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let quotient = self.widen().checked_div(&other.widen()).ok_or(ArithmeticError::Overflow)?;
        Self::narrow(quotient)
    }

    /// Additive inverse.
    ///
    /// # Errors
    ///
    /// `Overflow` for a numerator of `i64::MIN`.
    pub fn checked_neg(&self) -> Result<Self, ArithmeticError> {
        Self::narrow(-self.widen())
    }

    /// Absolute value.
    ///
    /// # Errors
    ///
    /// `Overflow` for a numerator of `i64::MIN`.
    pub fn checked_abs(&self) -> Result<Self, ArithmeticError> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }
}

impl From<i64> for ExactRational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for ExactRational {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

// The operators behave like the primitive integer operators: they panic where the checked
// variants return an error. Solver code uses the checked variants.
macro_rules! impl_operator {
    ($trait:ident, $method:ident, $checked:ident, $verb:literal) => {
        impl $trait for ExactRational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                match self.$checked(&rhs) {
                    Ok(value) => value,
                    Err(error) => panic!("attempt to {} {} and {}: {}", $verb, self, rhs, error),
                }
            }
        }

        impl<'a> $trait<&'a ExactRational> for &'a ExactRational {
            type Output = ExactRational;

            fn $method(self, rhs: Self) -> Self::Output {
                (*self).$method(*rhs)
            }
        }
    };
}
impl_operator!(Add, add, checked_add, "add");
impl_operator!(Sub, sub, checked_sub, "subtract");
impl_operator!(Mul, mul, checked_mul, "multiply");
impl_operator!(Div, div, checked_div, "divide");

impl Neg for ExactRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Ok(value) => value,
            Err(error) => panic!("attempt to negate {}: {}", self, error),
        }
    }
}

impl Display for ExactRational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Debug for ExactRational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}
