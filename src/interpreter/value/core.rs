use std::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::{
    ast::Literal,
    interpreter::evaluator::core::EvalResult,
    util::num::{bigint_to_f64_checked, f64_to_bigint_checked},
};

/// Represents a numeric runtime value.
///
/// Integers are exact and arbitrarily large; reals are double precision.
/// Integer arithmetic stays exact where the operator allows it, and any
/// operation involving a real promotes the integer to a real.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An exact integer.
    Integer(BigInt),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Integer(n) => Self::Integer(n.clone()),
            Literal::Real(r) => Self::Real(*r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// # Errors
    /// Returns a `DomainError` for integers too large to be a finite `f64`.
    ///
    /// # Example
    /// ```
    /// use sandcalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(10).as_real().unwrap(), 10.0);
    /// assert_eq!(Value::Real(0.5).as_real().unwrap(), 0.5);
    /// ```
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => bigint_to_f64_checked(n),
            Self::Real(r) => Ok(*r),
        }
    }

    /// Returns the exact integer this value represents, if it is integral.
    ///
    /// Reals count as integral when they are finite and have no fractional
    /// part, so `5.0` yields `5`.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use sandcalc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Real(5.0).as_integral(), Some(BigInt::from(5)));
    /// assert_eq!(Value::Real(2.5).as_integral(), None);
    /// assert_eq!(Value::Real(f64::INFINITY).as_integral(), None);
    /// ```
    #[must_use]
    pub fn as_integral(&self) -> Option<BigInt> {
        match self {
            Self::Integer(n) => Some(n.clone()),
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 => f64_to_bigint_checked(*r).ok(),
            Self::Real(_) => None,
        }
    }

    /// Returns `true` for integer zero and for both real zeros.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Real(r) => *r == 0.0,
        }
    }

    /// Returns `true` for values strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_negative(),
            Self::Real(r) => *r < 0.0,
        }
    }

    /// Returns `false` only for infinite and NaN reals.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(r) => r.is_finite(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_nan() => write!(f, "nan"),
            Self::Real(r) if r.is_infinite() => {
                write!(f, "{}", if *r > 0.0 { "inf" } else { "-inf" })
            },
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
