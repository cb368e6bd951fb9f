use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::required_arg},
        value::core::Value,
    },
};

/// Name the factorial is registered under. The parser calls it for every
/// postfix `!`.
pub const FACTORIAL: &str = "fact";

/// Largest accepted factorial argument.
pub const MAX_FACTORIAL: u32 = 2_000;

/// Computes the exact factorial of a small non-negative integer.
///
/// Reals are accepted when they have no fractional part.
///
/// # Errors
/// `DomainError` for negative, fractional, non-finite or too large arguments.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::fact::fact, value::core::Value};
///
/// assert_eq!(fact(&[Some(Value::from(5))]).unwrap(), Value::from(120));
/// assert_eq!(fact(&[Some(Value::Real(3.0))]).unwrap(), Value::from(6));
///
/// assert!(fact(&[Some(Value::from(-1))]).is_err());
/// assert!(fact(&[Some(Value::Real(2.5))]).is_err());
/// assert!(fact(&[Some(Value::from(2001))]).is_err());
/// ```
pub fn fact(args: &[Option<Value>]) -> EvalResult<Value> {
    let n = required_arg(args, 0)?.as_integral()
                                  .and_then(|n| n.to_u32())
                                  .filter(|n| *n <= MAX_FACTORIAL)
                                  .ok_or_else(|| {
                                      RuntimeError::domain(format!("Factorial expects a non-negative integer ≤ {MAX_FACTORIAL}"))
                                  })?;

    Ok(Value::Integer(factorial(n)))
}

/// `n!` as an exact integer.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use sandcalc::interpreter::evaluator::function::fact::factorial;
///
/// assert_eq!(factorial(0), BigInt::from(1));
/// assert_eq!(factorial(20), BigInt::from(2_432_902_008_176_640_000u64));
/// ```
#[must_use]
pub fn factorial(n: u32) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, k| acc * k)
}
