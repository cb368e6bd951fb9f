use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{optional_arg, required_arg},
        },
        value::core::Value,
    },
    util::num::f64_to_bigint_checked,
};

/// Beyond this many decimal places every `f64` is returned unchanged by
/// `round`.
const MAX_ROUND_DIGITS: usize = 323;

/// Applies a trigonometric function to a numeric value.
///
/// The generated functions take one argument in radians. Integers are
/// converted to real numbers first. Infinite and NaN arguments are outside the
/// domain.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Real(std::f64::consts::PI / 2.0);
/// let r = sin(&[Some(x)]).unwrap();
///
/// assert_eq!(r, Value::Real(1.0));
/// assert!(sin(&[Some(Value::Real(f64::INFINITY))]).is_err());
/// ```
macro_rules! trig_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[Option<Value>]) -> EvalResult<Value> {
            let x = required_arg(args, 0)?.as_real()?;
            if !x.is_finite() {
                return Err(RuntimeError::domain(concat!(stringify!($fname), "() of a non-finite value")));
            }
            Ok(Value::Real(x.$fname()))
        }
    };
}

trig_builtin!(sin);
trig_builtin!(cos);
trig_builtin!(tan);

/// Returns the absolute value.
///
/// Integers stay integers.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// assert_eq!(abs(&[Some(Value::from(-3))]).unwrap(), Value::from(3));
/// assert_eq!(abs(&[Some(Value::Real(-2.5))]).unwrap(), Value::Real(2.5));
/// ```
pub fn abs(args: &[Option<Value>]) -> EvalResult<Value> {
    match required_arg(args, 0)? {
        Value::Integer(n) => Ok(Value::Integer(n.abs())),
        Value::Real(r) => Ok(Value::Real(r.abs())),
    }
}

/// Rounds a number half to even.
///
/// Without `ndigits` the result is an integer. With `ndigits` the result has
/// the type of `number`, rounded to that many decimal places; a negative
/// `ndigits` rounds to tens, hundreds and so on.
///
/// # Errors
/// - `DomainError` if `ndigits` is not an integer.
/// - `DomainError` when rounding an infinite or NaN real to an integer.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::builtin::round, value::core::Value};
///
/// assert_eq!(round(&[Some(Value::Real(2.5)), None]).unwrap(), Value::from(2));
/// assert_eq!(round(&[Some(Value::Real(3.5)), None]).unwrap(), Value::from(4));
/// assert_eq!(round(&[Some(Value::Real(3.14159)), Some(Value::from(2))]).unwrap(),
///            Value::Real(3.14));
/// assert_eq!(round(&[Some(Value::from(1250)), Some(Value::from(-2))]).unwrap(),
///            Value::from(1200));
/// ```
pub fn round(args: &[Option<Value>]) -> EvalResult<Value> {
    let number = required_arg(args, 0)?;

    let Some(ndigits) = optional_arg(args, 1) else {
        return match number {
            Value::Integer(n) => Ok(Value::Integer(n.clone())),
            Value::Real(r) => f64_to_bigint_checked(r.round_ties_even()).map(Value::Integer),
        };
    };

    let Value::Integer(ndigits) = ndigits else {
        return Err(RuntimeError::domain("round() ndigits must be an integer"));
    };

    match number {
        Value::Integer(n) if ndigits.is_negative() => Ok(Value::Integer(round_integer(n, ndigits))),
        Value::Integer(n) => Ok(Value::Integer(n.clone())),
        Value::Real(r) => Ok(Value::Real(round_real(*r, ndigits))),
    }
}

/// Rounds an integer to a multiple of `10^-ndigits`, half to even.
fn round_integer(n: &BigInt, ndigits: &BigInt) -> BigInt {
    // 10^k exceeds |n| once k passes its bit length.
    let places = (-ndigits).to_u64().unwrap_or(u64::MAX);
    if places > n.bits() {
        return BigInt::zero();
    }

    let Ok(places) = u32::try_from(places) else {
        return BigInt::zero();
    };
    let scale = BigInt::from(10).pow(places);

    let mut quotient = n / &scale;
    let mut remainder = n % &scale;
    if remainder.is_negative() {
        quotient -= 1;
        remainder += &scale;
    }

    let doubled = remainder * 2;
    if doubled > scale || (doubled == scale && quotient.bit(0)) {
        quotient += 1;
    }

    quotient * scale
}

/// Rounds a real to `ndigits` decimal places, half to even on the exact
/// decimal value of the float.
fn round_real(r: f64, ndigits: &BigInt) -> f64 {
    if !r.is_finite() {
        return r;
    }

    if !ndigits.is_negative() {
        let Some(places) = ndigits.to_usize().filter(|places| *places <= MAX_ROUND_DIGITS) else {
            return r;
        };
        return format!("{r:.places$}").parse().unwrap_or(r);
    }

    let places = (-ndigits).to_i32().unwrap_or(i32::MAX);
    let scale = 10f64.powi(places);
    if !scale.is_finite() {
        return 0.0f64.copysign(r);
    }
    (r / scale).round_ties_even() * scale
}

/// Applies a rounding operation (`floor` or `ceil`) to a numeric value.
///
/// The operation is selected by name. The result is always an integer;
/// integers are returned as-is.
///
/// # Errors
/// `DomainError` for infinite and NaN arguments.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::builtin::unary_round, value::core::Value};
///
/// let r = unary_round("floor", &[Some(Value::Real(3.8))]).unwrap();
/// assert_eq!(r, Value::from(3));
///
/// let r = unary_round("ceil", &[Some(Value::Real(-3.8))]).unwrap();
/// assert_eq!(r, Value::from(-3));
/// ```
pub fn unary_round(name: &str, args: &[Option<Value>]) -> EvalResult<Value> {
    let op = match name {
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        _ => return Err(RuntimeError::UnknownName { name: name.to_string() }),
    };

    match required_arg(args, 0)? {
        Value::Integer(n) => Ok(Value::Integer(n.clone())),
        Value::Real(r) => f64_to_bigint_checked(op(*r)).map(Value::Integer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_integer_half_even() {
        let cases = [(1250, -2, 1200),
                     (1350, -2, 1400),
                     (-1250, -2, -1200),
                     (1251, -2, 1300),
                     (5, -1, 0),
                     (15, -1, 20),
                     (-15, -1, -20),
                     (42, -10, 0)];

        for (n, digits, expected) in cases {
            assert_eq!(round_integer(&BigInt::from(n), &BigInt::from(digits)),
                       BigInt::from(expected),
                       "round({n}, {digits})");
        }
    }

    #[test]
    fn round_real_uses_exact_decimal_value() {
        assert_eq!(round_real(2.675, &BigInt::from(2)), 2.67);
        assert_eq!(round_real(1234.5, &BigInt::from(-1)), 1230.0);
        assert_eq!(round_real(1.5, &BigInt::from(400)), 1.5);
    }

    #[test]
    fn round_rejects_real_ndigits() {
        let err = round(&[Some(Value::Real(1.25)), Some(Value::Real(1.0))]);
        assert!(matches!(err, Err(RuntimeError::DomainError { .. })));
    }

    #[test]
    fn floor_of_infinity_is_domain_error() {
        let err = unary_round("floor", &[Some(Value::Real(f64::INFINITY))]);
        assert!(matches!(err, Err(RuntimeError::DomainError { .. })));
    }
}
