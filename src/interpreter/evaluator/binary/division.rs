use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates true division `/`.
    ///
    /// The result is always a real, even for two integers that divide evenly.
    /// Two integers are divided exactly and the quotient is rounded once, so
    /// operands far beyond `f64` range still divide as long as the quotient
    /// fits.
    ///
    /// # Errors
    /// - `DivisionByZero` if `right` is zero.
    /// - `DomainError` if the quotient of two integers is too large for an
    ///   `f64`, or an integer mixed with a real does not fit in one.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use sandcalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let r = Context::eval_div(&Value::from(6), &Value::from(3)).unwrap();
    /// assert_eq!(r, Value::Real(2.0));
    ///
    /// let huge = Value::Integer(BigInt::from(10).pow(400));
    /// let r = Context::eval_div(&huge, &Value::Integer(BigInt::from(10).pow(399))).unwrap();
    /// assert_eq!(r, Value::Real(10.0));
    ///
    /// assert!(Context::eval_div(&Value::from(1), &Value::Real(0.0)).is_err());
    /// ```
    pub fn eval_div(left: &Value, right: &Value) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => integer_true_div(a, b).map(Value::Real),
            _ => Ok(Value::Real(left.as_real()? / right.as_real()?)),
        }
    }

    /// Evaluates floor division `//`.
    ///
    /// The quotient is rounded toward negative infinity. Two integers give an
    /// exact integer, otherwise the result is a real.
    ///
    /// # Errors
    /// `DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use sandcalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let q = Context::eval_floor_div(&Value::from(7), &Value::from(-2)).unwrap();
    /// assert_eq!(q, Value::from(-4));
    ///
    /// let q = Context::eval_floor_div(&Value::Real(7.5), &Value::from(2)).unwrap();
    /// assert_eq!(q, Value::Real(3.0));
    /// ```
    pub fn eval_floor_div(left: &Value, right: &Value) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(floor_divmod(a, b).0)),
            _ => Ok(Value::Real(float_divmod(left.as_real()?, right.as_real()?).0)),
        }
    }

    /// Evaluates the modulo operator `%`.
    ///
    /// The remainder has the sign of `right`, so that
    /// `a == (a // b) * b + a % b` holds.
    ///
    /// # Errors
    /// `DivisionByZero` if `right` is zero.
    ///
    /// # Example
    /// ```
    /// use sandcalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let r = Context::eval_mod(&Value::from(-7), &Value::from(3)).unwrap();
    /// assert_eq!(r, Value::from(2));
    ///
    /// let r = Context::eval_mod(&Value::Real(7.5), &Value::from(-2)).unwrap();
    /// assert_eq!(r, Value::Real(-0.5));
    /// ```
    pub fn eval_mod(left: &Value, right: &Value) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(floor_divmod(a, b).1)),
            _ => Ok(Value::Real(float_divmod(left.as_real()?, right.as_real()?).1)),
        }
    }
}

/// Significant bits of the scaled quotient in [`integer_true_div`], well past
/// the 53 an `f64` keeps.
const QUOTIENT_BITS: i64 = 66;

/// Integers of at most this many bits convert to `f64` exactly.
const EXACT_F64_BITS: u64 = 53;

/// Divides two integers into the nearest `f64`.
///
/// Small operands convert exactly and divide in hardware. Otherwise the
/// dividend is scaled by a power of two so that the truncated quotient keeps
/// [`QUOTIENT_BITS`] bits, a sticky bit records a non-zero remainder, and the
/// scale is undone on the rounded result. `b` must be non-zero.
fn integer_true_div(a: &BigInt, b: &BigInt) -> EvalResult<f64> {
    if a.bits() <= EXACT_F64_BITS
       && b.bits() <= EXACT_F64_BITS
       && let (Some(x), Some(y)) = (a.to_f64(), b.to_f64())
    {
        return Ok(x / y);
    }

    let bits = |n: &BigInt| i64::try_from(n.bits()).unwrap_or(i64::MAX);
    let shift = QUOTIENT_BITS - (bits(a) - bits(b));
    let (numerator, denominator) = if shift >= 0 {
        (a << shift.unsigned_abs(), b.clone())
    } else {
        (a.clone(), b << shift.unsigned_abs())
    };

    let quotient = &numerator / &denominator;
    let mut scaled = quotient.abs() << 1u8;
    if !(&numerator % &denominator).is_zero() {
        scaled += 1u8;
    }

    let magnitude = scaled.to_f64().unwrap_or(f64::INFINITY);
    let result = scale_by_power_of_two(magnitude, -(shift + 1));
    if !result.is_finite() {
        return Err(RuntimeError::domain("integer quotient too large to convert to float"));
    }

    Ok(if a.is_negative() != b.is_negative() { -result } else { result })
}

/// Computes `value * 2^exponent` in two steps so that neither factor
/// overflows or underflows on its own.
fn scale_by_power_of_two(value: f64, exponent: i64) -> f64 {
    let clamp = |e: i64| i32::try_from(e).unwrap_or(if e < 0 { i32::MIN } else { i32::MAX });
    let half = exponent / 2;
    value * 2f64.powi(clamp(half)) * 2f64.powi(clamp(exponent - half))
}

/// Integer quotient and remainder with the quotient rounded toward negative
/// infinity.
///
/// `b` must be non-zero.
fn floor_divmod(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let mut quotient = a / b;
    let mut remainder = a % b;

    if !remainder.is_zero() && remainder.is_negative() != b.is_negative() {
        quotient -= 1;
        remainder += b;
    }

    (quotient, remainder)
}

/// Real quotient and remainder with the same rounding as [`floor_divmod`].
///
/// The remainder is computed with `fmod` and corrected toward the sign of the
/// divisor; the quotient is derived from it so that both stay consistent
/// under rounding. `b` must be non-zero.
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut remainder = a % b;
    let mut quotient = (a - remainder) / b;

    if remainder == 0.0 {
        remainder = 0.0f64.copysign(b);
    } else if (b < 0.0) != (remainder < 0.0) {
        remainder += b;
        quotient -= 1.0;
    }

    let floored = if quotient == 0.0 {
        0.0f64.copysign(a / b)
    } else {
        let floored = quotient.floor();
        if quotient - floored > 0.5 { floored + 1.0 } else { floored }
    };

    (floored, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_divmod_follows_divisor_sign() {
        let cases = [(7, 2, 3, 1), (-7, 2, -4, 1), (7, -2, -4, -1), (-7, -2, 3, -1), (6, 3, 2, 0)];

        for (a, b, q, r) in cases {
            let (quotient, remainder) = floor_divmod(&BigInt::from(a), &BigInt::from(b));
            assert_eq!((quotient, remainder),
                       (BigInt::from(q), BigInt::from(r)),
                       "{a} divmod {b}");
        }
    }

    #[test]
    fn float_divmod_matches_integer_rules() {
        assert_eq!(float_divmod(7.5, 2.0), (3.0, 1.5));
        assert_eq!(float_divmod(-7.5, 2.0), (-4.0, 0.5));
        assert_eq!(float_divmod(7.5, -2.0), (-4.0, -0.5));
    }

    #[test]
    fn integer_true_div_handles_operands_beyond_f64() {
        let ten = BigInt::from(10);

        assert_eq!(integer_true_div(&ten.pow(400), &ten.pow(399)).unwrap(), 10.0);
        assert_eq!(integer_true_div(&-ten.pow(400), &ten.pow(401)).unwrap(), -0.1);
        assert_eq!(integer_true_div(&BigInt::from(1), &ten.pow(400)).unwrap(), 0.0);
        assert_eq!(integer_true_div(&BigInt::from(7), &BigInt::from(2)).unwrap(), 3.5);
        assert!(integer_true_div(&ten.pow(400), &BigInt::from(3)).is_err());
    }

    #[test]
    fn integer_true_div_rounds_once() {
        let numerator = (BigInt::from(1) << 200u32) + 1u8;
        let denominator = BigInt::from(1) << 200u32;

        assert_eq!(integer_true_div(&numerator, &denominator).unwrap(), 1.0);
        assert_eq!(integer_true_div(&BigInt::from(2).pow(60), &BigInt::from(3)).unwrap(),
                   2f64.powi(60) / 3.0);
    }

    #[test]
    fn float_divmod_zero_remainder_takes_divisor_sign() {
        let (_, remainder) = float_divmod(4.0, -2.0);
        assert_eq!(remainder, 0.0);
        assert!(remainder.is_sign_negative());
    }
}
