use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Largest exact integer power result, in bits.
pub const MAX_INTEGER_BITS: u64 = 100_000;

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer bases with non-negative integer exponents are computed exactly.
    /// Negative integer exponents and every other operand combination are
    /// computed in floating point with `powf`.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero base with a negative exponent.
    /// - `DomainError` if an exact result would exceed [`MAX_INTEGER_BITS`],
    ///   for a negative real base with a fractional exponent, and for finite
    ///   operands whose real result overflows.
    ///
    /// # Example
    /// ```
    /// use sandcalc::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&Value::from(2), &Value::from(10)).unwrap();
    /// assert_eq!(result, Value::from(1024));
    ///
    /// let result = Context::eval_pow(&Value::from(2), &Value::from(-1)).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    ///
    /// assert!(Context::eval_pow(&Value::from(0), &Value::from(-1)).is_err());
    /// assert!(Context::eval_pow(&Value::from(-8), &Value::Real(0.5)).is_err());
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
        match (base, exponent) {
            (Value::Integer(b), Value::Integer(e)) if !e.is_negative() => {
                checked_integer_pow(b, e).map(Value::Integer)
            },
            _ => real_pow(base.as_real()?, exponent.as_real()?).map(Value::Real),
        }
    }
}

/// Raises `base` to a non-negative `exponent`, refusing results larger than
/// [`MAX_INTEGER_BITS`].
fn checked_integer_pow(base: &BigInt, exponent: &BigInt) -> EvalResult<BigInt> {
    if base.is_zero() {
        return Ok(if exponent.is_zero() { BigInt::one() } else { BigInt::zero() });
    }
    if base.abs().is_one() {
        return Ok(if base.is_negative() && exponent.bit(0) { -BigInt::one() } else { BigInt::one() });
    }

    let too_large = || RuntimeError::domain(format!("integer power exceeds {MAX_INTEGER_BITS} bits"));

    // |base| >= 2, so the result has at least (bits - 1) * exponent + 1 bits.
    let exponent = exponent.to_u64().ok_or_else(too_large)?;
    let min_bits = (base.bits() - 1).saturating_mul(exponent).saturating_add(1);
    if min_bits > MAX_INTEGER_BITS {
        return Err(too_large());
    }

    let exponent = u32::try_from(exponent).map_err(|_| too_large())?;
    Ok(base.pow(exponent))
}

/// Floating point power with the domain checks of real exponentiation.
fn real_pow(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(RuntimeError::domain(format!("negative number {base} cannot be raised to a fractional power")));
    }

    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(RuntimeError::domain("numerical result out of range"));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_power_of_unit_bases_ignores_cap() {
        let huge = BigInt::from(10).pow(30);

        assert_eq!(checked_integer_pow(&BigInt::one(), &huge).unwrap(), BigInt::one());
        assert_eq!(checked_integer_pow(&BigInt::from(-1), &huge).unwrap(), BigInt::one());
        assert_eq!(checked_integer_pow(&BigInt::from(-1), &(huge + 1u8)).unwrap(),
                   BigInt::from(-1));
        assert_eq!(checked_integer_pow(&BigInt::zero(), &BigInt::zero()).unwrap(),
                   BigInt::one());
    }

    #[test]
    fn integer_power_cap_is_enforced() {
        let at_cap = checked_integer_pow(&BigInt::from(2), &BigInt::from(MAX_INTEGER_BITS - 1));
        assert_eq!(at_cap.unwrap().bits(), MAX_INTEGER_BITS);

        let over = checked_integer_pow(&BigInt::from(2), &BigInt::from(MAX_INTEGER_BITS));
        assert!(matches!(over, Err(RuntimeError::DomainError { .. })));

        let over = checked_integer_pow(&BigInt::from(10), &BigInt::from(10).pow(10));
        assert!(matches!(over, Err(RuntimeError::DomainError { .. })));
    }

    #[test]
    fn real_power_domain() {
        assert_eq!(real_pow(4.0, 0.5).unwrap(), 2.0);
        assert_eq!(real_pow(-8.0, 3.0).unwrap(), -512.0);
        assert!(matches!(real_pow(0.0, -2.0), Err(RuntimeError::DivisionByZero)));
        assert!(matches!(real_pow(10.0, 400.0), Err(RuntimeError::DomainError { .. })));
        assert!(real_pow(f64::INFINITY, 2.0).unwrap().is_infinite());
    }
}
