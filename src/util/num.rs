use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Integers with more significant bits than this are scaled down before being
/// converted for logarithms.
const LOG_SCALE_BITS: u64 = 1_000;

/// Converts an exact integer to `f64`, rejecting values whose magnitude does
/// not fit.
///
/// ## Errors
/// Returns a `DomainError` if the integer is too large to be represented as a
/// finite `f64`.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use sandcalc::util::num::bigint_to_f64_checked;
///
/// assert_eq!(bigint_to_f64_checked(&BigInt::from(42)).unwrap(), 42.0);
///
/// let huge = BigInt::from(10).pow(400);
/// assert!(bigint_to_f64_checked(&huge).is_err());
/// ```
pub fn bigint_to_f64_checked(value: &BigInt) -> EvalResult<f64> {
    match value.to_f64() {
        Some(r) if r.is_finite() => Ok(r),
        _ => Err(RuntimeError::domain("integer too large to convert to float")),
    }
}

/// Converts an integral `f64` to an exact integer.
///
/// The value is truncated toward zero; callers round first when needed.
///
/// ## Errors
/// Returns a `DomainError` for infinities and NaN.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use sandcalc::util::num::f64_to_bigint_checked;
///
/// assert_eq!(f64_to_bigint_checked(1e20).unwrap(),
///            BigInt::parse_bytes(b"100000000000000000000", 10).unwrap());
/// assert!(f64_to_bigint_checked(f64::NAN).is_err());
/// ```
pub fn f64_to_bigint_checked(value: f64) -> EvalResult<BigInt> {
    if !value.is_finite() {
        return Err(RuntimeError::domain(format!("cannot convert {value} to integer")));
    }
    BigInt::from_f64(value).ok_or_else(|| {
                                RuntimeError::domain(format!("cannot convert {value} to integer"))
                            })
}

/// Natural logarithm of a positive integer of any size.
///
/// Small integers are converted directly. Large ones are shifted right until
/// they fit comfortably in an `f64`, and the shift is added back as a multiple
/// of `ln 2`.
///
/// ## Errors
/// Returns a `DomainError` for zero and negative integers.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use sandcalc::util::num::ln_bigint;
///
/// let ln = ln_bigint(&BigInt::from(8)).unwrap();
/// assert!((ln - 8f64.ln()).abs() < 1e-15);
///
/// // 2^5000 overflows f64 but its logarithm does not.
/// let ln = ln_bigint(&(BigInt::from(1) << 5000)).unwrap();
/// assert!((ln - 5000.0 * std::f64::consts::LN_2).abs() < 1e-9);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn ln_bigint(value: &BigInt) -> EvalResult<f64> {
    if value.sign() != Sign::Plus {
        return Err(RuntimeError::domain("math domain error"));
    }

    let bits = value.bits();
    if bits <= LOG_SCALE_BITS {
        return Ok(bigint_to_f64_checked(value)?.ln());
    }

    let shift = bits - 64;
    let mantissa = bigint_to_f64_checked(&(value >> shift))?;
    Ok(mantissa.ln() + shift as f64 * std::f64::consts::LN_2)
}
