use crate::{interpreter::value::core::Value, util::num::f64_to_bigint_checked};

/// Reals closer than this to an integer are reported as that integer.
pub const INTEGRAL_TOLERANCE: f64 = 1e-12;

/// Collapses near-integral reals into integers.
///
/// A finite real within [`INTEGRAL_TOLERANCE`] of its nearest integer becomes
/// that integer. Integers, other reals, infinities and NaN are returned
/// unchanged, so normalizing twice gives the same value as normalizing once.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{normalize::normalize, value::core::Value};
///
/// assert_eq!(normalize(Value::Real(4.0)), Value::from(4));
/// assert_eq!(normalize(Value::Real(0.1 + 0.2 + 2.7)), Value::from(3));
/// assert_eq!(normalize(Value::Real(2.5)), Value::Real(2.5));
/// assert_eq!(normalize(Value::Real(f64::INFINITY)), Value::Real(f64::INFINITY));
/// ```
#[must_use]
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Real(r) if r.is_finite() => {
            let nearest = r.round();
            if (r - nearest).abs() < INTEGRAL_TOLERANCE
               && let Ok(n) = f64_to_bigint_checked(nearest)
            {
                return Value::Integer(n);
            }
            Value::Real(r)
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_becomes_zero() {
        assert_eq!(normalize(Value::Real(-0.0)), Value::from(0));
    }

    #[test]
    fn tolerance_is_strict() {
        assert_eq!(normalize(Value::Real(1.0 + 1e-13)), Value::from(1));
        assert_eq!(normalize(Value::Real(1.0 + 1e-9)), Value::Real(1.0 + 1e-9));
    }

    #[test]
    fn nan_is_unchanged() {
        assert!(matches!(normalize(Value::Real(f64::NAN)), Value::Real(r) if r.is_nan()));
    }

    #[test]
    fn large_integral_reals_become_exact_integers() {
        let Value::Integer(n) = normalize(Value::Real(1e20)) else {
            panic!("expected an integer");
        };
        assert_eq!(n.to_string(), "100000000000000000000");
    }
}
