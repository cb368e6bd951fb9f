use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{optional_arg, required_arg},
        },
        value::core::Value,
    },
    util::num::ln_bigint,
};

/// Base used by `log` when none is given.
const DEFAULT_BASE: i64 = 10;

/// Computes the logarithm of a value with respect to a given base.
///
/// Takes `x` and an optional base `b`, which defaults to 10 and may be passed
/// by keyword. The result is `ln(x) / ln(b)`.
///
/// # Errors
/// - `DomainError` if `x` or `b` is not positive.
/// - `DivisionByZero` if `b` is 1.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::log::log, value::core::Value};
///
/// let result = log(&[Some(Value::from(100)), None]).unwrap();
/// assert_eq!(result, Value::Real(2.0));
///
/// let result = log(&[Some(Value::from(8)), Some(Value::from(2))]).unwrap();
/// assert_eq!(result, Value::Real(3.0));
///
/// assert!(log(&[Some(Value::from(5)), Some(Value::from(1))]).is_err());
/// ```
pub fn log(args: &[Option<Value>]) -> EvalResult<Value> {
    let x = required_arg(args, 0)?;
    let base = optional_arg(args, 1).cloned().unwrap_or(Value::from(DEFAULT_BASE));

    log_with_base(x, &base).map(Value::Real)
}

/// Computes the natural logarithm, or the logarithm to `base` when a second
/// argument is given.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::log::ln, value::core::Value};
///
/// let e = std::f64::consts::E;
/// assert_eq!(ln(&[Some(Value::Real(e)), None]).unwrap(), Value::Real(1.0));
///
/// assert!(ln(&[Some(Value::from(0)), None]).is_err());
/// ```
pub fn ln(args: &[Option<Value>]) -> EvalResult<Value> {
    let x = required_arg(args, 0)?;

    match optional_arg(args, 1) {
        Some(base) => log_with_base(x, base).map(Value::Real),
        None => natural_log(x).map(Value::Real),
    }
}

/// `ln(x) / ln(base)`.
fn log_with_base(x: &Value, base: &Value) -> EvalResult<f64> {
    let numerator = natural_log(x)?;
    let denominator = natural_log(base)?;

    if denominator == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(numerator / denominator)
}

/// Natural logarithm of any positive value.
///
/// Integers are handled by [`ln_bigint`], so values far beyond the range of
/// `f64` still have a finite logarithm.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use sandcalc::interpreter::{evaluator::function::log::natural_log, value::core::Value};
///
/// let huge = Value::Integer(BigInt::from(10).pow(1000));
/// let ln = natural_log(&huge).unwrap();
///
/// assert!((ln - 1000.0 * std::f64::consts::LN_10).abs() < 1e-9);
/// assert!(natural_log(&Value::Real(-1.0)).is_err());
/// ```
pub fn natural_log(value: &Value) -> EvalResult<f64> {
    match value {
        Value::Integer(n) => ln_bigint(n),
        Value::Real(r) if *r <= 0.0 => Err(RuntimeError::domain("math domain error")),
        Value::Real(r) => Ok(r.ln()),
    }
}
