use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::required_arg},
        value::core::Value,
    },
};

/// Computes the square root of a non-negative number.
///
/// The result is always a real. Integers are converted first, so integers too
/// large for `f64` are rejected.
///
/// # Errors
/// `DomainError` for negative arguments and oversized integers.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::function::sqrt::sqrt, value::core::Value};
///
/// let r = sqrt(&[Some(Value::from(9))]).unwrap();
/// assert_eq!(r, Value::Real(3.0));
///
/// assert!(sqrt(&[Some(Value::Real(-1.0))]).is_err());
/// ```
pub fn sqrt(args: &[Option<Value>]) -> EvalResult<Value> {
    let x = required_arg(args, 0)?;
    if x.is_negative() {
        return Err(RuntimeError::domain(format!("sqrt() of negative number {x}")));
    }

    Ok(Value::Real(x.as_real()?.sqrt()))
}
