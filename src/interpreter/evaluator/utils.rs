use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the bound argument at `index`.
///
/// Builtins receive their arguments already bound to the parameter list, with
/// `None` for optional parameters that were not supplied. Required parameters
/// are always present after binding, so a missing one indicates a builtin
/// whose signature and body disagree.
///
/// # Example
/// ```
/// use sandcalc::interpreter::{evaluator::utils::required_arg, value::core::Value};
///
/// let args = [Some(Value::from(3)), None];
///
/// assert_eq!(required_arg(&args, 0).unwrap(), &Value::from(3));
/// assert!(required_arg(&args, 1).is_err());
/// ```
pub fn required_arg(args: &[Option<Value>], index: usize) -> EvalResult<&Value> {
    args.get(index)
        .and_then(Option::as_ref)
        .ok_or_else(|| RuntimeError::domain(format!("missing argument {}", index + 1)))
}

/// Returns the bound argument at `index`, or `None` when it was omitted.
#[must_use]
pub fn optional_arg(args: &[Option<Value>], index: usize) -> Option<&Value> {
    args.get(index).and_then(Option::as_ref)
}
