use crate::{
    ast::{Expr, Keyword},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::{Capability, Registry},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context.
///
/// A context only borrows the capability registry; it holds no state of its
/// own, so any number of contexts may evaluate concurrently against the same
/// registry.
///
/// ## Usage
///
/// ```
/// use sandcalc::interpreter::{
///     evaluator::{core::Context, function::core::Registry},
///     parser::parse,
///     value::core::Value,
/// };
///
/// let expr = parse("2 * pi").unwrap();
/// let value = Context::new(Registry::global()).eval(&expr).unwrap();
///
/// assert_eq!(value, Value::Real(2.0 * std::f64::consts::PI));
/// ```
#[derive(Clone, Copy)]
pub struct Context<'r> {
    /// The names this context may resolve.
    registry: &'r Registry,
}

impl<'r> Context<'r> {
    /// Creates a context that resolves names against `registry`.
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; only numbers, the arithmetic
    /// operators, registry constants and calls of registry functions are
    /// accepted. Member access and string literals are rejected.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value, before normalization.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::from(value)),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr),
            Expr::Identifier { name, .. } => self.eval_identifier(name),
            Expr::Call { callee,
                         arguments,
                         keywords,
                         .. } => self.eval_call(callee, arguments, keywords),
            Expr::Attribute { name, .. } => {
                Err(RuntimeError::disallowed(format!("attribute access '.{name}'")))
            },
            Expr::Str { .. } => Err(RuntimeError::disallowed("string literal")),
        }
    }

    /// Resolves a bare name.
    ///
    /// Only constants are addressable as values; a function name used without
    /// a call is reported as unknown.
    ///
    /// # Example
    /// ```
    /// use sandcalc::interpreter::{
    ///     evaluator::{core::Context, function::core::Registry},
    ///     value::core::Value,
    /// };
    ///
    /// let context = Context::new(Registry::global());
    ///
    /// assert_eq!(context.eval_identifier("e").unwrap(), Value::Real(std::f64::consts::E));
    /// assert!(context.eval_identifier("sqrt").is_err());
    /// assert!(context.eval_identifier("__import__").is_err());
    /// ```
    pub fn eval_identifier(&self, name: &str) -> EvalResult<Value> {
        match self.registry.get(name) {
            Some(Capability::Constant(value)) => Ok(value.clone()),
            Some(Capability::Function(_)) | None => {
                Err(RuntimeError::UnknownName { name: name.to_string() })
            },
        }
    }

    /// Evaluates a call expression.
    ///
    /// The callee is checked before any argument is evaluated: it must be a
    /// plain identifier bound to a function. Arguments are then evaluated in
    /// source order, positional ones first, and bound against the function's
    /// signature.
    ///
    /// # Errors
    /// - `DisallowedOperation` for any callee that is not an identifier.
    /// - `UnknownName` for unknown names and for constants.
    /// - Whatever the arguments or the function itself report.
    pub fn eval_call(&self,
                     callee: &Expr,
                     arguments: &[Expr],
                     keywords: &[Keyword])
                     -> EvalResult<Value> {
        let name = match callee {
            Expr::Identifier { name, .. } => name,
            Expr::Attribute { name, .. } => {
                return Err(RuntimeError::disallowed(format!("call of attribute '.{name}'")));
            },
            _ => return Err(RuntimeError::disallowed("call of a non-name expression")),
        };

        let Some(Capability::Function(builtin)) = self.registry.get(name) else {
            return Err(RuntimeError::UnknownName { name: name.clone() });
        };

        let positional = arguments.iter()
                                  .map(|arg| self.eval(arg))
                                  .collect::<EvalResult<Vec<_>>>()?;

        let mut named = Vec::with_capacity(keywords.len());
        for keyword in keywords {
            named.push((keyword.name.as_str(), self.eval(&keyword.value)?));
        }

        builtin.call(name, positional, named)
    }
}
