use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operator node.
    ///
    /// The operand is evaluated first, then the sign is applied with
    /// [`Context::eval_unary`].
    pub(crate) fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Ok(Self::eval_unary(op, value))
    }

    /// Applies a unary sign to a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the value unchanged.
    /// - `Minus`: numeric negation. Integers stay exact, reals follow IEEE
    ///   negation (so `-0.0` keeps its sign).
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The signed value.
    ///
    /// # Example
    /// ```
    /// use sandcalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Minus, Value::from(5)), Value::from(-5));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, Value::Real(2.5)), Value::Real(2.5));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Value) -> Value {
        match (op, value) {
            (UnaryOperator::Plus, value) => value,
            (UnaryOperator::Minus, Value::Integer(n)) => Value::Integer(-n),
            (UnaryOperator::Minus, Value::Real(r)) => Value::Real(-r),
        }
    }
}
