use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operator node.
    ///
    /// The left operand is evaluated before the right one; the first failure
    /// ends evaluation.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// The operation is routed to a specialized handler depending on the
    /// operator. Addition, subtraction and multiplication are handled by
    /// `eval_scalar_op`. Division and the floor operators are handled in the
    /// `division` module, and power calls `eval_pow`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use sandcalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::from(3);
    /// let right = Value::from(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right);
    /// assert_eq!(result.unwrap(), Value::from(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, &left, &right);
    /// assert_eq!(result.unwrap(), Value::Real(0.75));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul => Self::eval_scalar_op(op, left, right),
            Div => Self::eval_div(left, right),
            FloorDiv => Self::eval_floor_div(left, right),
            Mod => Self::eval_mod(left, right),
            Pow => Self::eval_pow(left, right),
        }
    }

    /// Evaluates `+`, `-` or `*`.
    ///
    /// Two integers give an exact integer. Any real operand promotes the other
    /// operand to a real first.
    ///
    /// # Errors
    /// A `DomainError` if an integer operand is too large to be promoted.
    fn eval_scalar_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            return Ok(Value::Integer(match op {
                                         BinaryOperator::Sub => a - b,
                                         BinaryOperator::Mul => a * b,
                                         _ => a + b,
                                     }));
        }

        let (a, b) = (left.as_real()?, right.as_real()?);
        Ok(Value::Real(match op {
                           BinaryOperator::Sub => a - b,
                           BinaryOperator::Mul => a * b,
                           _ => a + b,
                       }))
    }
}
