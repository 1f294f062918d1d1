use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

impl Value {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: integer negation, wrapping so that `-i64::MIN` is
    ///   `i64::MIN`.
    /// - `Not`: boolean negation.
    ///
    /// # Example
    /// ```
    /// use lineal::{ast::UnaryOperator, interpreter::value::Value};
    ///
    /// let v = Value::eval_unary(UnaryOperator::Negate, Value::Integer(5), 1, 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Value::eval_unary(UnaryOperator::Not, Value::Boolean(true), 1, 1).unwrap();
    /// assert_eq!(v, Value::Boolean(false));
    ///
    /// assert!(Value::eval_unary(UnaryOperator::Not, Value::Integer(1), 1, 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Self, line: usize, column: usize) -> EvalResult<Self> {
        let context = format!("unary '{op}'");

        match op {
            UnaryOperator::Negate => {
                Ok(Self::Integer(value.as_integer(&context, line, column)?.wrapping_neg()))
            },
            UnaryOperator::Not => Ok(Self::Boolean(!value.as_boolean(&context, line, column)?)),
        }
    }
}
