use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

impl Value {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, equality and ordering
    /// operators to `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`, `column`: Position of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     ast::{ArithmeticOperator, BinaryOperator},
    ///     interpreter::value::Value,
    /// };
    ///
    /// let result = Value::eval_binary(BinaryOperator::Arithmetic(ArithmeticOperator::Add),
    ///                                 Value::Integer(3),
    ///                                 Value::Integer(4),
    ///                                 1,
    ///                                 3);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Self,
                       right: Self,
                       line: usize,
                       column: usize)
                       -> EvalResult<Self> {
        match op {
            BinaryOperator::Arithmetic(op) => Self::eval_arithmetic(op, left, right, line, column),
            BinaryOperator::Comparison(op) => Self::eval_comparison(op, left, right, line, column),
        }
    }
}
