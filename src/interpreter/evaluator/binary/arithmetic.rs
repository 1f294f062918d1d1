use crate::{
    ast::ArithmeticOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

impl Value {
    /// Evaluates an integer arithmetic operation.
    ///
    /// Both operands must be integers. Results wrap around on overflow in
    /// two's complement, so `i64::MAX + 1` is `i64::MIN`. Division truncates
    /// toward zero and checks for a zero divisor.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     ast::ArithmeticOperator,
    ///     error::RuntimeError,
    ///     interpreter::value::Value,
    /// };
    ///
    /// let q = Value::eval_arithmetic(ArithmeticOperator::Div,
    ///                                Value::Integer(-7),
    ///                                Value::Integer(2),
    ///                                1,
    ///                                1);
    /// assert_eq!(q.unwrap(), Value::Integer(-3));
    ///
    /// let err = Value::eval_arithmetic(ArithmeticOperator::Div,
    ///                                  Value::Integer(1),
    ///                                  Value::Integer(0),
    ///                                  1,
    ///                                  3).unwrap_err();
    /// assert!(matches!(err, RuntimeError::DivisionByZero { line: 1, column: 3 }));
    /// ```
    pub fn eval_arithmetic(op: ArithmeticOperator,
                           left: Self,
                           right: Self,
                           line: usize,
                           column: usize)
                           -> EvalResult<Self> {
        let context = format!("'{op}'");
        let a = left.as_integer(&context, line, column)?;
        let b = right.as_integer(&context, line, column)?;

        Ok(Self::Integer(match op {
                             ArithmeticOperator::Add => a.wrapping_add(b),
                             ArithmeticOperator::Sub => a.wrapping_sub(b),
                             ArithmeticOperator::Mul => a.wrapping_mul(b),
                             ArithmeticOperator::Div => {
                                 if b == 0 {
                                     return Err(RuntimeError::DivisionByZero { line, column });
                                 }
                                 a.wrapping_div(b)
                             },
                         }))
    }
}
