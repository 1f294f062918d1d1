use crate::{
    ast::ComparisonOperator,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

impl Value {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values and compare them structurally;
    /// values of different types are never equal. The ordering operators
    /// require two integers.
    ///
    /// # Example
    /// ```
    /// use lineal::{ast::ComparisonOperator, interpreter::value::Value};
    ///
    /// let lt = Value::eval_comparison(ComparisonOperator::Less,
    ///                                 Value::Integer(3),
    ///                                 Value::Integer(5),
    ///                                 1,
    ///                                 3);
    /// assert_eq!(lt.unwrap(), Value::Boolean(true));
    ///
    /// let eq = Value::eval_comparison(ComparisonOperator::Equal,
    ///                                 Value::Integer(1),
    ///                                 Value::Boolean(true),
    ///                                 1,
    ///                                 3);
    /// assert_eq!(eq.unwrap(), Value::Boolean(false));
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: Self,
                           right: Self,
                           line: usize,
                           column: usize)
                           -> EvalResult<Self> {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let context = format!("'{op}'");
        let ordered = |compare: fn(&i64, &i64) -> bool| -> EvalResult<Self> {
            let a = left.as_integer(&context, line, column)?;
            let b = right.as_integer(&context, line, column)?;
            Ok(Self::Boolean(compare(&a, &b)))
        };

        match op {
            Equal => Ok(Self::Boolean(left == right)),
            NotEqual => Ok(Self::Boolean(left != right)),
            Less => ordered(i64::lt),
            LessEqual => ordered(i64::le),
            Greater => ordered(i64::gt),
            GreaterEqual => ordered(i64::ge),
        }
    }
}
