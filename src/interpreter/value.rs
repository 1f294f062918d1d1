use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// There is no implicit conversion between the variants: every operator
/// checks the tags of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and by `!`.
    Boolean(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Extracts the integer, or fails with a type error naming `context`.
    ///
    /// # Example
    /// ```
    /// use lineal::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_integer("'+'", 1, 1).unwrap(), 3);
    /// assert!(Value::Boolean(true).as_integer("'+'", 1, 1).is_err());
    /// ```
    pub fn as_integer(self, context: &str, line: usize, column: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(n),
            Self::Boolean(_) => Err(self.mismatch("an integer", context, line, column)),
        }
    }

    /// Extracts the boolean, or fails with a type error naming `context`.
    pub fn as_boolean(self, context: &str, line: usize, column: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(b),
            Self::Integer(_) => Err(self.mismatch("a boolean", context, line, column)),
        }
    }

    fn mismatch(self, expected: &str, context: &str, line: usize, column: usize) -> RuntimeError {
        RuntimeError::TypeError { details: format!("{context} expects {expected}, found {} {self}",
                                                   self.type_name()),
                                  line,
                                  column }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
