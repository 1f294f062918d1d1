use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The variables of one run.
///
/// A single flat namespace shared by every line of a script. Declaring a
/// name that already exists overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the value it replaced.
    ///
    /// # Example
    /// ```
    /// use lineal::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.define("x", Value::Integer(5)), None);
    /// assert_eq!(env.define("x", Value::Integer(9)), Some(Value::Integer(5)));
    /// assert_eq!(env.get("x"), Some(Value::Integer(9)));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) -> Option<Value> {
        self.variables.insert(name.to_string(), value)
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
