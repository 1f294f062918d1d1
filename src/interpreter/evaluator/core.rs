use std::io::Write;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenKind},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Statement {
    /// Executes the statement.
    ///
    /// Declarations bind their value in `env`, overwriting any earlier
    /// binding. `print` writes the value and a newline to `out`. Neither
    /// produces a value; an expression statement yields its value.
    ///
    /// # Errors
    /// Any error raised while evaluating the statement's expression, or
    /// [`RuntimeError::Output`] if writing to `out` fails. On error nothing
    /// is bound and nothing is printed.
    ///
    /// # Example
    /// ```
    /// use lineal::interpreter::{
    ///     environment::Environment, lexer::lex, parser::parse, value::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let mut out = Vec::new();
    ///
    /// for (number, line) in ["var x = 6;", "print x * 7;"].into_iter().enumerate() {
    ///     let tokens = lex(line, number + 1).unwrap();
    ///     parse(&tokens, number + 1).unwrap()
    ///                               .eval(&mut env, &mut out)
    ///                               .unwrap();
    /// }
    ///
    /// assert_eq!(env.get("x"), Some(Value::Integer(6)));
    /// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
    /// ```
    pub fn eval<W: Write + ?Sized>(&self,
                                   env: &mut Environment,
                                   out: &mut W)
                                   -> EvalResult<Option<Value>> {
        match self {
            Self::VarDecl { name,
                            initializer,
                            line, } => {
                let value = initializer.eval(env)?;
                let previous = env.define(name, value);
                debug!(line, name = %name, %value, redeclared = previous.is_some(), "defined variable");
                Ok(None)
            },
            Self::Print { expr, .. } => {
                let value = expr.eval(env)?;
                writeln!(out, "{value}")?;
                Ok(None)
            },
            Self::Expression { expr, .. } => expr.eval(env).map(Some),
        }
    }
}

impl Expr {
    /// Evaluates the expression and returns the resulting value.
    ///
    /// Both operands of a binary operator are evaluated, left first, before
    /// the operator is applied.
    ///
    /// # Errors
    /// Type mismatches, undefined variables, division by zero and out-of-range
    /// literals.
    pub fn eval(&self, env: &Environment) -> EvalResult<Value> {
        match self {
            Self::Literal { token } => eval_literal(token, env),
            Self::Unary { op,
                          operand,
                          line,
                          column, } => {
                let value = operand.eval(env)?;
                Value::eval_unary(*op, value, *line, *column)
            },
            Self::Binary { left,
                           op,
                           right,
                           line,
                           column, } => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                Value::eval_binary(*op, left, right, *line, *column)
            },
        }
    }
}

/// Evaluates a number, boolean or variable reference.
///
/// Numbers are parsed here rather than in the lexer, so a literal that does
/// not fit in an `i64` only fails when it is evaluated.
fn eval_literal(token: &Token, env: &Environment) -> EvalResult<Value> {
    let Token { kind,
                text,
                line,
                column, } = token;

    match kind {
        TokenKind::Number => {
            text.parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| RuntimeError::LiteralOutOfRange { text:   text.clone(),
                                                               line:   *line,
                                                               column: *column, })
        },
        TokenKind::BoolLiteral => match text.as_str() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(RuntimeError::InvalidLiteral { text:   text.clone(),
                                                    line:   *line,
                                                    column: *column, }),
        },
        TokenKind::Identifier => {
            env.get(text)
               .ok_or_else(|| RuntimeError::UndefinedVariable { name:   text.clone(),
                                                                line:   *line,
                                                                column: *column, })
        },
        _ => Err(RuntimeError::InvalidLiteral { text:   kind.to_string(),
                                                line:   *line,
                                                column: *column, }),
    }
}
