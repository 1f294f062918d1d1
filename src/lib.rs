//! # lineal
//!
//! lineal is an interpreter for a tiny scripting language of integers,
//! booleans and global variables. A script is run one line at a time: each
//! line holds exactly one statement, which is lexed, parsed and executed
//! before the next line is read.
//!
//! ```text
//! var x = 5;
//! print (x + 1) * 2;
//! print x >= 5;
//! ```
//!
//! The first error of any kind stops the run.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::{debug, instrument};

use crate::interpreter::{environment::Environment, lexer::lex, parser::parse, value::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent one
/// line of source code as a tree. The tree is built by the parser and
/// executed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure carries the line (and, where there is a token to point at,
/// the column) it was raised on.
pub mod error;
/// Lexer, parser, evaluator, values and the variable environment.
pub mod interpreter;

pub use crate::error::{Error, ErrorKind};

/// Runs one line of source through the lexer, parser and evaluator.
///
/// Variables declared by the line are added to `env`; output of `print`
/// goes to `out`.
///
/// # Returns
/// The value of an expression statement, or `None` for `var` and `print`.
///
/// # Example
/// ```
/// use lineal::{interpreter::{environment::Environment, value::Value}, run_statement};
///
/// let mut env = Environment::new();
/// let mut out = Vec::<u8>::new();
///
/// assert_eq!(run_statement("var x = 10 - 3 - 2;", 1, &mut env, &mut out).unwrap(), None);
/// assert_eq!(run_statement("x * 2;", 2, &mut env, &mut out).unwrap(),
///            Some(Value::Integer(10)));
/// assert!(run_statement("y;", 3, &mut env, &mut out).is_err());
/// ```
#[instrument(level = "debug", skip(env, out))]
pub fn run_statement<W: Write + ?Sized>(source: &str,
                                        line: usize,
                                        env: &mut Environment,
                                        out: &mut W)
                                        -> Result<Option<Value>, Error> {
    let tokens = lex(source, line)?;
    debug!(tokens = tokens.len(), "lexed");

    let statement = parse(&tokens, line)?;
    Ok(statement.eval(env, out)?)
}

/// Runs every line of `source` in order against one fresh environment.
///
/// Lines are numbered from 1. Execution stops at the first failing line;
/// output printed by earlier lines has already been written to `out`.
///
/// # Returns
/// The environment as left by the last line.
///
/// # Example
/// ```
/// use lineal::run_script;
///
/// let mut out = Vec::new();
/// let env = run_script("var x = 5;\nprint x;\nvar x = 9;\nprint x;", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "5\n9\n");
/// assert_eq!(env.len(), 1);
///
/// // Nothing after a failing line runs.
/// let mut out = Vec::new();
/// assert!(run_script("print 1;\nprint 1 + true;\nprint 2;", &mut out).is_err());
/// assert_eq!(String::from_utf8(out).unwrap(), "1\n");
/// ```
pub fn run_script<W: Write + ?Sized>(source: &str, out: &mut W) -> Result<Environment, Error> {
    let mut env = Environment::new();

    for (index, text) in source.lines().enumerate() {
        run_statement(text, index + 1, &mut env, out)?;
    }

    debug!(variables = env.len(), "script finished");
    Ok(env)
}
