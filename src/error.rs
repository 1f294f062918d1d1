/// Lexing errors.
///
/// Raised when a line contains a character that no token can start with.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree of a
/// statement: unexpected tokens, missing tokens and malformed groupings.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, type mismatches and references to undefined variables.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any error that stops a script.
///
/// Every phase of running a line can fail, and the first failure ends the
/// run. This wraps the error of whichever phase failed.
#[derive(Debug, Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a statement.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluating the statement failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unrecognized character.
    Lex,
    /// Unexpected or missing token.
    Parse,
    /// An operator was applied to a value of the wrong type.
    Type,
    /// Reference to an undefined variable.
    Name,
    /// Division by zero or an out-of-range literal.
    Arithmetic,
    /// Writing output failed.
    Io,
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use lineal::{
    ///     error::{Error, ErrorKind, RuntimeError},
    ///     run_script,
    /// };
    ///
    /// let err = run_script("print 1 / 0;", &mut Vec::<u8>::new()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Arithmetic);
    /// assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })));
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Gets the source line the error was raised on.
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.line),
            Self::Parse(e) => Some(e.line_number()),
            Self::Runtime(e) => e.line_number(),
        }
    }
}
