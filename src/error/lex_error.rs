use thiserror::Error;

/// A character that does not start any token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}, column {column}: Unrecognized token '{text}'.")]
pub struct LexError {
    /// The offending source text.
    pub text:   String,
    /// The source line where the error occurred.
    pub line:   usize,
    /// The 1-based column where the error occurred.
    pub column: usize,
}
