use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while parsing a statement.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    #[error("Error on line {line}, column {column}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: &'static str,
        /// The token encountered.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The column of the unexpected token.
        column:   usize,
    },
    /// Reached the end of the line before the statement was complete.
    #[error("Error on line {line}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}, column {column}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the token found instead, or of the opening
        /// parenthesis if the line ended.
        column: usize,
    },
}

impl ParseError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::ExpectedClosingParen { line, .. } => *line,
        }
    }
}
