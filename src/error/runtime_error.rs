use std::io;

use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Error on line {line}, column {column}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the reference.
        column: usize,
    },
    /// An operator was applied to a value of the wrong type.
    #[error("Error on line {line}, column {column}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column of the operator.
        column:  usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}, column {column}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the `/` operator.
        column: usize,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    #[error("Error on line {line}, column {column}: Literal '{text}' is out of range.")]
    LiteralOutOfRange {
        /// The literal as written.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the literal.
        column: usize,
    },
    /// A literal token had text its kind cannot hold.
    #[error("Error on line {line}, column {column}: Invalid literal '{text}'.")]
    InvalidLiteral {
        /// The token text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the literal.
        column: usize,
    },
    /// Writing the output of `print` failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RuntimeError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::Name,
            Self::TypeError { .. } | Self::InvalidLiteral { .. } => ErrorKind::Type,
            Self::DivisionByZero { .. } | Self::LiteralOutOfRange { .. } => ErrorKind::Arithmetic,
            Self::Output(_) => ErrorKind::Io,
        }
    }

    /// Gets the line number from `self`, if the error is tied to one.
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line, .. }
            | Self::LiteralOutOfRange { line, .. }
            | Self::InvalidLiteral { line, .. } => Some(*line),
            Self::Output(_) => None,
        }
    }
}
