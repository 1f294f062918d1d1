/// Parser entry point and shared result type.
pub mod core;

/// The token cursor the grammar functions consume.
pub mod stream;

/// Statement-level parsing: `print`, `var` and expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// Comparison, additive and multiplicative levels of the precedence ladder.
pub mod binary;

/// Unary and primary expression parsing.
pub mod unary;

pub use self::core::{ParseResult, parse};
