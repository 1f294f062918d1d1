/// The evaluator module executes statements against an environment.
///
/// Evaluation walks the syntax tree directly. Every operator checks the
/// runtime types of its operands, and any failure ends the statement with a
/// [`RuntimeError`](crate::error::RuntimeError).
pub mod evaluator;
/// The variable store shared by all lines of a run.
pub mod environment;
/// The lexer module tokenizes one source line.
///
/// # Responsibilities
/// - Converts the line into tokens with kind, text and source position.
/// - Reports characters that no token can start with.
pub mod lexer;
/// The parser module builds the syntax tree of one statement.
///
/// The parser consumes tokens through a cursor and descends through the
/// grammar's precedence levels: comparison, term, factor, unary, primary.
pub mod parser;
/// Runtime values: integers and booleans.
pub mod value;
