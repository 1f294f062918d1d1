/// Binary operator evaluation logic.
///
/// Handles arithmetic, ordering and equality operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements integer negation and logical NOT.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the statement and expression dispatch, literal evaluation and the
/// evaluator's result type.
pub mod core;
