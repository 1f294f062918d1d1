/// Dispatch of binary operators to their handlers.
pub mod core;

/// Checked integer arithmetic: `+`, `-`, `*`, `/`.
pub mod arithmetic;

/// Equality and ordering comparisons.
pub mod comparison;
