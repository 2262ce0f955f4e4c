/// Core evaluation logic.
///
/// Walks statements and expressions, resolves identifiers against the
/// environment and binds `let` declarations.
pub mod core;

/// Binary operator evaluation.
///
/// Applies the arithmetic operators to two numeric operands.
pub mod binary;
