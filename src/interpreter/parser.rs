/// Parser entry points and the token cursor.
///
/// Holds the cursor that walks the token buffer and the top-level
/// `program := statement* end_of_input` rule.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence tier, lowest first: additive, then
/// multiplicative. Both tiers are left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, identifiers and parenthesized sub-expressions.
pub mod primary;

/// Statement parsing.
///
/// Distinguishes `let` declarations from expression statements.
pub mod statement;
