/// Lexing errors.
///
/// Raised when the source contains a character that cannot start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an AST:
/// unexpected tokens, missing closing parentheses and malformed declarations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables, operand type mismatches and division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a piece of source code.
///
/// Each stage reports its own error type; this enum lets callers handle all of
/// them through a single `?`.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
