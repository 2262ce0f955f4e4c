use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can occur during parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token where no expression can start.
    #[error("Error on line {line}: Unexpected token found during parsing: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific kind of token was required but something else was found.
    #[error("Error on line {line}: {context}. Expected {expected}, found {found}.")]
    ExpectedToken {
        /// The kind of token that was required.
        expected: TokenKind,
        /// The token that was found instead.
        found:    String,
        /// What the parser was doing when it gave up.
        context:  &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Number text that could not be converted to a float.
    #[error("Error on line {line}: Invalid numeric literal '{text}'.")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Parentheses nested deeper than the parser allows.
    #[error("Error on line {line}: Parentheses are nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The maximum number of open groups.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
