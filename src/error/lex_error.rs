/// Represents all errors that can occur during lexing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that matches none of the token classes.
    #[error("Error on line {line}: Unrecognized character '{}' (code {}) found in source.",
            .character.escape_default(),
            code_point(.character))]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}
