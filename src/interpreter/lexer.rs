use std::{fmt, ops::Range};

use log::debug;
use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// The lexer recognises single-character punctuation, maximal runs of decimal
/// digits and maximal runs of cased letters (upper, lower or title case, in
/// any script). A letter run that spells a reserved word is tagged with the
/// keyword kind instead of `Identifier`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n]+")]
pub enum TokenKind {
    /// Unsigned integer text such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// Variable names such as `x`, `total` or `café`.
    #[regex(r"[\p{Lu}\p{Ll}\p{Lt}]+")]
    Identifier,
    /// `null`
    #[token("null")]
    NullKeyword,
    /// `let`
    #[token("let")]
    LetKeyword,
    /// One of `+`, `-`, `*`, `/` or `%`.
    #[regex(r"[+\-*/%]")]
    BinaryOperator,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Appended once after the last real token.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::NullKeyword => "'null'",
            Self::LetKeyword => "'let'",
            Self::BinaryOperator => "operator",
            Self::Equals => "'='",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A token together with the exact text it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The raw slice of source text. Empty for `EndOfInput`.
    pub text: String,
    /// The line the token starts on.
    pub line: usize,
}

impl Token {
    /// Creates a token of the given kind.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    /// Creates the terminating token.
    #[must_use]
    pub const fn end_of_input(line: usize) -> Self {
        Self { kind: TokenKind::EndOfInput,
               text: String::new(),
               line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            kind @ (TokenKind::Number | TokenKind::Identifier | TokenKind::BinaryOperator) => {
                write!(f, "{kind} '{}'", self.text)
            },
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Converts source text into tokens.
///
/// Scanning is left to right with maximal munch for digit and letter runs.
/// Spaces, tabs and newlines produce no tokens. The returned sequence always
/// ends with exactly one `EndOfInput` token, so empty input yields a single
/// token.
///
/// # Errors
/// Returns [`LexError::UnrecognizedCharacter`] for the first character that
/// cannot start a token.
///
/// # Example
/// ```
/// use ember::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 42").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::LetKeyword,
///             TokenKind::Identifier,
///             TokenKind::Equals,
///             TokenKind::Number,
///             TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut line = 1;
    let mut counted_to = 0;

    while let Some(kind) = lexer.next() {
        let start = lexer.span().start;
        line += count_newlines(source, counted_to..start);
        counted_to = start;

        match kind {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnrecognizedCharacter { character, line });
            },
        }
    }

    line += count_newlines(source, counted_to..source.len());
    tokens.push(Token::end_of_input(line));
    debug!("lexed {} tokens", tokens.len());

    Ok(tokens)
}

fn count_newlines(source: &str, range: Range<usize>) -> usize {
    source.as_bytes()
          .get(range)
          .map_or(0, |bytes| bytes.iter().filter(|&&b| b == b'\n').count())
}
