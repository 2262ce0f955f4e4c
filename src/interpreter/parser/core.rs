use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many parenthesized groups may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

static END_OF_INPUT: Token = Token::end_of_input(0);

/// A read position over an immutable token buffer.
///
/// Tokens are never removed; consuming one only moves the index forward. The
/// cursor never moves past an `EndOfInput` token, and reading beyond the end
/// of a buffer that lacks one behaves as if it were there.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens:   &'a [Token],
    position: usize,
    depth:    usize,
}

impl<'a> TokenCursor<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               position: 0,
               depth: 0 }
    }

    /// The current token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.position).unwrap_or_else(|| self.last_or_end())
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::EndOfInput {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it has the given kind, otherwise
    /// reports what was found instead.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedToken`] when the kinds differ. The token
    /// is left in place in that case.
    pub fn expect(&mut self, expected: TokenKind, context: &'static str) -> ParseResult<&'a Token> {
        let token = self.peek();
        if token.kind == expected {
            return Ok(self.advance());
        }
        Err(ParseError::ExpectedToken { expected,
                                        found: token.to_string(),
                                        context,
                                        line: token.line })
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::EndOfInput
    }

    /// Index of the next unread token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Records that a parenthesized group was opened on `line`.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] once more than
    /// [`MAX_NESTING_DEPTH`] groups are open.
    pub fn enter_group(&mut self, line: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                    line });
        }
        self.depth += 1;
        Ok(())
    }

    /// Records that the innermost parenthesized group was closed.
    pub const fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn last_or_end(&self) -> &'a Token {
        match self.tokens.last() {
            Some(last) if last.kind == TokenKind::EndOfInput => last,
            _ => &END_OF_INPUT,
        }
    }
}

/// Parses a whole token sequence into a [`Program`].
///
/// Statements are parsed one after another until `EndOfInput`; each is
/// appended to the program body in source order.
///
/// Grammar: `program := statement* end_of_input`
///
/// # Errors
/// Propagates the first [`ParseError`] raised by any statement.
///
/// # Example
/// ```
/// use ember::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("let x = 1 x + 2").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut cursor = TokenCursor::new(tokens);
    let mut program = Program::default();

    while !cursor.at_end() {
        program.body.push(parse_statement(&mut cursor)?);
    }

    debug!("parsed {} statements", program.body.len());
    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts at the lowest
/// precedence tier; parenthesized sub-expressions come back here.
///
/// Grammar: `expression := additive`
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_additive(cursor)
}
