use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, TokenCursor},
            primary::parse_primary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `a - b - c`
/// parses as `(a - b) - c`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(cursor, BinaryOperator::is_additive, parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`, which bind tighter
/// than the additive ones.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
pub fn parse_multiplicative(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_left_associative(cursor, BinaryOperator::is_multiplicative, parse_primary)
}

fn parse_left_associative(cursor: &mut TokenCursor<'_>,
                          accepts: fn(BinaryOperator) -> bool,
                          parse_operand: fn(&mut TokenCursor<'_>) -> ParseResult<Expr>)
                          -> ParseResult<Expr> {
    let mut left = parse_operand(cursor)?;
    loop {
        let token = cursor.peek();
        if let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            cursor.advance();
            let right = parse_operand(cursor)?;
            left = Expr::binary(left, op, right, token.line);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not `BinaryOperator` tokens.
///
/// # Example
/// ```
/// use ember::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let plus = Token::new(TokenKind::BinaryOperator, "+", 1);
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
///
/// let equals = Token::new(TokenKind::Equals, "=", 1);
/// assert_eq!(token_to_binary_operator(&equals), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token.kind {
        TokenKind::BinaryOperator => BinaryOperator::from_symbol(&token.text),
        _ => None,
    }
}
