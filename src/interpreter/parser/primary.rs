use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenCursor, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Dispatches on the current token:
/// - number text becomes a `NumericLiteral`
/// - `null` becomes a `NullLiteral`
/// - an identifier becomes an `Identifier`
/// - `(` parses a full expression and requires a closing `)`; the inner
///   expression is returned as is
///
/// Grammar:
/// ```text
///     primary := number | "null" | identifier | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` for any other token, including end of input.
/// - `ExpectedToken` when a parenthesized expression is not closed.
/// - `InvalidNumber` if number text does not parse as a float.
/// - `NestingTooDeep` if too many parenthesized groups are open.
pub fn parse_primary(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let token = cursor.peek();
    let line = token.line;

    match token.kind {
        TokenKind::Number => {
            cursor.advance();
            let value = token.text
                             .parse::<f64>()
                             .map_err(|_| ParseError::InvalidNumber { text: token.text.clone(),
                                                                      line })?;
            Ok(Expr::NumericLiteral { value, line })
        },
        TokenKind::NullKeyword => {
            cursor.advance();
            Ok(Expr::NullLiteral { line })
        },
        TokenKind::Identifier => {
            cursor.advance();
            Ok(Expr::Identifier { name: token.text.clone(),
                                  line })
        },
        TokenKind::OpenParen => {
            cursor.advance();
            cursor.enter_group(line)?;
            let inner = parse_expression(cursor)?;
            cursor.expect(TokenKind::CloseParen,
                          "Unexpected token found inside parenthesized expression")?;
            cursor.leave_group();
            Ok(inner)
        },
        _ => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                               line }),
    }
}
