use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, TokenCursor, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either a variable declaration introduced by `let`, or an
/// expression used as a statement.
///
/// Grammar:
/// ```text
///     statement := "let" identifier "=" expression
///                | expression
/// ```
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    if cursor.peek().kind == TokenKind::LetKeyword {
        return parse_variable_declaration(cursor);
    }

    let line = cursor.peek().line;
    let expr = parse_expression(cursor)?;

    Ok(Statement::Expression { expr, line })
}

fn parse_variable_declaration(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let line = cursor.advance().line;
    let name = cursor.expect(TokenKind::Identifier, "Invalid variable declaration")?
                     .text
                     .clone();
    cursor.expect(TokenKind::Equals, "Invalid variable declaration")?;
    let value = parse_expression(cursor)?;

    Ok(Statement::VariableDeclaration { name, value, line })
}
