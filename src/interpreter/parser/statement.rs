use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::{binary::parse_comparison, core::ParseResult, stream::TokenStream},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a print statement, introduced by `print`.
/// - a variable declaration, introduced by `var`.
/// - an expression used as a statement.
///
/// All three end with `;`.
///
/// Grammar:
/// ```text
///     statement := "print" comparison ";"
///                | "var" IDENTIFIER "=" comparison ";"
///                | comparison ";"
/// ```
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Statement> {
    if let Some(keyword) = tokens.match_any(&[TokenKind::KwPrint]) {
        let expr = parse_comparison(tokens)?;
        expect_semicolon(tokens)?;
        return Ok(Statement::Print { expr,
                                     line: keyword.line });
    }

    if let Some(keyword) = tokens.match_any(&[TokenKind::KwVar]) {
        return parse_variable_declaration(tokens, keyword.line);
    }

    let line = tokens.peek().map_or(tokens.line(), |token| token.line);
    let expr = parse_comparison(tokens)?;
    expect_semicolon(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses the remainder of `var name = value;` after the `var` keyword.
///
/// # Errors
/// Returns a `ParseError` if the name, the `=` or the `;` is missing, or if
/// the initializer is malformed.
fn parse_variable_declaration(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Statement> {
    let name = tokens.expect(TokenKind::Identifier, "a variable name")?;
    tokens.expect(TokenKind::Assign, "'=' after the variable name")?;
    let initializer = parse_comparison(tokens)?;
    expect_semicolon(tokens)?;

    Ok(Statement::VarDecl { name: name.text.clone(),
                            initializer,
                            line })
}

fn expect_semicolon(tokens: &mut TokenStream<'_>) -> ParseResult<()> {
    tokens.expect(TokenKind::Semicolon, "';' after expression")?;
    Ok(())
}
