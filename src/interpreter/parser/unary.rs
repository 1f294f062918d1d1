use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_term, core::ParseResult, stream::TokenStream},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (integer negation)
/// - `!`  (logical not)
///
/// The operand is a primary expression, not another unary one, so `--5` and
/// `!!true` are rejected while `-(5)` is accepted.
///
/// Grammar: `unary := ("-" | "!") primary | primary`
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(operator) = tokens.match_any(&[TokenKind::Minus, TokenKind::Not]) else {
        return parse_primary(tokens);
    };

    let op = if operator.kind == TokenKind::Minus {
        UnaryOperator::Negate
    } else {
        UnaryOperator::Not
    };
    let operand = parse_primary(tokens)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line: operator.line,
                     column: operator.column })
}

/// Parses a primary (atomic) expression.
///
/// Grammar: `primary := NUMBER | BOOL | IDENTIFIER | "(" term ")"`
///
/// # Errors
/// Returns a `ParseError` if the line ends or the next token cannot start an
/// expression.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let token = tokens.advance("an expression")?;

    match token.kind {
        TokenKind::Number | TokenKind::BoolLiteral | TokenKind::Identifier => {
            Ok(Expr::Literal { token: token.clone() })
        },
        TokenKind::LParen => parse_grouping(tokens, token),
        found => Err(ParseError::UnexpectedToken { expected: "an expression",
                                                   found,
                                                   line: token.line,
                                                   column: token.column }),
    }
}

/// Parses the inside of a parenthesized expression after its `(`.
///
/// The contents are a `term`, so a comparison directly inside parentheses
/// leaves its operator where the `)` should be and fails.
fn parse_grouping(tokens: &mut TokenStream<'_>, open: &Token) -> ParseResult<Expr> {
    let inner = parse_term(tokens)?;

    if tokens.match_any(&[TokenKind::RParen]).is_some() {
        return Ok(inner);
    }

    let column = tokens.peek().map_or(open.column, |token| token.column);
    Err(ParseError::ExpectedClosingParen { line: open.line,
                                           column })
}
