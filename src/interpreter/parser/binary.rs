use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, stream::TokenStream, unary::parse_unary},
    },
};

const COMPARISON_OPERATORS: [TokenKind; 6] = [TokenKind::Equals,
                                              TokenKind::NotEquals,
                                              TokenKind::Less,
                                              TokenKind::LessEq,
                                              TokenKind::Greater,
                                              TokenKind::GreaterEq];

/// Parses relational and equality operators.
///
/// The right-hand side recurses into `comparison` itself, so the nested call
/// consumes every remaining comparison operator. A chain such as `a < b < c`
/// therefore nests to the right, `a < (b < c)`, and the loop never runs a
/// second time.
///
/// Grammar: `comparison := term (("==" | "!=" | "<" | "<=" | ">" | ">=")
/// comparison)?`
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_term(tokens)?;

    while let Some(operator) = tokens.match_any(&COMPARISON_OPERATORS) {
        let right = parse_comparison(tokens)?;
        left = binary_node(left, operator, right)?;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_factor(tokens)?;

    while let Some(operator) = tokens.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
        let right = parse_factor(tokens)?;
        left = binary_node(left, operator, right)?;
    }

    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `factor := unary (("*" | "/") unary)*`
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(tokens)?;

    while let Some(operator) = tokens.match_any(&[TokenKind::Star, TokenKind::Slash]) {
        let right = parse_unary(tokens)?;
        left = binary_node(left, operator, right)?;
    }

    Ok(left)
}

fn binary_node(left: Expr, operator: &Token, right: Expr) -> ParseResult<Expr> {
    let op = BinaryOperator::from_token(operator.kind)
             .ok_or(ParseError::UnexpectedToken { expected: "a binary operator",
                                                  found:    operator.kind,
                                                  line:     operator.line,
                                                  column:   operator.column, })?;

    Ok(Expr::Binary { left: Box::new(left),
                      op,
                      right: Box::new(right),
                      line: operator.line,
                      column: operator.column })
}
