use lineal::{
    ast::{ArithmeticOperator, BinaryOperator, ComparisonOperator, Expr, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, lex},
        parser::{ParseResult, parse},
    },
};
use pretty_assertions::assert_eq;

fn parse_line(source: &str) -> ParseResult<Statement> {
    let tokens = lex(source, 1).expect("line lexes");
    parse(&tokens, 1)
}

fn parse_expr(source: &str) -> Expr {
    match parse_line(source).expect("line parses") {
        Statement::Expression { expr, .. } => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

/// Renders an expression fully parenthesized, with literals by their text.
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Binary { left, op, right, .. } => format!("({} {op} {})", shape(left), shape(right)),
        Expr::Unary { op, operand, .. } => format!("({op}{})", shape(operand)),
        Expr::Literal { token } => token.text.clone(),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(shape(&parse_expr("2 + 3 * 4;")), "(2 + (3 * 4))");
    assert_eq!(shape(&parse_expr("(2 + 3) * 4;")), "((2 + 3) * 4)");
}

#[test]
fn term_and_factor_are_left_associative() {
    assert_eq!(shape(&parse_expr("10 - 3 - 2;")), "((10 - 3) - 2)");
    assert_eq!(shape(&parse_expr("8 / 4 * 2;")), "((8 / 4) * 2)");
}

#[test]
fn comparison_binds_loosest() {
    assert_eq!(shape(&parse_expr("1 + 2 == 3;")), "((1 + 2) == 3)");
    assert_eq!(shape(&parse_expr("a <= b * c;")), "(a <= (b * c))");

    let Expr::Binary { op, .. } = parse_expr("a >= b;") else {
        panic!("expected a binary expression");
    };
    assert_eq!(op, BinaryOperator::Comparison(ComparisonOperator::GreaterEqual));
}

#[test]
fn chained_comparisons_nest_to_the_right() {
    assert_eq!(shape(&parse_expr("a < b < c;")), "(a < (b < c))");
    assert_eq!(shape(&parse_expr("a == b != c >= d;")), "(a == (b != (c >= d)))");
}

#[test]
fn unary_applies_to_primary_only() {
    assert_eq!(shape(&parse_expr("-2 * 3;")), "((-2) * 3)");
    assert_eq!(shape(&parse_expr("-(2 * 3);")), "(-(2 * 3))");
    assert_eq!(shape(&parse_expr("!flag;")), "(!flag)");

    assert!(parse_line("--5;").is_err());
    assert!(parse_line("!!true;").is_err());
}

#[test]
fn operator_positions_are_recorded() {
    let Expr::Binary { op, line, column, .. } = parse_expr("1 +  2;") else {
        panic!("expected a binary expression");
    };
    assert_eq!((op, line, column), (BinaryOperator::Arithmetic(ArithmeticOperator::Add), 1, 3));

    let Expr::Unary { op, column, .. } = parse_expr("  -x;") else {
        panic!("expected a unary expression");
    };
    assert_eq!((op, column), (UnaryOperator::Negate, 3));
}

#[test]
fn print_statement() {
    let Statement::Print { expr, line } = parse_line("print x + 1;").unwrap() else {
        panic!("expected a print statement");
    };
    assert_eq!(line, 1);
    assert_eq!(shape(&expr), "(x + 1)");
}

#[test]
fn variable_declaration() {
    let Statement::VarDecl { name, initializer, .. } = parse_line("var answer = 6 * 7;").unwrap()
    else {
        panic!("expected a declaration");
    };
    assert_eq!(name, "answer");
    assert_eq!(shape(&initializer), "(6 * 7)");
}

#[test]
fn parenthesized_comparison_is_rejected() {
    assert_eq!(parse_line("(1 < 2);"),
               Err(ParseError::ExpectedClosingParen { line: 1, column: 4 }));
}

#[test]
fn unclosed_parenthesis_is_rejected() {
    assert_eq!(parse_line("(1 + 2"),
               Err(ParseError::ExpectedClosingParen { line: 1, column: 1 }));
}

#[test]
fn missing_tokens_are_reported() {
    assert_eq!(parse_line("print 1"),
               Err(ParseError::UnexpectedEndOfInput { expected: "';' after expression",
                                                      line:     1, }));
    assert_eq!(parse_line("var = 2;"),
               Err(ParseError::UnexpectedToken { expected: "a variable name",
                                                 found:    TokenKind::Assign,
                                                 line:     1,
                                                 column:   5, }));
    assert_eq!(parse_line("1 2;"),
               Err(ParseError::UnexpectedToken { expected: "';' after expression",
                                                 found:    TokenKind::Number,
                                                 line:     1,
                                                 column:   3, }));
}

#[test]
fn statement_keywords_are_not_expressions() {
    assert!(matches!(parse_line("1 + print;"),
                     Err(ParseError::UnexpectedToken { found: TokenKind::KwPrint, .. })));
    assert!(matches!(parse_line("var x = var;"),
                     Err(ParseError::UnexpectedToken { found: TokenKind::KwVar, .. })));
}

#[test]
fn empty_line_is_rejected() {
    let tokens = lex("", 5).unwrap();
    assert_eq!(parse(&tokens, 5),
               Err(ParseError::UnexpectedEndOfInput { expected: "an expression",
                                                      line:     5, }));
}

#[test]
fn trailing_tokens_are_ignored() {
    assert!(matches!(parse_line("print 1; )))"), Ok(Statement::Print { .. })));
}
