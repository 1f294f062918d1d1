use tracing::trace;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{statement::parse_statement, stream::TokenStream},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the tokens of one line into a statement.
///
/// Exactly one statement is read; tokens after its terminating `;` are left
/// unread. An empty token list is an error, since every line must hold a
/// statement.
///
/// # Parameters
/// - `tokens`: The tokens of the line, as produced by
///   [`lex`](crate::interpreter::lexer::lex).
/// - `line`: The line number, used when the line ends too early.
///
/// # Errors
/// Returns a [`ParseError`] for the first token that does not fit the grammar.
///
/// # Example
/// ```
/// use lineal::{
///     ast::{ArithmeticOperator, BinaryOperator, Expr, Statement},
///     interpreter::{lexer::lex, parser::parse},
/// };
///
/// let tokens = lex("print 1 + 2 * 3;", 1).unwrap();
/// let Statement::Print { expr, .. } = parse(&tokens, 1).unwrap() else {
///     panic!("expected a print statement");
/// };
///
/// let Expr::Binary { op, right, .. } = expr else {
///     panic!("expected a binary expression");
/// };
/// assert_eq!(op, BinaryOperator::Arithmetic(ArithmeticOperator::Add));
/// assert!(matches!(*right,
///                  Expr::Binary { op: BinaryOperator::Arithmetic(ArithmeticOperator::Mul),
///                                 .. }));
/// ```
pub fn parse(tokens: &[Token], line: usize) -> ParseResult<Statement> {
    let mut stream = TokenStream::new(tokens, line);
    let statement = parse_statement(&mut stream)?;

    if !stream.is_at_end() {
        trace!(line, ignored = stream.remaining().len(), "tokens after ';' ignored");
    }
    trace!(line, ?statement, "parsed statement");

    Ok(statement)
}
