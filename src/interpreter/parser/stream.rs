use crate::{
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

use super::core::ParseResult;

/// A cursor over the tokens of one line.
///
/// The cursor only moves forward. Reading past the last token is an
/// [`ParseError::UnexpectedEndOfInput`].
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens:  &'a [Token],
    current: usize,
    line:    usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor at the first token. `line` is used for errors that
    /// have no token to point at.
    #[must_use]
    pub const fn new(tokens: &'a [Token], line: usize) -> Self {
        Self { tokens,
               current: 0,
               line }
    }

    /// The line being parsed.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Tokens not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [Token] {
        self.tokens.get(self.current..).unwrap_or_default()
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if no tokens are left; `expected` describes
    /// what the caller wanted.
    pub fn advance(&mut self, expected: &'static str) -> ParseResult<&'a Token> {
        let token = self.peek()
                        .ok_or(ParseError::UnexpectedEndOfInput { expected,
                                                                  line: self.line })?;
        self.current += 1;
        Ok(token)
    }

    /// Returns `true` if the next token is one of `kinds`.
    #[must_use]
    pub fn check(&self, kinds: &[TokenKind]) -> bool {
        self.peek().is_some_and(|token| kinds.contains(&token.kind))
    }

    /// Consumes the next token if it is one of `kinds`.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> Option<&'a Token> {
        if self.check(kinds) {
            let token = self.peek();
            self.current += 1;
            token
        } else {
            None
        }
    }

    /// Consumes the next token, which must be of kind `kind`.
    ///
    /// # Errors
    /// `UnexpectedToken` if another kind is next, `UnexpectedEndOfInput` if
    /// the line is exhausted.
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<&'a Token> {
        let token = self.advance(expected)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::UnexpectedToken { expected,
                                              found: token.kind,
                                              line: token.line,
                                              column: token.column })
        }
    }
}
