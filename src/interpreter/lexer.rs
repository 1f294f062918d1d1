use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Keywords and operators are plain `#[token]` patterns, so logos picks the
/// longest operator at each position (`>=` before `>`, `==` before `=`).
/// Only a single space separates tokens; anything else that no pattern
/// accepts is a lexical error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r" +")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `true` or `false`.
    #[token("true")]
    #[token("false")]
    BoolLiteral,
    /// Variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `==`
    #[token("==")]
    Equals,
    /// `!=`
    #[token("!=")]
    NotEquals,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEq,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEq,
    /// `=`
    #[token("=")]
    Assign,
    /// `!`
    #[token("!")]
    Not,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `print`
    #[token("print")]
    KwPrint,
    /// `var`
    #[token("var")]
    KwVar,
}

impl TokenKind {
    /// Returns `true` for the kinds whose source text is kept on the token.
    #[must_use]
    pub const fn carries_text(self) -> bool {
        matches!(self, Self::Number | Self::BoolLiteral | Self::Identifier)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number => "number",
            Self::BoolLiteral => "boolean",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Equals => "'=='",
            Self::NotEquals => "'!='",
            Self::Less => "'<'",
            Self::LessEq => "'<='",
            Self::Greater => "'>'",
            Self::GreaterEq => "'>='",
            Self::Assign => "'='",
            Self::Not => "'!'",
            Self::Semicolon => "';'",
            Self::KwPrint => "'print'",
            Self::KwVar => "'var'",
        };
        f.write_str(text)
    }
}

/// A token together with its source position.
///
/// `text` is empty unless [`TokenKind::carries_text`] holds for `kind`.
/// `column` is the 1-based byte offset of the first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// Literal text for numbers, booleans and identifiers.
    pub text:   String,
    /// The source line, as supplied by the caller of [`lex`].
    pub line:   usize,
    /// The 1-based column of the token's first character.
    pub column: usize,
}

impl Token {
    /// Creates a token, dropping the text for kinds that do not carry any.
    #[must_use]
    pub fn new(kind: TokenKind, text: &str, line: usize, column: usize) -> Self {
        let text = if kind.carries_text() { text.to_string() } else { String::new() };
        Self { kind,
               text,
               line,
               column }
    }
}

/// Keywords in the order they are tried at the start of an identifier run.
const KEYWORDS: [(&str, TokenKind); 4] = [("true", TokenKind::BoolLiteral),
                                          ("print", TokenKind::KwPrint),
                                          ("false", TokenKind::BoolLiteral),
                                          ("var", TokenKind::KwVar)];

/// Converts one source line into tokens.
///
/// Keywords are recognized without a trailing word boundary: an identifier
/// that starts with a keyword's spelling is split into that keyword and the
/// tokens of whatever follows it, so `trueValue` lexes as `true` followed by
/// the identifier `Value`.
///
/// # Errors
/// Returns a [`LexError`] for the first character no token starts with.
/// Tabs are not whitespace here.
///
/// # Example
/// ```
/// use lineal::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("var x = 2 >= 1;", 1).unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::KwVar,
///                 TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::Number,
///                 TokenKind::GreaterEq,
///                 TokenKind::Number,
///                 TokenKind::Semicolon]);
/// assert_eq!(tokens[1].text, "x");
/// assert_eq!(tokens[4].column, 11);
/// ```
pub fn lex(source: &str, line: usize) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    lex_fragment(source, line, 1, &mut tokens)?;
    trace!(line, ?tokens, "lexed line");
    Ok(tokens)
}

/// Lexes `source`, whose first byte sits at `first_column`, onto `tokens`.
fn lex_fragment(source: &str,
                line: usize,
                first_column: usize,
                tokens: &mut Vec<Token>)
                -> Result<(), LexError> {
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let column = first_column + lexer.span().start;
        let text = lexer.slice();

        let Ok(kind) = kind else {
            return Err(LexError { text: text.to_string(),
                                  line,
                                  column });
        };

        if kind == TokenKind::Identifier
           && let Some((keyword, keyword_kind)) = keyword_prefix(text)
        {
            tokens.push(Token::new(keyword_kind, keyword, line, column));
            lex_fragment(&text[keyword.len()..], line, column + keyword.len(), tokens)?;
            continue;
        }

        tokens.push(Token::new(kind, text, line, column));
    }

    Ok(())
}

/// Finds a keyword that `identifier` starts with.
fn keyword_prefix(identifier: &str) -> Option<(&'static str, TokenKind)> {
    KEYWORDS.into_iter()
            .find(|(keyword, _)| identifier.starts_with(keyword))
}
