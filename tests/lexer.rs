use lineal::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, lex},
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source, 1).expect("line lexes")
                  .into_iter()
                  .map(|token| token.kind)
                  .collect()
}

#[test]
fn single_character_tokens() {
    use TokenKind::{Assign, LParen, Minus, Not, Plus, RParen, Semicolon, Slash, Star};

    assert_eq!(kinds("+ - * / ( ) ; ! ="),
               vec![Plus, Minus, Star, Slash, LParen, RParen, Semicolon, Not, Assign]);
}

#[test]
fn two_character_operators_win_over_prefixes() {
    use TokenKind::{Assign, Equals, Greater, GreaterEq, Less, LessEq, Not, NotEquals};

    assert_eq!(kinds(">= <= == != > < = !"),
               vec![GreaterEq, LessEq, Equals, NotEquals, Greater, Less, Assign, Not]);
    assert_eq!(kinds("a>=b"),
               vec![TokenKind::Identifier, GreaterEq, TokenKind::Identifier]);
    assert_eq!(kinds("===").len(), 2);
    assert_eq!(kinds("!!="), vec![Not, NotEquals]);
}

#[test]
fn literals_carry_text_and_operators_do_not() {
    let tokens = lex("var total = 12 + false;", 3).unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::KwVar, "var", 3, 1),
                    Token::new(TokenKind::Identifier, "total", 3, 5),
                    Token::new(TokenKind::Assign, "=", 3, 11),
                    Token::new(TokenKind::Number, "12", 3, 13),
                    Token::new(TokenKind::Plus, "+", 3, 16),
                    Token::new(TokenKind::BoolLiteral, "false", 3, 18),
                    Token::new(TokenKind::Semicolon, ";", 3, 23)]);
    assert!(tokens[0].text.is_empty());
    assert_eq!(tokens[3].text, "12");
}

#[test]
fn digits_and_letters_split_into_number_and_identifier() {
    let tokens = lex("12abc", 1).unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Number, "12", 1, 1),
                    Token::new(TokenKind::Identifier, "abc", 1, 3)]);
}

#[test]
fn identifiers_may_contain_digits() {
    let tokens = lex("x1y2", 1).unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "x1y2", 1, 1)]);
}

#[test]
fn keyword_prefix_splits_identifier() {
    let tokens = lex("trueValue", 1).unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::BoolLiteral, "true", 1, 1),
                    Token::new(TokenKind::Identifier, "Value", 1, 5)]);
}

#[test]
fn keyword_prefix_remainder_is_lexed_again() {
    use TokenKind::{BoolLiteral, Identifier, KwPrint, KwVar, Number};

    assert_eq!(kinds("vartrue"), vec![KwVar, BoolLiteral]);
    assert_eq!(kinds("print5"), vec![KwPrint, Number]);
    assert_eq!(kinds("falsevarx"), vec![BoolLiteral, KwVar, Identifier]);

    let tokens = lex("  printx", 1).unwrap();
    assert_eq!(tokens[1], Token::new(Identifier, "x", 1, 8));
}

#[test]
fn keyword_inside_identifier_is_not_split() {
    assert_eq!(kinds("avar"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("xtrue"), vec![TokenKind::Identifier]);
}

#[test]
fn line_number_comes_from_caller() {
    let tokens = lex("print 1;", 42).unwrap();
    assert!(tokens.iter().all(|token| token.line == 42));
}

#[test]
fn spaces_are_skipped() {
    assert_eq!(kinds("   "), vec![]);
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds("  1   +  2 "), vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]);
}

#[test]
fn unrecognized_character_reports_position() {
    assert_eq!(lex("var x = 5 % 2;", 7),
               Err(LexError { text:   "%".to_string(),
                              line:   7,
                              column: 11, }));
}

#[test]
fn tabs_and_underscores_are_rejected() {
    assert!(lex("\tprint 1;", 1).is_err());
    assert!(lex("_x", 1).is_err());
    assert!(lex("print \"hi\";", 1).is_err());
}
