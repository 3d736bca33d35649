#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    lex(source)
        .unwrap()
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.text(source).to_string())
        .collect()
}

#[test]
fn test_delimiters() {
    assert_eq!(
        kinds("({})"),
        vec![
            TokenKind::LParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers_and_symbols() {
    assert_eq!(texts("+ 1 -2 head"), vec!["+", "1", "-2", "head"]);
    assert_eq!(
        kinds("+ 1 -2 head"),
        vec![
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Symbol,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_minus_alone_is_symbol() {
    assert_eq!(kinds("- x"), vec![TokenKind::Symbol, TokenKind::Symbol, TokenKind::Eof]);
}

#[test]
fn test_number_is_tried_before_symbol() {
    assert_eq!(texts("1a"), vec!["1", "a"]);
    assert_eq!(texts("a1"), vec!["a1"]);
    assert_eq!(texts("1-2"), vec!["1", "-2"]);
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(texts("; a comment\n(+ 1 2) ; trailing"), vec!["(", "+", "1", "2", ")"]);
    assert_eq!(kinds(";only a comment"), vec![TokenKind::Eof]);
}

#[test]
fn test_spans() {
    let tokens = lex("  (def)").unwrap();
    assert_eq!(tokens[0].span, Span::new(2, 3));
    assert_eq!(tokens[1].span, Span::new(3, 6));
    assert_eq!(tokens[3].span, Span::new(7, 7));
}

#[test]
fn test_unexpected_char() {
    assert_eq!(
        lex("(+ 1 #)"),
        Err(ParseError::UnexpectedChar {
            ch: '#',
            span: Span::new(5, 6),
        })
    );
}

#[test]
fn test_unexpected_multibyte_char() {
    assert_eq!(
        lex("λ"),
        Err(ParseError::UnexpectedChar {
            ch: 'λ',
            span: Span::new(0, 2),
        })
    );
}

proptest! {
    #[test]
    fn prop_integers_lex_as_one_number(n in any::<i64>()) {
        let source = n.to_string();
        let tokens = lex(&source).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text(&source), source.as_str());
    }

    #[test]
    fn prop_symbols_round_trip(name in "[a-z_+*/=<>!&][a-zA-Z0-9_+*/=<>!&-]{0,12}") {
        let tokens = lex(&name).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Symbol);
        prop_assert_eq!(tokens[0].text(&name), name.as_str());
    }
}
