//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - One- and two-character operators
//! - Illegal bytes
//! - The terminal EOF state

use super::{
    lexer::Lexer,
    tokens::{lookup_ident, TokenKind},
};

fn collect_kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source.to_string());
    let mut kinds = vec![];
    loop {
        let token = lexer.next_token();
        let kind = token.kind;
        kinds.push(kind);
        if kind == TokenKind::EOF {
            return kinds;
        }
    }
}

#[test]
fn test_lex_variable_assignment() {
    let source = "let a := 3;".to_string();
    let mut lexer = Lexer::new(source);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "a"),
        (TokenKind::Assign, ":="),
        (TokenKind::Int, "3"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_lex_function_declaration() {
    let source = "fn add(x: Int, y: Int) -> Int { return x + y; }";

    assert_eq!(
        collect_kinds(source),
        vec![
            TokenKind::Function,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::TypeName,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::TypeName,
            TokenKind::CloseParen,
            TokenKind::Arrow,
            TokenKind::TypeName,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lex_keywords() {
    let source = "let fn return if else true false Int";

    assert_eq!(
        collect_kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Function,
            TokenKind::Return,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::TypeName,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lex_operators() {
    let source = "= == != ! + - * / < > ->";

    assert_eq!(
        collect_kinds(source),
        vec![
            TokenKind::Assign,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Bang,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Arrow,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lex_adjacent_compound_operators() {
    // No whitespace between candidates for the one-byte lookahead.
    let source = "a:=b==c!=d->e";

    assert_eq!(
        collect_kinds(source),
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lex_comparison_operators_not_swapped() {
    let source = "1 < 2 > 3".to_string();
    let mut lexer = Lexer::new(source);

    lexer.next_token();
    assert_eq!(lexer.next_token().kind, TokenKind::LessThan);
    lexer.next_token();
    assert_eq!(lexer.next_token().kind, TokenKind::GreaterThan);
}

#[test]
fn test_lex_identifiers_and_integers() {
    let source = "foo Bar x 0 42 007".to_string();
    let mut lexer = Lexer::new(source);

    let expected = [
        (TokenKind::Identifier, "foo"),
        (TokenKind::Identifier, "Bar"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Int, "0"),
        (TokenKind::Int, "42"),
        (TokenKind::Int, "007"),
        (TokenKind::EOF, ""),
    ];

    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_lex_spans_index_into_source() {
    let source = "let ab := 12;".to_string();
    let mut lexer = Lexer::new(source.clone());

    loop {
        let token = lexer.next_token();
        assert_eq!(token.literal, &source[token.span.start..token.span.end]);
        if token.kind == TokenKind::EOF {
            break;
        }
    }
}

#[test]
fn test_lex_illegal_byte() {
    let source = "let x = @;".to_string();
    let mut lexer = Lexer::new(source);

    lexer.next_token();
    lexer.next_token();
    lexer.next_token();

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "@");

    // The scan continues past the illegal byte.
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
}

#[test]
fn test_lex_illegal_multibyte_character() {
    // A multi-byte character is consumed whole as a single illegal token
    // with a span on character boundaries.
    let source = "let x = é;".to_string();
    let mut lexer = Lexer::new(source.clone());

    lexer.next_token();
    lexer.next_token();
    lexer.next_token();

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Illegal);
    assert_eq!(token.literal, "é");
    assert_eq!(token.span.end - token.span.start, "é".len());
    assert_eq!(token.literal, &source[token.span.start..token.span.end]);

    // The scan continues past the illegal character and terminates.
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_lex_eof_is_terminal() {
    let source = "x".to_string();
    let mut lexer = Lexer::new(source);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_lex_whitespace_handling() {
    let source = "  let \t x \n =  42  ";

    assert_eq!(
        collect_kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lex_empty_input() {
    assert_eq!(collect_kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("Int"), TokenKind::TypeName);
    assert_eq!(lookup_ident("letter"), TokenKind::Identifier);
    assert_eq!(lookup_ident("foo"), TokenKind::Identifier);
}

#[test]
fn test_token_kind_debug_names() {
    assert_eq!(TokenKind::Semicolon.to_string(), "SEMICOLON");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
    assert_eq!(TokenKind::Arrow.to_string(), "RIGHTARROW");
    assert_eq!(TokenKind::TypeName.to_string(), "TYPE");
}
