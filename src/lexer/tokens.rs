use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Function);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("Int", TokenKind::TypeName);
        map
    };
}

/// Maps an identifier-shaped span to its keyword kind, or to
/// `TokenKind::Identifier` when it is not a reserved word.
pub fn lookup_ident(ident: &str) -> TokenKind {
    match RESERVED_LOOKUP.get(ident) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Identifier,
    Int,
    True,
    False,

    Assign,    // := or =
    Equals,    // ==
    NotEquals, // !=
    Bang,      // !
    Plus,
    Minus,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,
    Arrow, // ->

    Comma,
    Colon,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    TypeName,
    Let,
    Function,
    Return,
    If,
    Else,
}

impl Display for TokenKind {
    /// Stable debug name used in diagnostics. Never parsed back in.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Int => "INT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOTEQUALS",
            TokenKind::Bang => "BANG",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::LessThan => "LESSTHAN",
            TokenKind::GreaterThan => "GREATERTHAN",
            TokenKind::Arrow => "RIGHTARROW",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::TypeName => "TYPE",
            TokenKind::Let => "LET",
            TokenKind::Function => "FUNCTION",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
        };
        write!(f, "{}", name)
    }
}

/// A classified unit of source text.
///
/// `literal` is the exact source substring the token was scanned from, so
/// diagnostics and literal re-serialization round-trip; `span` is its byte
/// range in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.literal)
    }
}
