use crate::Span;

use super::tokens::{lookup_ident, Token, TokenKind};

/// A pull-based scanner over raw source bytes.
///
/// Each call to [`Lexer::next_token`] consumes exactly one token from the
/// input. Invariant: `start <= pos <= source.len()`, and a token is only
/// emitted once the span `start..pos` covers its full literal, after which
/// `start` is reset to `pos`. Once the first `EOF` token has been returned,
/// every later call returns `EOF` again; a fresh lexer is required to
/// re-scan the input.
pub struct Lexer {
    source: String,
    pos: usize,
    start: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            pos: 0,
            start: 0,
        }
    }

    /// Scans and returns the next token. Never fails: unrecognized bytes
    /// are surfaced as `Illegal` tokens for the caller to reject.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.pos;

        if self.at_eof() {
            return self.emit(TokenKind::EOF);
        }

        let ch = self.read();
        match ch {
            b';' => self.emit(TokenKind::Semicolon),
            b',' => self.emit(TokenKind::Comma),
            b'(' => self.emit(TokenKind::OpenParen),
            b')' => self.emit(TokenKind::CloseParen),
            b'{' => self.emit(TokenKind::OpenCurly),
            b'}' => self.emit(TokenKind::CloseCurly),
            b'+' => self.emit(TokenKind::Plus),
            b'*' => self.emit(TokenKind::Asterisk),
            b'/' => self.emit(TokenKind::Slash),
            b'<' => self.emit(TokenKind::LessThan),
            b'>' => self.emit(TokenKind::GreaterThan),
            b':' => {
                if self.peek() == b'=' {
                    self.read();
                    self.emit(TokenKind::Assign)
                } else {
                    self.emit(TokenKind::Colon)
                }
            }
            b'=' => {
                if self.peek() == b'=' {
                    self.read();
                    self.emit(TokenKind::Equals)
                } else {
                    self.emit(TokenKind::Assign)
                }
            }
            b'!' => {
                if self.peek() == b'=' {
                    self.read();
                    self.emit(TokenKind::NotEquals)
                } else {
                    self.emit(TokenKind::Bang)
                }
            }
            b'-' => {
                if self.peek() == b'>' {
                    self.read();
                    self.emit(TokenKind::Arrow)
                } else {
                    self.emit(TokenKind::Minus)
                }
            }
            _ => {
                if is_letter(ch) {
                    while is_letter(self.peek()) {
                        self.read();
                    }
                    let kind = lookup_ident(&self.source[self.start..self.pos]);
                    self.emit(kind)
                } else if is_digit(ch) {
                    while is_digit(self.peek()) {
                        self.read();
                    }
                    self.emit(TokenKind::Int)
                } else {
                    // The cursor may sit inside a multi-byte character;
                    // re-align so the whole character becomes one illegal
                    // token instead of slicing mid-character.
                    while !self.source.is_char_boundary(self.pos) {
                        self.pos += 1;
                    }
                    self.emit(TokenKind::Illegal)
                }
            }
        }
    }

    /// Consumes and returns the byte at the cursor, or 0 at end of input.
    fn read(&mut self) -> u8 {
        if self.at_eof() {
            return 0;
        }
        let ch = self.source.as_bytes()[self.pos];
        self.pos += 1;
        ch
    }

    /// Returns the byte at the cursor without consuming it, or 0 at end of
    /// input.
    fn peek(&self) -> u8 {
        if self.at_eof() {
            0
        } else {
            self.source.as_bytes()[self.pos]
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\n') {
            self.pos += 1;
        }
    }

    /// Packages the span `start..pos` into a token and marks it consumed.
    fn emit(&mut self, kind: TokenKind) -> Token {
        let span = Span {
            start: self.start,
            end: self.pos,
        };
        let literal = self.source[self.start..self.pos].to_string();
        self.start = self.pos;
        Token {
            kind,
            literal,
            span,
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase()
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
