use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Span};

/// A non-fatal, ordered diagnostic record of a recoverable parse error.
///
/// The message text is the public contract consumed by collaborators (a
/// REPL or CLI prints every diagnostic as-is); the span locates the
/// offending token in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {token} found")]
    NoPrefixFunction { token: String },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
    #[error("unterminated block")]
    UnterminatedBlock,
}
