//! Front end for the gorilla language.
//!
//! The crate turns source text into a stream of classified tokens and then
//! into an abstract syntax tree:
//!
//! - [`lexer`] - pull-based tokenizer over raw bytes
//! - [`ast`] - statement and expression nodes with a canonical string form
//! - [`parser`] - Pratt parser with prefix/infix dispatch tables
//! - [`errors`] - diagnostics accumulated during a parse
//!
//! Evaluation, type checking and code generation are external collaborators;
//! they consume the `Program` the parser returns together with its ordered
//! diagnostic list.

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

/// Byte range of a token or diagnostic inside the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}
