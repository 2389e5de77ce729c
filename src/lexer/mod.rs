//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - On-demand tokenization, one token per `next_token` call
//! - Recognition of keywords, identifiers, integer literals and operators
//! - One-byte lookahead for two-character operators (`:=`, `==`, `!=`, `->`)
//! - Token span tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
