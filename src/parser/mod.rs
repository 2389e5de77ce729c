//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token
//! stream into an Abstract Syntax Tree. It uses a Pratt parser for
//! expressions with proper operator precedence and handles:
//!
//! - Statement parsing (let, return, expression statements, blocks)
//! - Expression parsing (binary ops, unary ops, literals, conditionals,
//!   function literals)
//! - Error accumulation with recovery at statement boundaries
//!
//! Prefix handlers build an expression from the current token alone; infix
//! handlers combine an already-parsed left expression with an operator and
//! a freshly parsed right side. Both live in lookup tables keyed by token
//! kind, so adding an operator means adding one table entry plus one
//! binding-power entry, never touching the control flow.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
