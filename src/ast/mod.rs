//! AST (Abstract Syntax Tree) module.
//!
//! Contains all definitions related to the AST structure. Nodes form a
//! closed set of enum variants; exhaustive matching replaces virtual
//! dispatch for printing and later consumers. Every node keeps the token
//! it originated from and renders a canonical, re-parseable string form.
//!
//! Submodules:
//! - ast: Core statement/expression enums, `Program` and the `Node` trait
//! - expressions: Payload structs for expression variants
//! - statements: Payload structs for statement variants

pub mod ast;
pub mod expressions;
pub mod statements;
