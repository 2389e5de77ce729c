//! Error types for the front end.
//!
//! This module defines the diagnostic types the parser accumulates while
//! building the AST. It includes:
//!
//! - An `Error` wrapper pairing a message with its source span
//! - Specific variants for structural, literal-conversion and
//!   unparseable-expression failures
//! - Display formatting producing the human-readable diagnostic strings

pub mod errors;
