//! Parser state and the `parse_program` entry point.
//!
//! The parser owns its lexer and pulls tokens on demand, keeping a
//! one-token lookahead (`cur_token`/`peek_token`). It maintains lookup
//! tables for:
//!
//! - Statement handlers
//! - Prefix handlers for expression starts
//! - Infix handlers for binary operators
//! - Binding powers for operator precedence
//!
//! Parsing never aborts the whole run on a single error: a failed
//! statement is recorded as a diagnostic and the cursor skips to the next
//! statement boundary.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::Token, tokens::TokenKind},
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, InfixHandler, InfixLookup, PrefixHandler,
        PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure.
///
/// Each parse invocation owns its lexer and token cursor exclusively;
/// there is exactly one token in flight between the lexer and the parser.
pub struct Parser {
    /// The token producer; consumed strictly in order.
    lexer: Lexer,
    /// The token currently under the cursor.
    cur_token: Token,
    /// One-token lookahead.
    peek_token: Token,
    /// Diagnostics accumulated so far, in source order.
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers.
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix (expression start) handlers.
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix (binary operator) handlers.
    infix_lookup: InfixLookup,
    /// Lookup table for operator binding powers.
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses the entire token stream into a `Program`.
    ///
    /// Always returns a program; structural failures abandon the enclosing
    /// statement, land in [`Parser::errors`] and parsing resumes at the
    /// next statement boundary.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.cur_kind() != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
            self.advance();
        }

        program
    }

    /// The diagnostics accumulated so far, in the order they occurred.
    /// Empty when parsing succeeded with no structural errors.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Records a diagnostic without abandoning the current construct.
    pub fn record_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Returns the current token without advancing.
    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn cur_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the lookahead into the cursor and pulls a new token from the
    /// lexer.
    pub fn advance(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Advances past the lookahead token if it has the expected kind,
    /// returning it; otherwise reports a structural mismatch.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<Token, Error> {
        if self.peek_token.kind == expected {
            self.advance();
            Ok(self.cur_token.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    got: self.peek_token.kind,
                },
                self.peek_token.span.clone(),
            ))
        }
    }

    /// Binding power of the lookahead token; `Lowest` when it is not an
    /// infix operator.
    pub fn peek_precedence(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.peek_token.kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    /// Binding power of the current token.
    pub fn cur_precedence(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.cur_token.kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler and its binding power for a token.
    pub fn infix(&mut self, kind: TokenKind, binding_power: BindingPower, infix_fn: InfixHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Skips to the next statement boundary after a failed statement.
    fn synchronize(&mut self) {
        while self.cur_kind() != TokenKind::Semicolon && self.cur_kind() != TokenKind::EOF {
            self.advance();
        }
    }
}
