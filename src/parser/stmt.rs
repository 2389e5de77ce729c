use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Statement dispatch: `let` and `return` have registered handlers,
/// anything else parses as an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.cur_kind()).copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.cur_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.cur_token().clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Return(ReturnStatement { token, value }))
}

/// A bare expression in statement position. Semicolons are statement
/// terminators, optional at the end of a block or of the input.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.cur_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Expression(ExpressionStatement {
        token,
        expression,
    }))
}

/// Parses statements between `{` and `}`. The cursor must sit on the
/// opening brace on entry and is left on the closing brace on exit.
/// Reaching end of input before `}` is an unterminated-block error, not a
/// silent truncation.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, Error> {
    let token = parser.cur_token().clone();
    let mut statements = vec![];

    parser.advance();

    while !parser.cur_is(TokenKind::CloseCurly) {
        if parser.cur_is(TokenKind::EOF) {
            return Err(Error::new(ErrorImpl::UnterminatedBlock, token.span.clone()));
        }
        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStatement { token, statements })
}
