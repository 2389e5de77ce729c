use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, FunctionLiteral, Identifier, IfExpression, InfixExpression,
            IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// The Pratt loop. Parses the prefix part under the cursor, then keeps
/// folding infix operators into the left side while the upcoming operator
/// binds tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    let token_kind = parser.cur_kind();
    let prefix_fn = match parser.get_prefix_lookup().get(&token_kind).copied() {
        Some(handler) => handler,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixFunction {
                    token: parser.cur_token().literal.clone(),
                },
                parser.cur_token().span.clone(),
            ))
        }
    };

    let mut left = prefix_fn(parser)?;

    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        // A registered binding power without an infix handler ends the
        // expression; statement termination is not an error here.
        let infix_fn = match parser.get_infix_lookup().get(&parser.peek_kind()).copied() {
            Some(handler) => handler,
            None => return Ok(left),
        };

        parser.advance();
        left = infix_fn(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.cur_token().clone();

    Ok(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

/// Converts the digit span under the cursor to an `i64`. A malformed or
/// overflowing digit string is recorded as a diagnostic and parsing
/// continues with a zero-value placeholder node.
pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.cur_token().clone();

    let value = match token.literal.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            parser.record_error(Error::new(
                ErrorImpl::IntegerParseError {
                    token: token.literal.clone(),
                },
                token.span.clone(),
            ));
            0
        }
    };

    Ok(Expression::Integer(IntegerLiteral { token, value }))
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.cur_token().clone();
    let value = token.kind == TokenKind::True;

    Ok(Expression::Boolean(BooleanLiteral { token, value }))
}

/// Unary `!` and `-`. The operand binds at `Prefix` power, so prefix
/// operators are right-associative and tighter than any binary operator.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.cur_token().clone();
    let operator = token.literal.clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        token,
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let token = parser.cur_token().clone();
    let operator = token.literal.clone();
    let bp = parser.cur_precedence();

    parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        token,
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// `( expr )` - the inner expression restarts at `Lowest`; a missing `)`
/// abandons the enclosing expression with a structural error.
pub fn parse_grouped_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

/// `if (<cond>) { <consequence> }` with an optional `else { <alternative> }`.
/// The `else` binds to the nearest preceding `if`.
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.cur_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

/// `fn(<params>) { <body> }` - parameters are bare identifiers, the empty
/// list is allowed, a trailing comma is not.
pub fn parse_function_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.cur_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    let token = parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(Identifier {
        value: token.literal.clone(),
        token,
    });

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            value: token.literal.clone(),
            token,
        });
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}
