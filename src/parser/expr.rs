use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr, Operator},
    },
    errors::errors::{Error, Expected},
    lexer::tokens::{TokenKind, TokenValue},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let Some(nud) = parser
        .current_token_kind()
        .and_then(|kind| parser.get_nud_lookup().get(&kind).copied())
    else {
        return Err(parser.unexpected(Expected::Expression));
    };

    let mut left = nud(parser)?;

    // While the next token is an operator binding tighter than `bp`, fold it into lhs
    while let Some(kind) = parser.current_token_kind() {
        let token_bp = *parser
            .get_bp_lookup()
            .get(&kind)
            .unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&kind) {
            Some(led) => *led,
            None => break,
        };
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number, Expected::Number)?;

    // The lexer gives every Number token a numeric payload
    let TokenValue::Number(value) = token.value else {
        return Err(parser.unexpected_token(token, Expected::Number));
    };

    Ok(Expr::Number(NumberExpr {
        value,
        span: token.span,
    }))
}

/// LED handler, only ever registered for the four operator tokens.
pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let Some(operator) = parser
        .current_token_kind()
        .and_then(Operator::from_token_kind)
    else {
        return Err(parser.unexpected(Expected::Operator));
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
