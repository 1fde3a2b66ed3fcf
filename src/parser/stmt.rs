use crate::{
    ast::{ast::Stmt, statements::ExpressionStmt},
    errors::errors::Error,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: *expr.get_span(),
        expression: expr,
    }))
}
