use crate::Span;

use super::ast::Expr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}
