use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents an unsigned integer literal in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberExpr {
    pub value: u64,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Minus => Some(Operator::Sub),
            TokenKind::Asterisk => Some(Operator::Mul),
            TokenKind::Slash => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// Represents `left operator right`; both operands are owned by this node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub operator: Operator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}
