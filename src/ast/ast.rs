use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{
    expressions::{BinaryExpr, NumberExpr, Operator},
    statements::ExpressionStmt,
};

/// Expression node.
///
/// Children are boxed and exclusively owned by their parent, so every
/// expression is a tree that drops with its root.
///
/// Operator chains nest one level per operator. `Display`, `Drop` and the
/// [`Visitor`](super::visit::Visitor) walk run off a heap work-list and
/// handle any depth; the derived `Debug`, `Clone` and `PartialEq` recurse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(NumberExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(number) => &number.span,
            Expr::Binary(binary) => &binary.span,
        }
    }

    /// Moves every binary child of `self` onto `pending`, leaving leaves behind.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        if let Expr::Binary(binary) = self {
            for child in [&mut binary.left, &mut binary.right] {
                if matches!(**child, Expr::Binary(_)) {
                    let leaf = Expr::Number(NumberExpr {
                        value: 0,
                        span: Span::default(),
                    });
                    pending.push(std::mem::replace(&mut **child, leaf));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        // Each popped node only has leaf children left once detached
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

enum Piece<'a> {
    Expr(&'a Expr),
    Operator(Operator),
    Close,
}

/// Fully parenthesized infix form, e.g. `(1 + (2 * 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Expr(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Expr(Expr::Number(number)) => write!(f, "{}", number.value)?,
                Piece::Expr(Expr::Binary(binary)) => {
                    f.write_str("(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Expr(&binary.right));
                    pending.push(Piece::Operator(binary.operator));
                    pending.push(Piece::Expr(&binary.left));
                }
                Piece::Operator(operator) => write!(f, " {} ", operator)?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}

/// Statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt.expression),
        }
    }
}

/// Root of a parsed program: its statements in source order.
///
/// Nothing in the tree borrows from the token stream it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ast {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Ast {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}
