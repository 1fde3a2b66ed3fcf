//! Read-only AST traversal.
//!
//! Override the `visit_*` methods of interest and call the matching `walk_*`
//! function to keep descending. Below the statement level the walk is driven
//! by [`walk_expr`] from a heap stack, so a binary node is seen twice:
//! [`Visitor::enter_binary`] before its operands and
//! [`Visitor::leave_binary`] after them.

use super::{
    ast::{Ast, Expr, Stmt},
    expressions::{BinaryExpr, NumberExpr},
    statements::ExpressionStmt,
};

/// A visitor for traversing the AST.
pub trait Visitor: Sized {
    fn visit_ast(&mut self, ast: &Ast) {
        walk_ast(self, ast);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) {
        walk_expression_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn enter_binary(&mut self, _binary: &BinaryExpr) {}

    fn leave_binary(&mut self, _binary: &BinaryExpr) {}

    fn visit_number(&mut self, _number: &NumberExpr) {}
}

/// Walk every statement in source order.
pub fn walk_ast<V: Visitor>(visitor: &mut V, ast: &Ast) {
    for stmt in &ast.body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Expression(stmt) => visitor.visit_expression_stmt(stmt),
    }
}

pub fn walk_expression_stmt<V: Visitor>(visitor: &mut V, stmt: &ExpressionStmt) {
    visitor.visit_expr(&stmt.expression);
}

enum Step<'a> {
    Enter(&'a Expr),
    Leave(&'a BinaryExpr),
}

/// Walk `expr` depth-first, left operand before right.
pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    let mut pending = vec![Step::Enter(expr)];

    while let Some(step) = pending.pop() {
        match step {
            Step::Enter(Expr::Number(number)) => visitor.visit_number(number),
            Step::Enter(Expr::Binary(binary)) => {
                visitor.enter_binary(binary);
                pending.push(Step::Leave(binary));
                pending.push(Step::Enter(&binary.right));
                pending.push(Step::Enter(&binary.left));
            }
            Step::Leave(binary) => visitor.leave_binary(binary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Visitor;
    use crate::ast::{
        ast::{Ast, Expr, Stmt},
        expressions::{BinaryExpr, NumberExpr, Operator},
        statements::ExpressionStmt,
    };
    use crate::Span;

    struct NumberCollector(Vec<u64>);

    #[derive(Default)]
    struct Events(Vec<String>);

    impl Visitor for Events {
        fn enter_binary(&mut self, binary: &BinaryExpr) {
            self.0.push(format!("enter {}", binary.operator));
        }

        fn leave_binary(&mut self, binary: &BinaryExpr) {
            self.0.push(format!("leave {}", binary.operator));
        }

        fn visit_number(&mut self, number: &NumberExpr) {
            self.0.push(number.value.to_string());
        }
    }

    impl Visitor for NumberCollector {
        fn visit_number(&mut self, number: &NumberExpr) {
            self.0.push(number.value);
        }
    }

    fn number(value: u64) -> Expr {
        Expr::Number(NumberExpr {
            value,
            span: Span::default(),
        })
    }

    #[test]
    fn test_visitor_walks_left_to_right() {
        let expression = Expr::Binary(BinaryExpr {
            operator: Operator::Add,
            left: Box::new(number(1)),
            right: Box::new(Expr::Binary(BinaryExpr {
                operator: Operator::Mul,
                left: Box::new(number(2)),
                right: Box::new(number(3)),
                span: Span::default(),
            })),
            span: Span::default(),
        });
        let ast = Ast {
            body: vec![
                Stmt::Expression(ExpressionStmt {
                    expression,
                    span: Span::default(),
                }),
                Stmt::Expression(ExpressionStmt {
                    expression: number(4),
                    span: Span::default(),
                }),
            ],
            span: Span::default(),
        };

        let mut collector = NumberCollector(vec![]);
        collector.visit_ast(&ast);

        assert_eq!(collector.0, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_visitor_brackets_operands_with_enter_and_leave() {
        let expression = Expr::Binary(BinaryExpr {
            operator: Operator::Sub,
            left: Box::new(Expr::Binary(BinaryExpr {
                operator: Operator::Add,
                left: Box::new(number(1)),
                right: Box::new(number(2)),
                span: Span::default(),
            })),
            right: Box::new(number(3)),
            span: Span::default(),
        });

        let mut events = Events::default();
        events.visit_expr(&expression);

        assert_eq!(
            events.0,
            vec!["enter -", "enter +", "1", "2", "leave +", "3", "leave -"]
        );
    }
}
