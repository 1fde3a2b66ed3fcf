//! Human-readable dumps of token streams and syntax trees.

use std::fmt::Write;

use crate::{
    ast::{
        ast::Ast,
        expressions::{BinaryExpr, NumberExpr},
        statements::ExpressionStmt,
        visit::{walk_expression_stmt, Visitor},
    },
    lexer::tokens::TokenStream,
};

/// One line per token: `row:col Kind(payload)`.
pub fn render_tokens(tokens: &TokenStream) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{} {}", token.span.start, token);
    }
    out
}

/// Indented tree, two spaces per level.
pub fn render_ast(ast: &Ast) -> String {
    let mut printer = AstPrinter::default();
    printer.visit_ast(ast);
    printer.out
}

#[derive(Default)]
struct AstPrinter {
    out: String,
    depth: usize,
}

impl AstPrinter {
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{:indent$}{}", "", text, indent = self.depth * 2);
    }
}

impl Visitor for AstPrinter {
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) {
        self.line("ExpressionStmt");
        self.depth += 1;
        walk_expression_stmt(self, stmt);
        self.depth -= 1;
    }

    fn enter_binary(&mut self, binary: &BinaryExpr) {
        self.line(&format!("BinaryExpr({})", binary.operator));
        self.depth += 1;
    }

    fn leave_binary(&mut self, _binary: &BinaryExpr) {
        self.depth -= 1;
    }

    fn visit_number(&mut self, number: &NumberExpr) {
        self.line(&format!("Number({})", number.value));
    }
}

#[cfg(test)]
mod tests {
    use super::{render_ast, render_tokens};
    use crate::{lexer::lexer::tokenize, parser::parser::parse};

    #[test]
    fn test_render_tokens() {
        let tokens = tokenize("12 abc\n+ @");

        assert_eq!(
            render_tokens(&tokens),
            "1:1 Number(12)\n1:4 Ident(abc)\n2:1 Plus\n2:3 Error(@)\n"
        );
    }

    #[test]
    fn test_render_ast() {
        let tokens = tokenize("1 + 2 * 3 7");
        let ast = parse(&tokens).unwrap();

        assert_eq!(
            render_ast(&ast),
            "ExpressionStmt\n  BinaryExpr(+)\n    Number(1)\n    BinaryExpr(*)\n      Number(2)\n      Number(3)\nExpressionStmt\n  Number(7)\n"
        );
    }

    #[test]
    fn test_render_ast_is_idempotent() {
        let tokens = tokenize("4 / 2 - 1\n9");
        let ast = parse(&tokens).unwrap();

        assert_eq!(render_ast(&ast), render_ast(&ast));
    }

    #[test]
    fn test_render_empty_ast() {
        let tokens = tokenize("");
        let ast = parse(&tokens).unwrap();

        assert_eq!(render_ast(&ast), "");
    }

    #[test]
    fn test_render_ast_of_long_chain() {
        let source = format!("1{}", " - 2".repeat(3_000));
        let tokens = tokenize(&source);
        let ast = parse(&tokens).unwrap();

        let rendered = render_ast(&ast);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 1 + 3_000 + 3_001);
        assert_eq!(lines[1], "  BinaryExpr(-)");
        assert_eq!(lines[3_001].trim_start(), "Number(1)");
        assert_eq!(lines[3_001].len() - "Number(1)".len(), 2 * 3_001);
        assert_eq!(lines.last().copied(), Some("    Number(2)"));
    }
}
