#![allow(clippy::module_inception)]

//! Front end of the nocc expression language.
//!
//! Source text goes through [`lexer::lexer::tokenize`] into a
//! [`lexer::tokens::TokenStream`], which [`parser::parser::parse`] turns into
//! an [`ast::ast::Ast`].

use std::fmt::Display;

pub mod ast;
pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

extern crate regex;

/// A location in the source text.
///
/// `offset` is a byte offset, `row` and `col` are 1-based and `col` counts
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            row: 1,
            col: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Half-open range `[start, end)` of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Smallest span covering both `self` and `other`, in either order.
    pub fn to(&self, other: &Span) -> Span {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Span { start, end }
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }
}

/// Tokenizes and parses `source` in one go, reporting into `sink`.
///
/// Lex errors stay in-band in the token stream; the first grammar violation
/// aborts the parse.
pub fn parse_source(
    source: &str,
    sink: &mut dyn diagnostics::diagnostics::DiagnosticSink,
) -> Result<ast::ast::Ast, errors::errors::Error> {
    let tokens = lexer::lexer::tokenize_with_diagnostics(source, sink);
    parser::parser::parse_with_diagnostics(&tokens, sink)
}

#[cfg(test)]
mod tests {
    use super::{Position, Span};

    #[test]
    fn test_span_to() {
        let a = Span::new(
            Position { offset: 0, row: 1, col: 1 },
            Position { offset: 1, row: 1, col: 2 },
        );
        let b = Span::new(
            Position { offset: 4, row: 1, col: 5 },
            Position { offset: 5, row: 1, col: 6 },
        );

        let joined = a.to(&b);
        assert_eq!(joined.byte_range(), 0..5);
        assert_eq!(joined.start.to_string(), "1:1");

        assert_eq!(b.to(&a), joined);
        assert_eq!(a.to(&a), a);
    }
}
