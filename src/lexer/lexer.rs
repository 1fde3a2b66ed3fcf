use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    diagnostics::diagnostics::{Diagnostic, DiagnosticSink, Silent},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenStream, TokenValue, PUNCTUATION_LOOKUP};

/// Called with the text a pattern matched at the lexer's current offset.
pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: digit runs are claimed before identifiers, so an
    // identifier never starts with a digit.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\n\x0B\x0C\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[[:punct:]]").unwrap(), handler: punctuation_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z0-9]+").unwrap(), handler: ident_handler },
    ];
}

pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    /// Byte offset into `source`, always on a char boundary
    pos: usize,
    row: usize,
    col: usize,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, sink: &'a mut dyn DiagnosticSink) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            pos: 0,
            row: 1,
            col: 1,
            sink,
        }
    }

    /// Moves forward `n` bytes, keeping row and column in step with every
    /// character passed over.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.row += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            row: self.row,
            col: self.col,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes `lexeme` and records it as a token of `kind`.
    fn push_token(&mut self, kind: TokenKind, value: TokenValue, lexeme: &str) {
        let start = self.position();
        self.advance_n(lexeme.len());
        let span = Span::new(start, self.position());

        self.push(MK_TOKEN!(kind, value, lexeme.to_string(), span));
    }

    /// Consumes one unrecognised character, records it as an `Error` token
    /// and reports it.
    fn push_error(&mut self, lexeme: &str) {
        self.push_token(TokenKind::Error, TokenValue::None, lexeme);

        let span = self.tokens[self.tokens.len() - 1].span;
        self.sink.report(
            Diagnostic::error(format!("unrecognised character `{}`", lexeme.escape_debug()))
                .with_span(span),
        );
    }

    fn finish(self) -> TokenStream {
        let errors = self.tokens.iter().filter(|t| t.kind == TokenKind::Error).count();
        self.sink.report(Diagnostic::debug(format!(
            "tokenized {} bytes into {} tokens ({} unrecognised)",
            self.source.len(),
            self.tokens.len(),
            errors
        )));

        TokenStream::new(self.tokens)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn punctuation_handler(lexer: &mut Lexer, matched: &str) {
    let kind = matched
        .chars()
        .next()
        .and_then(|c| PUNCTUATION_LOOKUP.get(&c).copied());

    match kind {
        Some(kind) => lexer.push_token(kind, TokenValue::None, matched),
        None => lexer.push_error(matched),
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    // Overflow wraps around instead of failing
    let value = matched.bytes().fold(0u64, |n, digit| {
        n.wrapping_mul(10).wrapping_add(u64::from(digit - b'0'))
    });

    lexer.push_token(TokenKind::Number, TokenValue::Number(value), matched);
}

fn ident_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push_token(TokenKind::Ident, TokenValue::Text(matched.to_string()), matched);
}

/// Tokenizes `source`, discarding diagnostics.
pub fn tokenize(source: &str) -> TokenStream {
    tokenize_with_diagnostics(source, &mut Silent)
}

/// Tokenizes `source` in a single left-to-right pass.
///
/// Never fails: each character no pattern accepts becomes one `Error` token
/// and is reported to `sink`, then scanning resumes at the next character.
pub fn tokenize_with_diagnostics(source: &str, sink: &mut dyn DiagnosticSink) -> TokenStream {
    let mut lex = Lexer::new(source, sink);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                (pattern.handler)(&mut lex, found.as_str());
                matched = true;
                break;
            }
        }

        if !matched {
            if let Some(ch) = lex.at() {
                lex.push_error(&remainder[..ch.len_utf8()]);
            }
        }
    }

    lex.finish()
}
