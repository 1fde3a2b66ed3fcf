//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Numeric literals and wraparound
//! - Identifiers and the digit-first rule
//! - Punctuation
//! - Whitespace and position tracking
//! - Error tokens

use crate::diagnostics::diagnostics::{DiagnosticCollector, Severity};

use super::{
    lexer::{tokenize, tokenize_with_diagnostics},
    tokens::{TokenKind, TokenValue},
};

#[test]
fn test_tokenize_number() {
    let tokens = tokenize("12345");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, TokenValue::Number(12345));
    assert_eq!(tokens[0].lexeme, "12345");
}

#[test]
fn test_tokenize_number_wraps_on_overflow() {
    // u64::MAX + 1
    let tokens = tokenize("18446744073709551616");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].number(), Some(0));
    assert_eq!(tokens[0].lexeme, "18446744073709551616");

    let tokens = tokenize("18446744073709551615");
    assert_eq!(tokens[0].number(), Some(u64::MAX));
}

#[test]
fn test_tokenize_digit_first_rule() {
    let tokens = tokenize("123abc");

    assert_eq!(tokens.kinds(), vec![TokenKind::Number, TokenKind::Ident]);
    assert_eq!(tokens[0].number(), Some(123));
    assert_eq!(tokens[1].text(), Some("abc"));
    assert_eq!(tokens[1].col(), 4);

    let tokens = tokenize("abc123");

    assert_eq!(tokens.kinds(), vec![TokenKind::Ident]);
    assert_eq!(tokens[0].text(), Some("abc123"));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo Bar baz9");

    assert_eq!(tokens.kinds(), vec![TokenKind::Ident; 3]);
    assert_eq!(tokens[0].text(), Some("foo"));
    assert_eq!(tokens[1].text(), Some("Bar"));
    assert_eq!(tokens[2].text(), Some("baz9"));
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("+ - * / : = ( )");

    assert_eq!(
        tokens.kinds(),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Colon,
            TokenKind::Equals,
            TokenKind::LeftParen,
            TokenKind::RightParen,
        ]
    );
    assert!(tokens.iter().all(|t| t.value == TokenValue::None));
}

#[test]
fn test_tokenize_adjacent_punctuation() {
    let tokens = tokenize("(1+2)*3");

    assert_eq!(
        tokens.kinds(),
        vec![
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Asterisk,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_tokenize_unmapped_punctuation_is_error() {
    let tokens = tokenize("1 % 2");

    assert_eq!(tokens.kinds(), vec![TokenKind::Number, TokenKind::Error, TokenKind::Number]);
    assert_eq!(tokens[1].lexeme, "%");
    assert_eq!(tokens[1].col(), 3);
}

#[test]
fn test_tokenize_underscore_is_punctuation() {
    let tokens = tokenize("foo_bar");

    assert_eq!(tokens.kinds(), vec![TokenKind::Ident, TokenKind::Error, TokenKind::Ident]);
    assert_eq!(tokens[1].lexeme, "_");
}

#[test]
fn test_tokenize_each_unknown_character_is_one_error() {
    let tokens = tokenize("@@#");

    assert_eq!(tokens.kinds(), vec![TokenKind::Error; 3]);
    assert_eq!(tokens[0].span.byte_range(), 0..1);
    assert_eq!(tokens[1].span.byte_range(), 1..2);
    assert_eq!(tokens[2].span.byte_range(), 2..3);
}

#[test]
fn test_tokenize_non_ascii_advances_one_char() {
    let tokens = tokenize("1é2\u{1}");

    assert_eq!(
        tokens.kinds(),
        vec![TokenKind::Number, TokenKind::Error, TokenKind::Number, TokenKind::Error]
    );
    assert_eq!(tokens[1].lexeme, "é");
    assert_eq!(tokens[1].span.byte_range(), 1..3);
    assert_eq!(tokens[2].col(), 3);
    assert_eq!(tokens[3].lexeme, "\u{1}");
}

#[test]
fn test_tokenize_whitespace_emits_nothing() {
    let tokens = tokenize(" \t\r\n\x0B\x0C  ");
    assert!(tokens.is_empty());

    let spaced = tokenize("  1   +\t\t2  ");
    let tight = tokenize("1+2");
    assert_eq!(spaced.kinds(), tight.kinds());
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("");
    assert!(tokens.is_empty());
    assert!(!tokens.has_errors());
}

#[test]
fn test_tokenize_tracks_rows_and_columns() {
    let tokens = tokenize("1 +\n  22\n\nfoo");

    assert_eq!((tokens[0].row(), tokens[0].col()), (1, 1));
    assert_eq!((tokens[1].row(), tokens[1].col()), (1, 3));
    assert_eq!((tokens[2].row(), tokens[2].col()), (2, 3));
    assert_eq!((tokens[3].row(), tokens[3].col()), (4, 1));

    assert_eq!(tokens[2].span.end.col, 5);
    assert_eq!(tokens[2].span.byte_range(), 6..8);
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "12 + abc\n* 3 @ (x)";
    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn test_tokenize_reports_unrecognised_characters() {
    let mut sink = DiagnosticCollector::new();
    let tokens = tokenize_with_diagnostics("1 @ 2 $", &mut sink);

    assert_eq!(tokens.errors().count(), 2);

    let errors: Vec<_> = sink.errors().collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "unrecognised character `@`");
    assert_eq!(errors[0].span.map(|s| s.start.col), Some(3));
    assert_eq!(errors[1].message, "unrecognised character `$`");

    let last = sink.diagnostics().last().unwrap();
    assert_eq!(last.severity, Severity::Debug);
    assert!(last.message.contains("4 tokens"));
}

#[test]
fn test_token_display() {
    let tokens = tokenize("7 x + @");

    assert_eq!(tokens[0].to_string(), "Number(7)");
    assert_eq!(tokens[1].to_string(), "Ident(x)");
    assert_eq!(tokens[2].to_string(), "Plus");
    assert_eq!(tokens[3].to_string(), "Error(@)");
}
