use std::fmt::Display;

use thiserror::Error;

use crate::{diagnostics::diagnostics::Diagnostic, lexer::tokens::TokenKind, Position, Span};

/// What a grammar rule was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Number,
    Operator,
    Expression,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Number => write!(f, "a number"),
            Expected::Operator => write!(f, "an operator"),
            Expected::Expression => write!(f, "an expression"),
        }
    }
}

/// A parse failure and the span it refers to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {}", .span.start)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { kind, found, .. } => match kind {
                TokenKind::Error => ErrorTip::Suggestion(format!(
                    "`{}` is not a valid character",
                    found.escape_debug()
                )),
                TokenKind::Colon | TokenKind::Equals => ErrorTip::Suggestion(format!(
                    "`{}` is reserved and cannot appear in an expression",
                    found
                )),
                TokenKind::Ident => ErrorTip::Suggestion(String::from(
                    "identifiers are not expressions, only number literals are",
                )),
                TokenKind::LeftParen | TokenKind::RightParen => ErrorTip::Suggestion(
                    String::from("parentheses are not supported in expressions"),
                ),
                TokenKind::Plus | TokenKind::Minus | TokenKind::Asterisk | TokenKind::Slash => {
                    ErrorTip::Suggestion(String::from(
                        "an operator needs a number on both sides",
                    ))
                }
                TokenKind::Number => ErrorTip::None,
            },
            ErrorImpl::UnexpectedEndOfInput { .. } => ErrorTip::Suggestion(String::from(
                "the input ends in the middle of an expression",
            )),
        }
    }

    /// Converts the error into a diagnostic pointing at its span, with the
    /// tip (if any) attached as a note.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.internal_error.to_string()).with_span(self.span);

        match self.get_tip() {
            ErrorTip::None => diagnostic,
            ErrorTip::Suggestion(tip) => diagnostic.with_note(tip),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected token `{}` ({kind}), expected {expected}", .found.escape_debug())]
    UnexpectedToken {
        expected: Expected,
        found: String,
        kind: TokenKind,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: Expected },
}
