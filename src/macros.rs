//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue payload
/// * `$lexeme` - The exact source text of the token
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, TokenValue::Number(42), "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            lexeme: $lexeme,
            span: $span,
        }
    };
}
