//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::ast::Ast,
    diagnostics::diagnostics::{Diagnostic, DiagnosticSink, Silent},
    errors::errors::{Error, ErrorImpl, Expected},
    lexer::tokens::{Token, TokenKind, TokenStream},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The parser borrows the token stream and never modifies it. Its cursor
/// only moves forward and never passes the end of the stream.
pub struct Parser<'a> {
    /// The token stream being parsed
    tokens: &'a TokenStream,
    /// Index of the next unconsumed token
    pos: usize,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Where parse progress is reported
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser with empty lookup tables.
    ///
    /// Call [`create_token_lookups`] before parsing expressions.
    pub fn new(tokens: &'a TokenStream, sink: &'a mut dyn DiagnosticSink) -> Self {
        Parser {
            tokens,
            pos: 0,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            sink,
        }
    }

    /// Returns the current token without advancing, `None` at the end.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances past the current token and returns it.
    ///
    /// At the end of the stream the cursor stays put and `None` is returned.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token if it has `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, or an error naming `expected` and what was found
    /// instead. The cursor does not move on failure.
    pub fn expect(
        &mut self,
        expected_kind: TokenKind,
        expected: Expected,
    ) -> Result<&'a Token, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Index of the next unconsumed token.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// No binding power is recorded, so a token that only starts expressions
    /// ends the expression before it.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Zero-width span just past the last token.
    pub fn end_span(&self) -> Span {
        let end = self
            .tokens
            .last()
            .map(|token| token.span.end)
            .unwrap_or_default();
        Span::new(end, end)
    }

    pub fn unexpected_token(&self, token: &Token, expected: Expected) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: token.lexeme.clone(),
                kind: token.kind,
            },
            token.span,
        )
    }

    pub fn unexpected_end(&self, expected: Expected) -> Error {
        Error::new(ErrorImpl::UnexpectedEndOfInput { expected }, self.end_span())
    }

    /// Error for the current token, or for the end of input if there is none.
    pub fn unexpected(&self, expected: Expected) -> Error {
        match self.current_token() {
            Some(token) => self.unexpected_token(token, expected),
            None => self.unexpected_end(expected),
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }
}

/// Parses a token stream into an Abstract Syntax Tree, discarding
/// diagnostics.
pub fn parse(tokens: &TokenStream) -> Result<Ast, Error> {
    parse_with_diagnostics(tokens, &mut Silent)
}

/// Parses a token stream into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until the stream is
/// exhausted. The first grammar violation aborts the whole parse; no partial
/// tree is returned. The error itself is not reported to `sink`, the caller
/// decides what to do with it.
pub fn parse_with_diagnostics(
    tokens: &TokenStream,
    sink: &mut dyn DiagnosticSink,
) -> Result<Ast, Error> {
    let mut parser = Parser::new(tokens, sink);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        let before = parser.pos();
        let stmt = parse_stmt(&mut parser)?;
        debug_assert!(parser.pos() > before, "statement consumed no tokens");

        let span = *stmt.get_span();
        parser.report(
            Diagnostic::debug(format!(
                "parsed statement at {} ({} tokens)",
                span.start,
                parser.pos() - before
            ))
            .with_span(span),
        );
        body.push(stmt);
    }

    Ok(Ast {
        body,
        span: Span::new(Position::start(), parser.end_span().end),
    })
}
