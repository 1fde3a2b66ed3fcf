//! Diagnostic reporting for the front end.
//!
//! The lexer and parser report through a [`diagnostics::DiagnosticSink`]
//! handed to them by the caller instead of logging globally. Sinks:
//!
//! - `Silent` drops everything
//! - `DiagnosticCollector` keeps diagnostics for later inspection
//! - `TerminalEmitter` renders them with source snippets via codespan-reporting

pub mod diagnostics;
