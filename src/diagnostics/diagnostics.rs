use std::fmt;

use codespan_reporting::diagnostic::{
    Diagnostic as CSDiagnostic, Label as CSLabel, Severity as CSSeverity,
};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::{
    self,
    termcolor::{ColorChoice, StandardStream, WriteColor},
    Config,
};

use crate::Span;

/// Severity level of a diagnostic, ordered from least to most severe.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Severity {
    /// Trace output, hidden unless the host asks for it.
    Debug,
    Note,
    Warning,
    /// The input is malformed.
    Error,
}

impl Severity {
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl From<Severity> for CSSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            // codespan has no trace level; debug output renders as a note
            Severity::Debug | Severity::Note => CSSeverity::Note,
            Severity::Warning => CSSeverity::Warning,
            Severity::Error => CSSeverity::Error,
        }
    }
}

/// A message about the source, optionally pointing at a span of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            span: None,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Severity::Debug, message)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    fn to_codespan(&self, file_id: usize) -> CSDiagnostic<usize> {
        let message = match self.severity {
            Severity::Debug => format!("[debug] {}", self.message),
            _ => self.message.clone(),
        };

        let mut diagnostic = CSDiagnostic::new(self.severity.into())
            .with_message(message)
            .with_notes(self.notes.clone());

        if let Some(span) = self.span {
            diagnostic = diagnostic.with_labels(vec![CSLabel::primary(file_id, span.byte_range())]);
        }

        diagnostic
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} at {}: {}", self.severity, span.start, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Receives the diagnostics produced while tokenizing and parsing.
///
/// The lexer and parser never print anything themselves; the host decides
/// where diagnostics go by choosing the sink.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Drops every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl DiagnosticSink for Silent {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Keeps every diagnostic in report order.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Takes all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Renders diagnostics against one source file through codespan-reporting.
///
/// The source is any string-like `S`, so a borrowed `&str` avoids copying
/// the file. Diagnostics below `min_severity` are dropped.
pub struct TerminalEmitter<W: WriteColor, S: AsRef<str> = String> {
    writer: W,
    files: SimpleFiles<String, S>,
    file_id: usize,
    config: Config,
    min_severity: Severity,
}

impl<S: AsRef<str>> TerminalEmitter<StandardStream, S> {
    /// Emitter writing to stderr.
    pub fn stderr(file_name: impl Into<String>, source: S, color: ColorChoice) -> Self {
        TerminalEmitter::new(StandardStream::stderr(color), file_name, source)
    }
}

impl<W: WriteColor, S: AsRef<str>> TerminalEmitter<W, S> {
    pub fn new(writer: W, file_name: impl Into<String>, source: S) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(file_name.into(), source);

        TerminalEmitter {
            writer,
            files,
            file_id,
            config: Config::default(),
            min_severity: Severity::Note,
        }
    }

    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Consumes the emitter and hands back its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: WriteColor, S: AsRef<str>> DiagnosticSink for TerminalEmitter<W, S> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity < self.min_severity {
            return;
        }

        let rendered = diagnostic.to_codespan(self.file_id);
        if let Err(err) = term::emit(&mut self.writer, &self.config, &self.files, &rendered) {
            eprintln!("failed to emit diagnostic ({}): {}", err, diagnostic);
        }
    }
}
