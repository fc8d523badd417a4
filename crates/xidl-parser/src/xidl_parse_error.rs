use crate::source_snippet;
use crate::XidlErrorNote;
use crate::XidlErrorNotes;
use crate::XidlParseErrorKind;
use crate::XidlSourceSpan;

/// A parse error with location information and contextual notes.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct XidlParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "Expected `:` after field name", "Unclosed `{`"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "unclosed delimiter" errors: the end of input
    span: XidlSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: XidlParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: XidlErrorNotes,
}

impl XidlParseError {
    /// Creates a new parse error with no notes.
    pub fn new(message: impl Into<String>, span: XidlSourceSpan, kind: XidlParseErrorKind) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: XidlErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: XidlSourceSpan,
        kind: XidlParseErrorKind,
        notes: XidlErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: XidlSourceSpan,
        lexer_notes: XidlErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: XidlParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &XidlSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &XidlParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &XidlErrorNotes {
        &self.notes
    }

    /// Adds a general note with a span (pointing to a related location).
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: XidlSourceSpan) {
        self.notes.push(XidlErrorNote::general_with_span(message, span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(XidlErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// See [`source_snippet::format_detailed_report`] for the layout.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        source_snippet::format_detailed_report(&self.message, &self.span, &self.notes, source)
    }

    /// Formats this error as a single-line summary:
    /// `<input>:5:12: error: Expected `:` after field name`
    pub fn format_oneline(&self) -> String {
        source_snippet::format_oneline_report(&self.message, &self.span)
    }
}
