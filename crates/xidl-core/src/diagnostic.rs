use crate::ValidationError;
use xidl_parser::source_snippet;
use xidl_parser::XidlErrorNotes;
use xidl_parser::XidlParseError;
use xidl_parser::XidlParseErrorKind;
use xidl_parser::XidlSourceSpan;

/// Category of a [`Diagnostic`], for callers that react to specific
/// failures programmatically.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DiagnosticKind {
    LexError,
    SyntaxError,
    DuplicateDeclarationError,
    UnknownTypeError,
    InvalidMapKeyError,
    DuplicateFieldError,
    DuplicateEnumValueError,
    DuplicateOperationError,
    DuplicateEnumDiscriminantError,
    DefaultValueTypeMismatchError,
    DuplicateParameterError,
    DuplicateAnnotationArgumentError,
    InconsistentOptionalMarkerError,
    InvalidScalarAliasError,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LexError => "LexError",
            Self::SyntaxError => "SyntaxError",
            Self::DuplicateDeclarationError => "DuplicateDeclarationError",
            Self::UnknownTypeError => "UnknownTypeError",
            Self::InvalidMapKeyError => "InvalidMapKeyError",
            Self::DuplicateFieldError => "DuplicateFieldError",
            Self::DuplicateEnumValueError => "DuplicateEnumValueError",
            Self::DuplicateOperationError => "DuplicateOperationError",
            Self::DuplicateEnumDiscriminantError => "DuplicateEnumDiscriminantError",
            Self::DefaultValueTypeMismatchError => "DefaultValueTypeMismatchError",
            Self::DuplicateParameterError => "DuplicateParameterError",
            Self::DuplicateAnnotationArgumentError => "DuplicateAnnotationArgumentError",
            Self::InconsistentOptionalMarkerError => "InconsistentOptionalMarkerError",
            Self::InvalidScalarAliasError => "InvalidScalarAliasError",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexer, parser or validator failure, reported in one uniform shape.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    notes: XidlErrorNotes,
    span: XidlSourceSpan,
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn notes(&self) -> &XidlErrorNotes {
        &self.notes
    }

    pub fn span(&self) -> &XidlSourceSpan {
        &self.span
    }

    /// Editor-style report with a source snippet and caret underline when
    /// `source` is given.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        source_snippet::format_detailed_report(&self.message, &self.span, &self.notes, source)
    }

    /// `<input>:line:col: error: message`
    pub fn format_oneline(&self) -> String {
        source_snippet::format_oneline_report(&self.message, &self.span)
    }
}

impl From<&XidlParseError> for Diagnostic {
    fn from(error: &XidlParseError) -> Self {
        let kind = match error.kind() {
            XidlParseErrorKind::LexerError => DiagnosticKind::LexError,
            _ => DiagnosticKind::SyntaxError,
        };
        Self {
            kind,
            message: error.message().to_string(),
            notes: error.notes().clone(),
            span: error.span().clone(),
        }
    }
}

impl From<XidlParseError> for Diagnostic {
    fn from(error: XidlParseError) -> Self {
        Self::from(&error)
    }
}

impl From<&ValidationError> for Diagnostic {
    fn from(error: &ValidationError) -> Self {
        Self {
            kind: error.diagnostic_kind(),
            message: error.to_string(),
            notes: error.notes(),
            span: error.span().clone(),
        }
    }
}

impl From<ValidationError> for Diagnostic {
    fn from(error: ValidationError) -> Self {
        Self::from(&error)
    }
}
