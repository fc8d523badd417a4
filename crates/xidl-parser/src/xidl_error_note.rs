use crate::SmallVec;
use crate::XidlErrorNoteKind;
use crate::XidlSourceSpan;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanatory context,
/// actionable suggestions, or related source locations (e.g. where a
/// delimiter was opened, or where a name was first declared).
#[derive(Debug, Clone, PartialEq)]
pub struct XidlErrorNote {
    pub kind: XidlErrorNoteKind,
    pub message: String,

    /// Optional span pointing to a related location.
    ///
    /// When present, the note is rendered with a source snippet pointing to
    /// this location.
    pub span: Option<XidlSourceSpan>,
}

impl XidlErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: XidlErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    pub fn general_with_span(message: impl Into<String>, span: XidlSourceSpan) -> Self {
        Self {
            kind: XidlErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: XidlErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }

    pub fn help_with_span(message: impl Into<String>, span: XidlSourceSpan) -> Self {
        Self {
            kind: XidlErrorNoteKind::Help,
            message: message.into(),
            span: Some(span),
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes.
pub type XidlErrorNotes = SmallVec<[XidlErrorNote; 2]>;
