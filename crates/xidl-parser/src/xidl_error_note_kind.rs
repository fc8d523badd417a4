/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XidlErrorNoteKind {
    /// General context about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    /// Example: "`{` opened here" (with span pointing to the opener)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    Help,
}

impl XidlErrorNoteKind {
    /// The prefix used when rendering a note of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            XidlErrorNoteKind::General => "note",
            XidlErrorNoteKind::Help => "help",
        }
    }
}
