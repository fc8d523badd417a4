/// A single position within an xidl document, with dual column tracking.
///
/// This is a pure data struct with no mutation methods. Token sources are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: Optional UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// # Dual Column Tracking
///
/// - **`col_utf8`** (always available) advances by 1 per character,
///   regardless of its byte length. This matches what most editors display
///   as "column".
/// - **`col_utf16`** (optional) advances by the character's UTF-16 length
///   (1 or 2 code units) and lines up with LSP positions. It is `None` when a
///   token source cannot provide it.
///
/// For ASCII text both columns are equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 0-based line number (0 = first line)
    /// - `col_utf8`: 0-based UTF-8 character count within current line
    /// - `col_utf16`: 0-based UTF-16 code unit offset within current line,
    ///   or `None` if not available
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The position of the very first byte of a document.
    pub fn zero() -> Self {
        Self::new(0, 0, Some(0), 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line,
    /// if available.
    ///
    /// For LSP compatibility, prefer this method when available.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Returns the 1-based `(line, column)` pair used when rendering
    /// positions for humans.
    pub fn to_display_line_col(&self) -> (usize, usize) {
        (self.line + 1, self.col_utf8 + 1)
    }
}
