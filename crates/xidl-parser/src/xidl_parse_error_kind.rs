use crate::ReservedNameContext;
use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context (suggestions, explanations) belongs in the
/// `notes` field of `XidlParseError`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum XidlParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// type User { name u64 }
    ///                  ^^^ expected `:`, found `u64`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g., `[":", "?"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when EOF was encountered.
        expected: Vec<String>,
    },

    /// The parser encountered an `XidlTokenKind::Error` token. The lexer's
    /// message and notes are preserved in the parent `XidlParseError`.
    #[error("lexer error")]
    LexerError,

    /// A delimiter was opened but EOF was reached before the matching
    /// closing delimiter. The opening location is included in the notes.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        /// The unclosed delimiter (e.g., `"{"`, `"["`, `"("`).
        delimiter: String,
    },

    /// A literal could not be interpreted (e.g. an enum discriminant outside
    /// the `i64` range).
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// Reserved name used in a context where it's not allowed.
    ///
    /// # Example
    /// ```text
    /// type u64 { id: string }
    ///      ^^^ `u64` is a built-in scalar
    /// ```
    #[error("reserved name: `{name}`")]
    ReservedName {
        /// The reserved name that was used.
        name: String,
        /// The context where this name is not allowed.
        context: ReservedNameContext,
    },

    /// A document declared more than one `interface` block.
    #[error("duplicate interface")]
    DuplicateInterface,

    /// Invalid syntax that doesn't fit other categories. The specific error
    /// is described in `XidlParseError.message`.
    #[error("invalid syntax")]
    InvalidSyntax,
}
