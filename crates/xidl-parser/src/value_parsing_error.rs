use crate::XidlStringParsingError;

/// Errors that occur when converting raw literal text to a semantic value
/// during parsing.
///
/// Numeric defaults are classified later against their field's declared
/// type; the parser itself only needs to interpret enum discriminants and
/// string contents.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// Invalid string literal (bad escape sequence, unterminated, etc.).
    #[error("Invalid string: {0}")]
    String(#[from] XidlStringParsingError),

    /// Integer literal that does not fit the target integer width.
    #[error("Invalid integer: {0}")]
    Int(String),
}
