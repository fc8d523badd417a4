use crate::token::XidlToken;

/// Marker trait for [`XidlToken`] lexers (iterators that generate
/// [`XidlToken`]).
///
/// [`StrXidlTokenSource`](crate::token_source::StrXidlTokenSource) lexes a
/// `&str`; tests and tools may feed the parser any other iterator of tokens
/// (e.g. a pre-lexed `Vec<XidlToken>`).
///
/// All lookahead, buffering, and peeking is handled by `XidlTokenStream`.
///
/// Lexers are responsible for:
/// - Skipping whitespace
/// - Accumulating trivia (comments) and attaching it to the next token
/// - Emitting [`XidlTokenKind::Error`](crate::token::XidlTokenKind::Error)
///   for lexer errors
/// - Emitting a final token with
///   [`XidlTokenKind::Eof`](crate::token::XidlTokenKind::Eof) carrying any
///   trailing trivia
pub trait XidlTokenSource<'src>: Iterator<Item = XidlToken<'src>> {}

impl<'src, T> XidlTokenSource<'src> for T where T: Iterator<Item = XidlToken<'src>> {}
