use crate::XidlSourceSpan;
use std::borrow::Cow;

/// A "trivia token" is a token that doesn't affect parsing but is still
/// preserved for tooling (formatters, doc extractors).
#[derive(Clone, Debug, PartialEq)]
pub enum XidlTriviaToken<'src> {
    /// A line comment starting with `//` or `#` and running to the end of the
    /// line.
    Comment {
        /// The comment text, excluding the leading `//` or `#`.
        value: Cow<'src, str>,
        /// The source location of the comment, including its marker.
        span: XidlSourceSpan,
    },
}

impl<'src> XidlTriviaToken<'src> {
    pub fn span(&self) -> &XidlSourceSpan {
        match self {
            XidlTriviaToken::Comment { span, .. } => span,
        }
    }
}
