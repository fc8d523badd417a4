use crate::token::XidlTokenKind;
use crate::token::XidlTriviaToken;
use crate::SmallVec;
use crate::XidlSourceSpan;

/// Trivia storage. Most tokens carry zero or one comment.
pub type XidlTriviaTokenVec<'src> = SmallVec<[XidlTriviaToken<'src>; 2]>;

/// An xidl token with location (span) information and an ordered list of any
/// preceding trivia (comments).
///
/// Trivia is attached to the *following* token, so the parser can call
/// `peek()` and `consume()` without ever seeing a comment.
#[derive(Clone, Debug, PartialEq)]
pub struct XidlToken<'src> {
    /// The kind of token (including Error for lexer errors).
    pub kind: XidlTokenKind<'src>,

    /// Comments that precede this token.
    pub preceding_trivia: XidlTriviaTokenVec<'src>,

    /// The source location span of this token.
    pub span: XidlSourceSpan,
}

impl<'src> XidlToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: XidlTokenKind<'src>, span: XidlSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }
}
