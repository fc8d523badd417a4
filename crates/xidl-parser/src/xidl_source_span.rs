use crate::ByteSpan;
use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
///
/// Both ends carry line, column and byte offset so that editors and CLIs can
/// underline the covered text.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct XidlSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl XidlSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
        }
    }

    /// Returns a span covering both `self` and `other`, assuming `self`
    /// starts first.
    pub fn to(&self, other: &XidlSourceSpan) -> XidlSourceSpan {
        XidlSourceSpan::new(
            self.start_inclusive.clone(),
            other.end_exclusive.clone(),
        )
    }

    /// Extracts a compact `ByteSpan` from this span's byte offsets,
    /// discarding line/column information.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan {
            start: self.start_inclusive.byte_offset() as u32,
            end: self.end_exclusive.byte_offset() as u32,
        }
    }
}
