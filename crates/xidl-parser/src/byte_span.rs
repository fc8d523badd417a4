/// Compact byte-offset span.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text. Both offsets are 0-based.
///
/// `u32` offsets support documents up to 4 GiB, far beyond any interface
/// definition a developer would write by hand.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ByteSpan {
    /// Byte offset of the first byte (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (exclusive).
    pub end: u32,
}

impl ByteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `source` covered by this span, if the span lies
    /// within `source` on character boundaries.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start as usize..self.end as usize)
    }
}
