use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::XidlSourceSpan;
use inherent::inherent;

/// An integer literal. Only the raw text is kept; the validator decides
/// whether it fits the slot's declared width.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub span: XidlSourceSpan,
    pub raw: String,
}

impl IntValue {
    /// The literal as an `i64`, or `None` if it overflows.
    pub fn as_i64(&self) -> Option<i64> {
        self.raw.parse().ok()
    }

    /// The literal as an `i128`, wide enough for every built-in integer
    /// kind (including `u64`). `None` if it overflows even that.
    pub fn as_i128(&self) -> Option<i128> {
        self.raw.parse().ok()
    }
}

#[inherent]
impl AstNode for IntValue {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str(&self.raw),
        }
    }
}
