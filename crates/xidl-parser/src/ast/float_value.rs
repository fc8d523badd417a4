use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::XidlSourceSpan;
use inherent::inherent;

/// A float literal, kept as raw text.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub span: XidlSourceSpan,
    pub raw: String,
}

impl FloatValue {
    /// The literal as an `f64`. Out-of-range literals parse to infinity.
    pub fn as_f64(&self) -> Option<f64> {
        self.raw.parse().ok()
    }
}

#[inherent]
impl AstNode for FloatValue {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str(&self.raw),
        }
    }
}
