use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::XidlSourceSpan;
use inherent::inherent;

/// An identifier: a declaration, field, parameter, enum value, annotation or
/// type name.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub span: XidlSourceSpan,
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>, span: XidlSourceSpan) -> Self {
        Self {
            span,
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str(&self.value),
        }
    }
}
