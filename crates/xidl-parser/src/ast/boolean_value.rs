use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::XidlSourceSpan;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub span: XidlSourceSpan,
    pub value: bool,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => sink.push_str(if self.value { "true" } else { "false" }),
        }
    }
}
