use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::TypeRef;
use crate::XidlSourceSpan;
use inherent::inherent;

/// `name: type` in an operation's parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterDefinition {
    pub span: XidlSourceSpan,
    pub name: Name,
    pub type_ref: TypeRef,
}

#[inherent]
impl AstNode for ParameterDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        self.name.append_source(sink, None);
        sink.push_str(": ");
        self.type_ref.append_source(sink, None);
    }
}
