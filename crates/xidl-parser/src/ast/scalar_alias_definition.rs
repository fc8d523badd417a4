use crate::ast::ast_node::append_description;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// `scalar CustomerId = u64`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarAliasDefinition {
    pub span: XidlSourceSpan,
    pub description: Option<StringValue>,
    pub name: Name,
    pub aliased_type: Name,
}

#[inherent]
impl AstNode for ScalarAliasDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_description(sink, self.description.as_ref(), "");
        sink.push_str("scalar ");
        self.name.append_source(sink, None);
        sink.push_str(" = ");
        self.aliased_type.append_source(sink, None);
    }
}
