use crate::ast::ast_node::append_description;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// `type Customer { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub span: XidlSourceSpan,
    pub description: Option<StringValue>,
    pub name: Name,
    pub fields: Vec<FieldDefinition>,
}

#[inherent]
impl AstNode for ObjectTypeDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_description(sink, self.description.as_ref(), "");
        sink.push_str("type ");
        self.name.append_source(sink, None);
        sink.push_str(" {\n");
        for field in &self.fields {
            field.append_source(sink, None);
            sink.push('\n');
        }
        sink.push('}');
    }
}
