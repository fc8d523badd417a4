use crate::ast::ast_node::append_description;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::EnumValueDefinition;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// `enum Color { Red = 1 "Red" ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub span: XidlSourceSpan,
    pub description: Option<StringValue>,
    pub name: Name,
    pub values: Vec<EnumValueDefinition>,
}

#[inherent]
impl AstNode for EnumTypeDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_description(sink, self.description.as_ref(), "");
        sink.push_str("enum ");
        self.name.append_source(sink, None);
        sink.push_str(" {\n");
        for value in &self.values {
            value.append_source(sink, None);
            sink.push('\n');
        }
        sink.push('}');
    }
}
