use crate::ast::ast_node::append_description;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::operation_definition::append_operation_block;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::OperationDefinition;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// `role Admin { ... }`: a named, independent group of operations.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleDefinition {
    pub span: XidlSourceSpan,
    pub description: Option<StringValue>,
    pub name: Name,
    pub operations: Vec<OperationDefinition>,
}

#[inherent]
impl AstNode for RoleDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_description(sink, self.description.as_ref(), "");
        sink.push_str("role ");
        self.name.append_source(sink, None);
        sink.push(' ');
        append_operation_block(sink, &self.operations);
    }
}
