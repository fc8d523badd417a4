use crate::ast::ast_node::append_description;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::operation_definition::append_operation_block;
use crate::ast::AstNode;
use crate::ast::OperationDefinition;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// The document's single unnamed `interface { ... }` block.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDefinition {
    pub span: XidlSourceSpan,
    pub description: Option<StringValue>,
    /// Span of the `interface` keyword.
    pub keyword_span: XidlSourceSpan,
    pub operations: Vec<OperationDefinition>,
}

#[inherent]
impl AstNode for InterfaceDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_description(sink, self.description.as_ref(), "");
        sink.push_str("interface ");
        append_operation_block(sink, &self.operations);
    }
}
