use crate::ast::ast_node::append_description;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::ast_node::INDENT;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::ParameterDefinition;
use crate::ast::StringValue;
use crate::ast::TypeRef;
use crate::XidlSourceSpan;
use inherent::inherent;

/// How an operation receives its parameters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    /// `name(a: A, b: B): R`; parameters arrive wrapped in a request object.
    Function,
    /// `name{a: A}: R`; the single parameter is passed without a wrapper.
    Unary,
}

/// What an operation returns.
#[derive(Clone, Debug, PartialEq)]
pub enum ReturnType {
    /// The `void` keyword.
    Void(XidlSourceSpan),
    Type(TypeRef),
}

impl ReturnType {
    pub fn span(&self) -> &XidlSourceSpan {
        match self {
            ReturnType::Void(span) => span,
            ReturnType::Type(type_ref) => type_ref.span(),
        }
    }
}

/// An operation inside an `interface` or `role` block.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub span: XidlSourceSpan,
    pub description: Option<StringValue>,
    pub name: Name,
    pub kind: OperationKind,
    pub parameters: Vec<ParameterDefinition>,
    pub return_type: ReturnType,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_description(sink, self.description.as_ref(), INDENT);
        sink.push_str(INDENT);
        self.name.append_source(sink, None);
        let (open, close) = match self.kind {
            OperationKind::Function => ('(', ')'),
            OperationKind::Unary => ('{', '}'),
        };
        sink.push(open);
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                sink.push_str(", ");
            }
            param.append_source(sink, None);
        }
        sink.push(close);
        sink.push_str(": ");
        match &self.return_type {
            ReturnType::Void(_) => sink.push_str("void"),
            ReturnType::Type(type_ref) => type_ref.append_source(sink, None),
        }
    }
}

/// Canonical mode: writes `{`, one operation per line, then `}`.
pub(crate) fn append_operation_block(sink: &mut String, operations: &[OperationDefinition]) {
    sink.push_str("{\n");
    for operation in operations {
        operation.append_source(sink, None);
        sink.push('\n');
    }
    sink.push('}');
}
