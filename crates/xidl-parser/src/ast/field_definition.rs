use crate::ast::ast_node::append_description;
use crate::ast::ast_node::append_span_source_slice;
use crate::ast::ast_node::INDENT;
use crate::ast::Annotation;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::XidlSourceSpan;
use inherent::inherent;

/// A field of an object type:
/// `name?: type = default @annotation(...)`
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub span: XidlSourceSpan,
    pub description: Option<StringValue>,
    pub name: Name,
    /// Span of the `?` directly after the field name, if present.
    pub optional_marker: Option<XidlSourceSpan>,
    pub type_ref: TypeRef,
    pub default_value: Option<Value>,
    pub annotations: Vec<Annotation>,
}

impl FieldDefinition {
    /// Whether the field is optional via either the name marker or the
    /// type's `?`.
    pub fn is_optional(&self) -> bool {
        self.optional_marker.is_some() || self.type_ref.is_optional()
    }
}

#[inherent]
impl AstNode for FieldDefinition {
    /// In canonical mode the field is written on one line, indented for its
    /// enclosing `type` block.
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        append_description(sink, self.description.as_ref(), INDENT);
        sink.push_str(INDENT);
        self.name.append_source(sink, None);
        if self.optional_marker.is_some() {
            sink.push('?');
        }
        sink.push_str(": ");
        self.type_ref.append_source(sink, None);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink, None);
        }
        for annotation in &self.annotations {
            sink.push(' ');
            annotation.append_source(sink, None);
        }
    }
}
