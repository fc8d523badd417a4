use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::XidlSourceSpan;
use inherent::inherent;

/// The argument name a shorthand annotation argument is normalized to:
/// `@max(5)` is stored exactly like `@max(value: 5)`.
pub const SHORTHAND_ARGUMENT_NAME: &str = "value";

/// A field annotation such as `@deprecated` or `@range(min: 0, max: 10)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub span: XidlSourceSpan,
    pub name: Name,
    pub arguments: Vec<AnnotationArgument>,
}

impl Annotation {
    /// Looks up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&AnnotationArgument> {
        self.arguments.iter().find(|arg| arg.name.value == name)
    }
}

#[inherent]
impl AstNode for Annotation {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push('@');
        self.name.append_source(sink, None);
        if self.arguments.is_empty() {
            return;
        }
        sink.push('(');
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                sink.push_str(", ");
            }
            arg.append_source(sink, None);
        }
        sink.push(')');
    }
}

/// One `name: literal` argument of an annotation.
///
/// For a shorthand argument (`@max(5)`) the name is
/// [`SHORTHAND_ARGUMENT_NAME`] and `span`/`name.span` cover the literal.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationArgument {
    pub span: XidlSourceSpan,
    pub name: Name,
    pub value: Value,
}

#[inherent]
impl AstNode for AnnotationArgument {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        self.name.append_source(sink, None);
        sink.push_str(": ");
        self.value.append_source(sink, None);
    }
}
