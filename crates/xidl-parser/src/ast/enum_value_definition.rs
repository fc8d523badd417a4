use crate::ast::ast_node::append_span_source_slice;
use crate::ast::ast_node::INDENT;
use crate::ast::AstNode;
use crate::ast::IntValue;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// `Red = 1 "Red"`: symbol, discriminant and display name.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub span: XidlSourceSpan,
    pub name: Name,
    /// Guaranteed by the parser to fit in an `i64`.
    pub discriminant: IntValue,
    pub display_name: StringValue,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str(INDENT);
        self.name.append_source(sink, None);
        sink.push_str(" = ");
        self.discriminant.append_source(sink, None);
        sink.push(' ');
        self.display_name.append_source(sink, None);
    }
}
