use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// A literal appearing as a field default or an annotation argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    /// A bare identifier, interpreted as a symbol of the slot's enum type.
    EnumSymbol(Name),
}

impl Value {
    pub fn span(&self) -> &XidlSourceSpan {
        match self {
            Value::Int(v) => &v.span,
            Value::Float(v) => &v.span,
            Value::String(v) => &v.span,
            Value::Boolean(v) => &v.span,
            Value::EnumSymbol(v) => &v.span,
        }
    }

    /// A short description of the literal's kind, for error messages.
    pub fn kind_description(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer literal",
            Value::Float(_) => "float literal",
            Value::String(_) => "string literal",
            Value::Boolean(_) => "boolean literal",
            Value::EnumSymbol(_) => "enum symbol",
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match self {
            Value::Int(v) => v.append_source(sink, source),
            Value::Float(v) => v.append_source(sink, source),
            Value::String(v) => v.append_source(sink, source),
            Value::Boolean(v) => v.append_source(sink, source),
            Value::EnumSymbol(v) => v.append_source(sink, source),
        }
    }
}
