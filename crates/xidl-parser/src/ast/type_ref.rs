use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::XidlSourceSpan;
use inherent::inherent;

/// A type reference: a name, a list `[T]`, a map `{K: V}`, or an optional
/// `T?` wrapping one of those.
///
/// The grammar allows at most one `?` per nesting level, so an `Optional`
/// never directly wraps another `Optional`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    Named(NamedTypeRef),
    List(ListTypeRef),
    Map(MapTypeRef),
    Optional(OptionalTypeRef),
}

impl TypeRef {
    pub fn span(&self) -> &XidlSourceSpan {
        match self {
            TypeRef::Named(t) => &t.span,
            TypeRef::List(t) => &t.span,
            TypeRef::Map(t) => &t.span,
            TypeRef::Optional(t) => &t.span,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeRef::Optional(_))
    }

    /// The name if this is a bare `Named` reference.
    pub fn as_named(&self) -> Option<&NamedTypeRef> {
        match self {
            TypeRef::Named(named) => Some(named),
            _ => None,
        }
    }

    /// This reference with a top-level `?` peeled off.
    pub fn strip_optional(&self) -> &TypeRef {
        match self {
            TypeRef::Optional(opt) => &opt.inner,
            other => other,
        }
    }
}

#[inherent]
impl AstNode for TypeRef {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match self {
            TypeRef::Named(t) => t.append_source(sink, source),
            TypeRef::List(t) => t.append_source(sink, source),
            TypeRef::Map(t) => t.append_source(sink, source),
            TypeRef::Optional(t) => t.append_source(sink, source),
        }
    }
}

/// A reference to a built-in scalar or a declared type by name.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeRef {
    pub span: XidlSourceSpan,
    pub name: Name,
}

#[inherent]
impl AstNode for NamedTypeRef {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match source {
            Some(src) => append_span_source_slice(&self.span, sink, src),
            None => self.name.append_source(sink, None),
        }
    }
}

/// `[element]`
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeRef {
    pub span: XidlSourceSpan,
    pub element: Box<TypeRef>,
}

#[inherent]
impl AstNode for ListTypeRef {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push('[');
        self.element.append_source(sink, None);
        sink.push(']');
    }
}

/// `{key: value}`
#[derive(Clone, Debug, PartialEq)]
pub struct MapTypeRef {
    pub span: XidlSourceSpan,
    pub key: Box<TypeRef>,
    pub value: Box<TypeRef>,
}

#[inherent]
impl AstNode for MapTypeRef {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push('{');
        self.key.append_source(sink, None);
        sink.push_str(": ");
        self.value.append_source(sink, None);
        sink.push('}');
    }
}

/// `inner?`
#[derive(Clone, Debug, PartialEq)]
pub struct OptionalTypeRef {
    pub span: XidlSourceSpan,
    pub inner: Box<TypeRef>,
}

#[inherent]
impl AstNode for OptionalTypeRef {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        self.inner.append_source(sink, None);
        sink.push('?');
    }
}
