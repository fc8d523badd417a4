use crate::ast::ast_node::append_span_source_slice;
use crate::ast::AstNode;
use crate::ast::EnumTypeDefinition;
use crate::ast::InterfaceDefinition;
use crate::ast::Name;
use crate::ast::ObjectTypeDefinition;
use crate::ast::RoleDefinition;
use crate::ast::ScalarAliasDefinition;
use crate::ast::StringValue;
use crate::XidlSourceSpan;
use inherent::inherent;

/// Root node of a parsed (not yet validated) document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub span: XidlSourceSpan,
    pub namespace: Option<NamespaceDeclaration>,
    /// Top-level declarations in source order.
    pub definitions: Vec<Definition>,
}

impl Document {
    /// The document's `interface` block, if it declares one.
    pub fn interface(&self) -> Option<&InterfaceDefinition> {
        self.definitions.iter().find_map(|def| match def {
            Definition::Interface(interface) => Some(interface),
            _ => None,
        })
    }
}

#[inherent]
impl AstNode for Document {
    /// In canonical mode, declarations are separated by a blank line and the
    /// output ends with a newline.
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        let mut first = true;
        if let Some(namespace) = &self.namespace {
            namespace.append_source(sink, None);
            sink.push('\n');
            first = false;
        }
        for definition in &self.definitions {
            if !first {
                sink.push('\n');
            }
            definition.append_source(sink, None);
            sink.push('\n');
            first = false;
        }
    }
}

/// `namespace "acme.customers"`
#[derive(Clone, Debug, PartialEq)]
pub struct NamespaceDeclaration {
    pub span: XidlSourceSpan,
    pub name: StringValue,
}

#[inherent]
impl AstNode for NamespaceDeclaration {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(src) = source {
            append_span_source_slice(&self.span, sink, src);
            return;
        }
        sink.push_str("namespace ");
        self.name.append_source(sink, None);
    }
}

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    ScalarAlias(ScalarAliasDefinition),
    ObjectType(ObjectTypeDefinition),
    Enum(EnumTypeDefinition),
    Interface(InterfaceDefinition),
    Role(RoleDefinition),
}

impl Definition {
    pub fn span(&self) -> &XidlSourceSpan {
        match self {
            Definition::ScalarAlias(def) => &def.span,
            Definition::ObjectType(def) => &def.span,
            Definition::Enum(def) => &def.span,
            Definition::Interface(def) => &def.span,
            Definition::Role(def) => &def.span,
        }
    }

    /// The declared name. `None` for the unnamed interface block.
    pub fn name(&self) -> Option<&Name> {
        match self {
            Definition::ScalarAlias(def) => Some(&def.name),
            Definition::ObjectType(def) => Some(&def.name),
            Definition::Enum(def) => Some(&def.name),
            Definition::Interface(_) => None,
            Definition::Role(def) => Some(&def.name),
        }
    }

    /// The keyword introducing this kind of declaration.
    pub fn keyword(&self) -> &'static str {
        match self {
            Definition::ScalarAlias(_) => "scalar",
            Definition::ObjectType(_) => "type",
            Definition::Enum(_) => "enum",
            Definition::Interface(_) => "interface",
            Definition::Role(_) => "role",
        }
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn append_source(&self, sink: &mut String, source: Option<&str>) {
        match self {
            Definition::ScalarAlias(def) => def.append_source(sink, source),
            Definition::ObjectType(def) => def.append_source(sink, source),
            Definition::Enum(def) => def.append_source(sink, source),
            Definition::Interface(def) => def.append_source(sink, source),
            Definition::Role(def) => def.append_source(sink, source),
        }
    }
}
