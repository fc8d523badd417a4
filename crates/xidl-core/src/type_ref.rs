use crate::BuiltinScalar;
use crate::Declaration;
use crate::DerefByNameError;
use crate::Document;
use crate::EnumType;
use crate::NamedRef;
use crate::ObjectType;
use crate::ScalarAlias;
use xidl_parser::XidlSourceSpan;

/// The resolved type of a field, parameter or return value.
///
/// Unlike the parser's unresolved type references, every `Named` leaf here
/// is known to resolve, and [`NamedTypeRef::target()`] says to what.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    Named(NamedTypeRef),
    List {
        element: Box<TypeRef>,
        ref_location: XidlSourceSpan,
    },
    Map {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
        ref_location: XidlSourceSpan,
    },
    Optional {
        inner: Box<TypeRef>,
        ref_location: XidlSourceSpan,
    },
}

impl TypeRef {
    /// Where this type reference was written in the document.
    pub fn ref_location(&self) -> &XidlSourceSpan {
        match self {
            TypeRef::Named(named) => named.ref_location(),
            TypeRef::List { ref_location, .. }
            | TypeRef::Map { ref_location, .. }
            | TypeRef::Optional { ref_location, .. } => ref_location,
        }
    }

    pub fn as_named(&self) -> Option<&NamedTypeRef> {
        if let TypeRef::Named(named) = self {
            Some(named)
        } else {
            None
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeRef::Optional { .. })
    }

    /// This type with one top-level `?` peeled off.
    pub fn strip_optional(&self) -> &TypeRef {
        match self {
            TypeRef::Optional { inner, .. } => inner,
            other => other,
        }
    }

    /// Every named leaf of this type, left to right (map keys before map
    /// values).
    pub fn named_type_refs(&self) -> Vec<&NamedTypeRef> {
        let mut refs = vec![];
        self.collect_named_type_refs(&mut refs);
        refs
    }

    fn collect_named_type_refs<'a>(&'a self, refs: &mut Vec<&'a NamedTypeRef>) {
        match self {
            TypeRef::Named(named) => refs.push(named),
            TypeRef::List { element, .. } => element.collect_named_type_refs(refs),
            TypeRef::Map { key, value, .. } => {
                key.collect_named_type_refs(refs);
                value.collect_named_type_refs(refs);
            },
            TypeRef::Optional { inner, .. } => inner.collect_named_type_refs(refs),
        }
    }

    /// Renders this type the way it would be written in a document.
    pub fn to_xidl_string(&self) -> String {
        match self {
            TypeRef::Named(named) => named.name().to_string(),
            TypeRef::List { element, .. } => format!("[{}]", element.to_xidl_string()),
            TypeRef::Map { key, value, .. } => format!(
                "{{{}: {}}}",
                key.to_xidl_string(),
                value.to_xidl_string(),
            ),
            TypeRef::Optional { inner, .. } => format!("{}?", inner.to_xidl_string()),
        }
    }
}

/// What a named type reference resolved to during validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NamedTypeTarget {
    Builtin(BuiltinScalar),
    /// A declared scalar alias, together with the built-in it stands for.
    ScalarAlias(BuiltinScalar),
    ObjectType,
    Enum,
}

impl NamedTypeTarget {
    /// The built-in scalar kind behind this target, looking through scalar
    /// aliases.
    pub fn scalar(&self) -> Option<BuiltinScalar> {
        match self {
            NamedTypeTarget::Builtin(scalar)
            | NamedTypeTarget::ScalarAlias(scalar) => Some(*scalar),
            NamedTypeTarget::ObjectType
            | NamedTypeTarget::Enum => None,
        }
    }
}

/// A reference to a built-in scalar or to a declaration, by name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeRef {
    pub(crate) target: NamedTypeTarget,
    pub(crate) type_ref: NamedRef<Document, XidlSourceSpan, Declaration>,
}

impl NamedTypeRef {
    pub(crate) fn new(
        name: &str,
        target: NamedTypeTarget,
        ref_location: XidlSourceSpan,
    ) -> Self {
        Self {
            target,
            type_ref: NamedRef::new(name, ref_location),
        }
    }

    pub fn name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn ref_location(&self) -> &XidlSourceSpan {
        self.type_ref.ref_location()
    }

    pub fn target(&self) -> NamedTypeTarget {
        self.target
    }

    /// Resolves this reference against the document it was validated in.
    ///
    /// Only fails when called with a different document than the one this
    /// reference came from.
    pub fn deref<'doc>(
        &self,
        document: &'doc Document,
    ) -> Result<ResolvedNamedType<'doc>, DerefByNameError> {
        if let NamedTypeTarget::Builtin(scalar) = self.target {
            return Ok(ResolvedNamedType::Builtin(scalar));
        }
        match self.type_ref.deref(document)? {
            Declaration::ScalarAlias(alias) => Ok(ResolvedNamedType::ScalarAlias(alias)),
            Declaration::ObjectType(object_type) => Ok(ResolvedNamedType::ObjectType(object_type)),
            Declaration::Enum(enum_type) => Ok(ResolvedNamedType::Enum(enum_type)),
            role @ Declaration::Role(_) => Err(DerefByNameError::WrongKind {
                name: self.name().to_string(),
                expected: "a type",
                found: role.kind_description(),
            }),
        }
    }
}

/// The thing a [`NamedTypeRef`] points at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedNamedType<'doc> {
    Builtin(BuiltinScalar),
    ScalarAlias(&'doc ScalarAlias),
    ObjectType(&'doc ObjectType),
    Enum(&'doc EnumType),
}
