use crate::Declaration;
use crate::DerefByNameError;
use crate::EnumType;
use crate::Interface;
use crate::NamedTypeRef;
use crate::ObjectType;
use crate::ResolvedNamedType;
use crate::Role;
use crate::ScalarAlias;
use indexmap::IndexMap;

/// A validated document.
///
/// Every named type reference reachable from it resolves either to a
/// built-in scalar or to exactly one entry of [`declarations()`], which
/// keeps source order. A `Document` is only ever produced by
/// [`DocumentValidator`](crate::DocumentValidator), so holding one means
/// every validation rule passed.
///
/// [`declarations()`]: Self::declarations
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub(crate) declarations: IndexMap<String, Declaration>,
    pub(crate) interface: Option<Interface>,
    pub(crate) namespace: Option<String>,
}

impl Document {
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    /// All named declarations, in source order.
    pub fn declarations(&self) -> &IndexMap<String, Declaration> {
        &self.declarations
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.declaration(name).and_then(Declaration::as_object_type)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.declaration(name).and_then(Declaration::as_enum)
    }

    pub fn scalar_alias(&self, name: &str) -> Option<&ScalarAlias> {
        self.declaration(name).and_then(Declaration::as_scalar_alias)
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        self.declaration(name).and_then(Declaration::as_role)
    }

    pub fn object_types(&self) -> impl Iterator<Item = &ObjectType> {
        self.declarations.values().filter_map(Declaration::as_object_type)
    }

    pub fn enum_types(&self) -> impl Iterator<Item = &EnumType> {
        self.declarations.values().filter_map(Declaration::as_enum)
    }

    pub fn scalar_aliases(&self) -> impl Iterator<Item = &ScalarAlias> {
        self.declarations.values().filter_map(Declaration::as_scalar_alias)
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.declarations.values().filter_map(Declaration::as_role)
    }

    pub fn interface(&self) -> Option<&Interface> {
        self.interface.as_ref()
    }

    /// Same as [`NamedTypeRef::deref()`].
    pub fn resolve_named<'doc>(
        &'doc self,
        type_ref: &NamedTypeRef,
    ) -> Result<ResolvedNamedType<'doc>, DerefByNameError> {
        type_ref.deref(self)
    }
}
