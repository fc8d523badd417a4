use crate::BuiltinScalar;
use crate::NamedTypeRef;
use crate::NamedTypeTarget;
use crate::TypeRef;
use crate::ValidationError;
use indexmap::IndexMap;
use xidl_parser::ast;
use xidl_parser::XidlSourceSpan;

/// Where a type reference is written: a field, a parameter or a return
/// type. Carried into errors so they can point at the enclosing
/// declaration as well as the reference itself.
pub(crate) struct TypeUse {
    /// e.g. ``field `Customer.phones` ``.
    pub description: String,
    pub location: XidlSourceSpan,
}

/// Every named top-level declaration of a document, keyed by name.
///
/// Built in full before any reference is resolved, so a reference may
/// point forward, backward, or at the declaration it appears in.
pub(crate) struct NameTable<'ast> {
    definitions: IndexMap<&'ast str, &'ast ast::Definition>,
}

impl<'ast> NameTable<'ast> {
    /// Registers each named declaration. The first declaration of a name
    /// wins; each later one is reported as a duplicate.
    pub fn build(
        document: &'ast ast::Document,
        errors: &mut Vec<ValidationError>,
    ) -> Self {
        let mut definitions = IndexMap::<&'ast str, &'ast ast::Definition>::new();
        for definition in &document.definitions {
            let Some(name) = definition.name() else {
                continue;
            };
            if let Some(first) = definitions.get(name.as_str()) {
                let first_def_location = first.name().map_or_else(
                    || first.span().clone(),
                    |first_name| first_name.span.clone(),
                );
                errors.push(ValidationError::DuplicateDeclaration {
                    name: name.value.clone(),
                    first_def_location,
                    second_def_location: name.span.clone(),
                });
                continue;
            }
            definitions.insert(name.as_str(), definition);
        }
        log::debug!("name table holds {} declaration(s)", definitions.len());
        Self { definitions }
    }

    pub fn get(&self, name: &str) -> Option<&'ast ast::Definition> {
        self.definitions.get(name).copied()
    }

    pub fn enum_definition(&self, name: &str) -> Option<&'ast ast::EnumTypeDefinition> {
        match self.get(name)? {
            ast::Definition::Enum(enum_def) => Some(enum_def),
            _ => None,
        }
    }

    /// Resolves one type reference, reporting every unknown name and invalid
    /// map key inside it. Returns `None` if anything in it failed.
    pub fn resolve_type_ref(
        &self,
        type_ref: &ast::TypeRef,
        type_use: &TypeUse,
        errors: &mut Vec<ValidationError>,
    ) -> Option<TypeRef> {
        match type_ref {
            ast::TypeRef::Named(named) =>
                self.resolve_named(named, type_use, errors).map(TypeRef::Named),

            ast::TypeRef::List(list) => {
                let element = self.resolve_type_ref(&list.element, type_use, errors)?;
                Some(TypeRef::List {
                    element: Box::new(element),
                    ref_location: list.span.clone(),
                })
            },

            ast::TypeRef::Map(map) => {
                let key = self.resolve_type_ref(&map.key, type_use, errors);
                let value = self.resolve_type_ref(&map.value, type_use, errors);
                let key = key?;
                if !is_valid_map_key(&key) {
                    errors.push(ValidationError::InvalidMapKey {
                        key_type: key.to_xidl_string(),
                        ref_location: map.key.span().clone(),
                    });
                    return None;
                }
                Some(TypeRef::Map {
                    key: Box::new(key),
                    value: Box::new(value?),
                    ref_location: map.span.clone(),
                })
            },

            ast::TypeRef::Optional(optional) => {
                let inner = self.resolve_type_ref(&optional.inner, type_use, errors)?;
                Some(TypeRef::Optional {
                    inner: Box::new(inner),
                    ref_location: optional.span.clone(),
                })
            },
        }
    }

    fn resolve_named(
        &self,
        named: &ast::NamedTypeRef,
        type_use: &TypeUse,
        errors: &mut Vec<ValidationError>,
    ) -> Option<NamedTypeRef> {
        let name = named.name.as_str();
        let target = if let Some(scalar) = BuiltinScalar::from_keyword(name) {
            NamedTypeTarget::Builtin(scalar)
        } else {
            match self.get(name) {
                Some(ast::Definition::ScalarAlias(alias)) => {
                    // An alias of a non-scalar is reported where the alias
                    // is declared.
                    let scalar = BuiltinScalar::from_keyword(alias.aliased_type.as_str())?;
                    NamedTypeTarget::ScalarAlias(scalar)
                },
                Some(ast::Definition::ObjectType(_)) => NamedTypeTarget::ObjectType,
                Some(ast::Definition::Enum(_)) => NamedTypeTarget::Enum,
                Some(ast::Definition::Role(role)) => {
                    errors.push(ValidationError::UnknownType {
                        type_name: name.to_string(),
                        ref_location: named.span.clone(),
                        use_description: type_use.description.clone(),
                        use_location: type_use.location.clone(),
                        role_def_location: Some(role.name.span.clone()),
                    });
                    return None;
                },
                Some(ast::Definition::Interface(_)) | None => {
                    errors.push(ValidationError::UnknownType {
                        type_name: name.to_string(),
                        ref_location: named.span.clone(),
                        use_description: type_use.description.clone(),
                        use_location: type_use.location.clone(),
                        role_def_location: None,
                    });
                    return None;
                },
            }
        };
        Some(NamedTypeRef::new(name, target, named.span.clone()))
    }
}

/// Map keys must be an integer scalar or `string`, directly or through a
/// scalar alias, and may not be optional.
fn is_valid_map_key(key: &TypeRef) -> bool {
    key.as_named()
        .and_then(|named| named.target().scalar())
        .is_some_and(|scalar| scalar.is_map_key())
}
