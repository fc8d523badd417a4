use crate::DerefByName;
use crate::DerefByNameError;
use crate::Document;
use crate::EnumType;
use crate::ObjectType;
use crate::Role;
use crate::ScalarAlias;
use xidl_parser::XidlSourceSpan;

/// A named top-level declaration. Every declaration shares one namespace, so
/// a role and a type may not have the same name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Declaration {
    ScalarAlias(ScalarAlias),
    ObjectType(ObjectType),
    Enum(EnumType),
    Role(Role),
}

impl Declaration {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_object_type(&self) -> Option<&ObjectType> {
        if let Self::ObjectType(object_type) = self {
            Some(object_type)
        } else {
            None
        }
    }

    pub fn as_role(&self) -> Option<&Role> {
        if let Self::Role(role) = self {
            Some(role)
        } else {
            None
        }
    }

    pub fn as_scalar_alias(&self) -> Option<&ScalarAlias> {
        if let Self::ScalarAlias(alias) = self {
            Some(alias)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &XidlSourceSpan {
        match self {
            Self::ScalarAlias(alias) => alias.def_location(),
            Self::ObjectType(object_type) => object_type.def_location(),
            Self::Enum(enum_type) => enum_type.def_location(),
            Self::Role(role) => role.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::ScalarAlias(alias) => alias.description(),
            Self::ObjectType(object_type) => object_type.description(),
            Self::Enum(enum_type) => enum_type.description(),
            Self::Role(role) => role.description(),
        }
    }

    /// `"a scalar alias"`, `"a type"`, ... for use in messages.
    pub fn kind_description(&self) -> &'static str {
        match self {
            Self::ScalarAlias(_) => "a scalar alias",
            Self::ObjectType(_) => "an object type",
            Self::Enum(_) => "an enum",
            Self::Role(_) => "a role",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::ScalarAlias(alias) => alias.name(),
            Self::ObjectType(object_type) => object_type.name(),
            Self::Enum(enum_type) => enum_type.name(),
            Self::Role(role) => role.name(),
        }
    }
}

impl DerefByName for Declaration {
    type Source = Document;
    type RefLocation = XidlSourceSpan;

    fn deref_name<'a>(
        document: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Declaration, DerefByNameError> {
        document.declarations.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}
