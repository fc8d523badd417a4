use indexmap::IndexMap;
use xidl_parser::XidlSourceSpan;

/// An `enum` declaration: named symbols with integer discriminants and
/// human-readable display names.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}

impl EnumType {
    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// Looks up the value carrying `discriminant`. Discriminants are unique
    /// within an enum, so there is at most one.
    pub fn value_by_discriminant(&self, discriminant: i64) -> Option<&EnumValue> {
        self.values.values().find(|value| value.discriminant == discriminant)
    }

    /// Values in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) discriminant: i64,
    pub(crate) display_name: String,
    pub(crate) name: String,
}

impl EnumValue {
    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn discriminant(&self) -> i64 {
        self.discriminant
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
