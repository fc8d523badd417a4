use crate::Annotation;
use crate::ConstValue;
use crate::TypeRef;
use indexmap::IndexMap;
use xidl_parser::XidlSourceSpan;

/// A `type` declaration: a record of named, typed fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType {
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}

impl ObjectType {
    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) default_value: Option<ConstValue>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_ref: TypeRef,
}

impl Field {
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|annot| annot.name() == name)
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    /// The field's default, already checked against and converted to the
    /// field's type.
    pub fn default_value(&self) -> Option<&ConstValue> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the field may be absent. A field written `name?: T` and one
    /// written `name: T?` are both optional, and both carry an
    /// `Optional` at the top of their [`type_ref()`](Self::type_ref).
    pub fn optional(&self) -> bool {
        self.type_ref.is_optional()
    }

    /// Name of the object type declaring this field.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
