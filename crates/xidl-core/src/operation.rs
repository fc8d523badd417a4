use crate::TypeRef;
use indexmap::IndexMap;
use xidl_parser::XidlSourceSpan;

/// How an operation receives its arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    /// `op(a: A, b: B)`: arguments travel wrapped in one object.
    Function,
    /// `op{a: A}`: exactly one argument, serialized without a wrapper.
    Unary,
}

impl From<xidl_parser::ast::OperationKind> for OperationKind {
    fn from(kind: xidl_parser::ast::OperationKind) -> Self {
        match kind {
            xidl_parser::ast::OperationKind::Function => OperationKind::Function,
            xidl_parser::ast::OperationKind::Unary => OperationKind::Unary,
        }
    }
}

/// An operation declared in the document's `interface` or in a `role`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) description: Option<String>,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) return_type: Option<TypeRef>,
}

impl Operation {
    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// `None` for operations returning `void`.
    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
}

impl Parameter {
    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
