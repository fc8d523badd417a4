use crate::Operation;
use indexmap::IndexMap;
use xidl_parser::XidlSourceSpan;

/// A named group of operations, independent of the document's interface
/// and of every other role.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Role {
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) operations: IndexMap<String, Operation>,
}

impl Role {
    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn operations(&self) -> &IndexMap<String, Operation> {
        &self.operations
    }
}
