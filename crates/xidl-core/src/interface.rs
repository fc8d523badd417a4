use crate::Operation;
use indexmap::IndexMap;
use xidl_parser::XidlSourceSpan;

/// The document's single, unnamed `interface` block: the operations the
/// module exposes to every caller.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Interface {
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) description: Option<String>,
    pub(crate) operations: IndexMap<String, Operation>,
}

impl Interface {
    /// Location of the `interface` keyword.
    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn operations(&self) -> &IndexMap<String, Operation> {
        &self.operations
    }
}
