use crate::ConstValue;
use indexmap::IndexMap;
use xidl_parser::XidlSourceSpan;

/// An annotation attached to a field, with its arguments converted to
/// [`ConstValue`]s and keyed by argument name.
///
/// Shorthand arguments (`@max(5)`) appear under the name `value`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Annotation {
    pub(crate) arguments: IndexMap<String, ConstValue>,
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) name: String,
}

impl Annotation {
    pub fn argument(&self, name: &str) -> Option<&ConstValue> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, ConstValue> {
        &self.arguments
    }

    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
