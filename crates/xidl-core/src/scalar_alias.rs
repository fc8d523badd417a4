use crate::BuiltinScalar;
use xidl_parser::XidlSourceSpan;

/// `scalar CustomerId = u64`: a declared name that stands for one built-in
/// scalar kind.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarAlias {
    pub(crate) aliased: BuiltinScalar,
    pub(crate) def_location: XidlSourceSpan,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}

impl ScalarAlias {
    pub fn aliased(&self) -> BuiltinScalar {
        self.aliased
    }

    pub fn def_location(&self) -> &XidlSourceSpan {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
