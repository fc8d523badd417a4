/// Pattern for matching expected errors in snapshot tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedErrorPattern {
    /// Diagnostic kind match (e.g. `# EXPECTED_ERROR_TYPE: UnknownTypeError`)
    ExactType(String),
    /// Substring match on the message (e.g.
    /// `# EXPECTED_ERROR_CONTAINS: Unknown type`)
    Contains(String),
}

impl ExpectedErrorPattern {
    pub fn matches(&self, kind: &str, message: &str) -> bool {
        match self {
            ExpectedErrorPattern::ExactType(type_name) => kind == type_name,
            ExpectedErrorPattern::Contains(substring) => message.contains(substring.as_str()),
        }
    }
}

impl std::fmt::Display for ExpectedErrorPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedErrorPattern::ExactType(type_name) => {
                write!(f, "ERROR_TYPE: {type_name}")
            }
            ExpectedErrorPattern::Contains(substring) => {
                write!(f, "ERROR_CONTAINS: {substring}")
            }
        }
    }
}
