/// A literal that has been checked and converted, either against the type
/// of the field it defaults or as an annotation argument.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ConstValue {
    /// Wide enough for every built-in integer kind, `u64` included.
    Int(i128),
    Float(f64),
    String(String),
    Bool(bool),
    EnumSymbol {
        enum_name: String,
        symbol: String,
        discriminant: i64,
    },
    /// A bare identifier passed to an annotation. Annotation arguments have
    /// no declared type, so it is not bound to any enum.
    Identifier(String),
}

impl ConstValue {
    pub fn as_int(&self) -> Option<i128> {
        match self {
            ConstValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&xidl_parser::ast::Value> for ConstValue {
    /// Converts a literal with no declared type to check it against, as
    /// for annotation arguments.
    fn from(value: &xidl_parser::ast::Value) -> Self {
        use xidl_parser::ast::Value;
        match value {
            // Integers too wide for i128 degrade to the nearest float.
            Value::Int(int) => int.as_i128().map_or_else(
                || ConstValue::Float(int.raw.parse().unwrap_or(f64::INFINITY)),
                ConstValue::Int,
            ),
            // The lexer only produces well-formed float literals.
            Value::Float(float) => ConstValue::Float(float.as_f64().unwrap_or(f64::NAN)),
            Value::String(string) => ConstValue::String(string.value.clone()),
            Value::Boolean(boolean) => ConstValue::Bool(boolean.value),
            Value::EnumSymbol(name) => ConstValue::Identifier(name.value.clone()),
        }
    }
}
