/// The compiled-in scalar kinds every document can reference without
/// declaring them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinScalar {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
}

impl BuiltinScalar {
    pub const ALL: [BuiltinScalar; 12] = [
        BuiltinScalar::Bool,
        BuiltinScalar::I8,
        BuiltinScalar::I16,
        BuiltinScalar::I32,
        BuiltinScalar::I64,
        BuiltinScalar::U8,
        BuiltinScalar::U16,
        BuiltinScalar::U32,
        BuiltinScalar::U64,
        BuiltinScalar::F32,
        BuiltinScalar::F64,
        BuiltinScalar::String,
    ];

    /// Looks up a scalar kind by the keyword used to reference it.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scalar| scalar.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            BuiltinScalar::Bool => "bool",
            BuiltinScalar::I8 => "i8",
            BuiltinScalar::I16 => "i16",
            BuiltinScalar::I32 => "i32",
            BuiltinScalar::I64 => "i64",
            BuiltinScalar::U8 => "u8",
            BuiltinScalar::U16 => "u16",
            BuiltinScalar::U32 => "u32",
            BuiltinScalar::U64 => "u64",
            BuiltinScalar::F32 => "f32",
            BuiltinScalar::F64 => "f64",
            BuiltinScalar::String => "string",
        }
    }

    /// Inclusive value range of an integer kind. `None` for every other
    /// kind.
    pub fn integer_range(&self) -> Option<(i128, i128)> {
        match self {
            BuiltinScalar::I8 => Some((i8::MIN.into(), i8::MAX.into())),
            BuiltinScalar::I16 => Some((i16::MIN.into(), i16::MAX.into())),
            BuiltinScalar::I32 => Some((i32::MIN.into(), i32::MAX.into())),
            BuiltinScalar::I64 => Some((i64::MIN.into(), i64::MAX.into())),
            BuiltinScalar::U8 => Some((0, u8::MAX.into())),
            BuiltinScalar::U16 => Some((0, u16::MAX.into())),
            BuiltinScalar::U32 => Some((0, u32::MAX.into())),
            BuiltinScalar::U64 => Some((0, u64::MAX.into())),
            BuiltinScalar::Bool
            | BuiltinScalar::F32
            | BuiltinScalar::F64
            | BuiltinScalar::String => None,
        }
    }

    /// Largest finite magnitude of a float kind. `None` for every other
    /// kind.
    pub fn float_max(&self) -> Option<f64> {
        match self {
            BuiltinScalar::F32 => Some(f32::MAX.into()),
            BuiltinScalar::F64 => Some(f64::MAX),
            _ => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.integer_range().is_some()
    }

    pub fn is_float(&self) -> bool {
        self.float_max().is_some()
    }

    /// Integer kinds and `string` may key a map.
    pub fn is_map_key(&self) -> bool {
        self.is_integer() || matches!(self, BuiltinScalar::String)
    }
}

impl std::fmt::Display for BuiltinScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
