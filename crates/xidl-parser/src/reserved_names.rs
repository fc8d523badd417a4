/// Keywords of the built-in scalar kinds. A declaration may not reuse one
/// of these as its name.
pub const BUILTIN_SCALAR_NAMES: [&str; 12] = [
    "bool", "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64", "string",
];

/// The return-type keyword for operations that return nothing.
pub const VOID_KEYWORD: &str = "void";

/// Returns `true` if `name` may not be used as a declaration name.
pub fn is_reserved_declaration_name(name: &str) -> bool {
    name == VOID_KEYWORD || BUILTIN_SCALAR_NAMES.contains(&name)
}
