/// Contexts where certain names are reserved.
///
/// Used by `XidlParseErrorKind::ReservedName` to indicate which context
/// rejected the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedNameContext {
    /// Declarations (`scalar`, `type`, `enum`, `role`) cannot take the name
    /// of a built-in scalar (`u64`, `string`, ...) or `void`.
    ///
    /// Invalid: `type string { ... }`
    DeclarationName,

    /// `void` is only valid as an operation's return type.
    ///
    /// Invalid: `field: void`
    TypeReference,

    /// Enum values cannot be `true` or `false`, which are lexed as boolean
    /// literals.
    EnumValue,
}
