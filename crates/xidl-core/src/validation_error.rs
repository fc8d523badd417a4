use crate::DiagnosticKind;
use xidl_parser::XidlErrorNote;
use xidl_parser::XidlErrorNotes;
use xidl_parser::XidlSourceSpan;

/// A semantic rule violated by a document that parsed successfully.
///
/// Each variant keeps enough locations to point at both sides of a
/// conflict. [`Diagnostic`](crate::Diagnostic) is the uniform,
/// kind-tagged rendering of these.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Duplicate declaration of `{name}`")]
    DuplicateDeclaration {
        name: String,
        first_def_location: XidlSourceSpan,
        second_def_location: XidlSourceSpan,
    },

    #[error("Unknown type `{type_name}`")]
    UnknownType {
        type_name: String,
        ref_location: XidlSourceSpan,
        /// What the reference types, e.g. ``field `Customer.phones` ``.
        use_description: String,
        /// The whole field, parameter or operation the reference is in.
        use_location: XidlSourceSpan,
        /// Set when the name belongs to a role, which is not a type.
        role_def_location: Option<XidlSourceSpan>,
    },

    #[error(
        "Invalid map key type `{key_type}`: map keys must be an integer type \
        or `string`"
    )]
    InvalidMapKey {
        key_type: String,
        ref_location: XidlSourceSpan,
    },

    #[error("Duplicate field `{field_name}` in type `{type_name}`")]
    DuplicateField {
        type_name: String,
        field_name: String,
        first_def_location: XidlSourceSpan,
        second_def_location: XidlSourceSpan,
    },

    #[error("Duplicate value `{value_name}` in enum `{enum_name}`")]
    DuplicateEnumValue {
        enum_name: String,
        value_name: String,
        first_def_location: XidlSourceSpan,
        second_def_location: XidlSourceSpan,
    },

    #[error("Duplicate operation `{operation_name}` in {container}")]
    DuplicateOperation {
        /// `interface` or `role \`Name\``.
        container: String,
        operation_name: String,
        first_def_location: XidlSourceSpan,
        second_def_location: XidlSourceSpan,
    },

    #[error("Duplicate parameter `{parameter_name}` in operation `{operation_name}`")]
    DuplicateParameter {
        operation_name: String,
        parameter_name: String,
        first_def_location: XidlSourceSpan,
        second_def_location: XidlSourceSpan,
    },

    #[error("Duplicate argument `{argument_name}` in annotation `@{annotation_name}`")]
    DuplicateAnnotationArgument {
        annotation_name: String,
        argument_name: String,
        first_def_location: XidlSourceSpan,
        second_def_location: XidlSourceSpan,
    },

    #[error(
        "Enum value `{enum_name}.{value_name}` reuses discriminant \
        {discriminant} of `{enum_name}.{first_value_name}`"
    )]
    DuplicateEnumDiscriminant {
        enum_name: String,
        value_name: String,
        first_value_name: String,
        discriminant: i64,
        first_def_location: XidlSourceSpan,
        second_def_location: XidlSourceSpan,
    },

    #[error("Invalid default value for field `{type_name}.{field_name}`: {detail}")]
    DefaultValueTypeMismatch {
        type_name: String,
        field_name: String,
        detail: String,
        value_location: XidlSourceSpan,
    },

    #[error(
        "Field `{type_name}.{field_name}` is marked optional both on its name \
        and on its type"
    )]
    InconsistentOptionalMarker {
        type_name: String,
        field_name: String,
        marker_location: XidlSourceSpan,
        type_location: XidlSourceSpan,
    },

    #[error(
        "Scalar alias `{alias_name}` must name a built-in scalar, found \
        `{aliased_name}`"
    )]
    InvalidScalarAlias {
        alias_name: String,
        aliased_name: String,
        aliased_location: XidlSourceSpan,
    },
}

impl ValidationError {
    pub fn diagnostic_kind(&self) -> DiagnosticKind {
        match self {
            Self::DuplicateDeclaration { .. } => DiagnosticKind::DuplicateDeclarationError,
            Self::UnknownType { .. } => DiagnosticKind::UnknownTypeError,
            Self::InvalidMapKey { .. } => DiagnosticKind::InvalidMapKeyError,
            Self::DuplicateField { .. } => DiagnosticKind::DuplicateFieldError,
            Self::DuplicateEnumValue { .. } => DiagnosticKind::DuplicateEnumValueError,
            Self::DuplicateOperation { .. } => DiagnosticKind::DuplicateOperationError,
            Self::DuplicateParameter { .. } => DiagnosticKind::DuplicateParameterError,
            Self::DuplicateAnnotationArgument { .. } =>
                DiagnosticKind::DuplicateAnnotationArgumentError,
            Self::DuplicateEnumDiscriminant { .. } =>
                DiagnosticKind::DuplicateEnumDiscriminantError,
            Self::DefaultValueTypeMismatch { .. } =>
                DiagnosticKind::DefaultValueTypeMismatchError,
            Self::InconsistentOptionalMarker { .. } =>
                DiagnosticKind::InconsistentOptionalMarkerError,
            Self::InvalidScalarAlias { .. } => DiagnosticKind::InvalidScalarAliasError,
        }
    }

    /// The primary location: the second of two conflicting definitions, or
    /// the offending reference or literal.
    pub fn span(&self) -> &XidlSourceSpan {
        match self {
            Self::DuplicateDeclaration { second_def_location, .. }
            | Self::DuplicateField { second_def_location, .. }
            | Self::DuplicateEnumValue { second_def_location, .. }
            | Self::DuplicateOperation { second_def_location, .. }
            | Self::DuplicateParameter { second_def_location, .. }
            | Self::DuplicateAnnotationArgument { second_def_location, .. }
            | Self::DuplicateEnumDiscriminant { second_def_location, .. } =>
                second_def_location,
            Self::UnknownType { ref_location, .. }
            | Self::InvalidMapKey { ref_location, .. } => ref_location,
            Self::DefaultValueTypeMismatch { value_location, .. } => value_location,
            Self::InconsistentOptionalMarker { type_location, .. } => type_location,
            Self::InvalidScalarAlias { aliased_location, .. } => aliased_location,
        }
    }

    /// Related locations and suggestions, rendered under the message.
    pub fn notes(&self) -> XidlErrorNotes {
        let mut notes = XidlErrorNotes::new();
        match self {
            Self::DuplicateDeclaration { name, first_def_location, .. } => {
                notes.push(XidlErrorNote::general_with_span(
                    format!("`{name}` first declared here"),
                    first_def_location.clone(),
                ));
            },
            Self::DuplicateField { field_name: name, first_def_location, .. }
            | Self::DuplicateEnumValue { value_name: name, first_def_location, .. }
            | Self::DuplicateOperation { operation_name: name, first_def_location, .. }
            | Self::DuplicateParameter { parameter_name: name, first_def_location, .. }
            | Self::DuplicateAnnotationArgument {
                argument_name: name,
                first_def_location,
                ..
            } => {
                notes.push(XidlErrorNote::general_with_span(
                    format!("`{name}` first defined here"),
                    first_def_location.clone(),
                ));
            },
            Self::DuplicateEnumDiscriminant { first_value_name, first_def_location, .. } => {
                notes.push(XidlErrorNote::general_with_span(
                    format!("`{first_value_name}` defined here"),
                    first_def_location.clone(),
                ));
            },
            Self::UnknownType {
                type_name,
                use_description,
                use_location,
                role_def_location,
                ..
            } => {
                notes.push(XidlErrorNote::general_with_span(
                    format!("in {use_description}"),
                    use_location.clone(),
                ));
                if let Some(role_def_location) = role_def_location {
                    notes.push(XidlErrorNote::general_with_span(
                        format!("`{type_name}` is a role, declared here"),
                        role_def_location.clone(),
                    ));
                    notes.push(XidlErrorNote::help(
                        "Roles group operations and cannot be used as types",
                    ));
                }
            },
            Self::InvalidMapKey { .. } => (),
            Self::DefaultValueTypeMismatch { .. } => (),
            Self::InconsistentOptionalMarker { marker_location, .. } => {
                notes.push(XidlErrorNote::general_with_span(
                    "field name marked optional here",
                    marker_location.clone(),
                ));
                notes.push(XidlErrorNote::help("Remove one of the two `?` markers"));
            },
            Self::InvalidScalarAlias { .. } => {
                notes.push(XidlErrorNote::help(format!(
                    "Built-in scalars are: {}",
                    xidl_parser::BUILTIN_SCALAR_NAMES.join(", "),
                )));
            },
        }
        notes
    }
}
