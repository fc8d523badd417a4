//! Validation and the resolved document model for xidl.
//!
//! [`xidl_parser`] turns source text into an unresolved AST.
//! [`DocumentValidator`] checks it and produces a [`Document`] in which
//! every type reference is resolved. Code generators only ever see the
//! validated model.
//!
//! ```
//! let source = r#"
//! namespace "com.example.customers"
//!
//! type Customer {
//!     id: u64
//!     name: string
//!     phones: [string]?
//! }
//!
//! interface {
//!     createCustomer{customer: Customer}: u64
//! }
//! "#;
//!
//! let document = xidl_core::parse_and_validate(source).unwrap();
//! let customer = document.object_type("Customer").unwrap();
//! assert!(customer.field("phones").unwrap().optional());
//! ```

mod annotation;
mod annotation_validator;
mod builtin_scalar;
mod const_value;
mod declaration;
mod default_value_checker;
mod diagnostic;
mod document;
mod document_printer;
mod document_validator;
mod enum_type;
mod enum_type_validator;
mod interface;
mod name_table;
mod named_ref;
mod object_type;
mod object_type_validator;
mod operation;
mod operation_set_validator;
mod role;
mod scalar_alias;
mod type_ref;
mod validation_error;
mod validator_options;

pub use annotation::Annotation;
pub use builtin_scalar::BuiltinScalar;
pub use const_value::ConstValue;
pub use declaration::Declaration;
pub use diagnostic::Diagnostic;
pub use diagnostic::DiagnosticKind;
pub use document::Document;
pub use document_validator::DocumentValidator;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use interface::Interface;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use object_type::Field;
pub use object_type::ObjectType;
pub use operation::Operation;
pub use operation::OperationKind;
pub use operation::Parameter;
pub use role::Role;
pub use scalar_alias::ScalarAlias;
pub use type_ref::NamedTypeRef;
pub use type_ref::NamedTypeTarget;
pub use type_ref::ResolvedNamedType;
pub use type_ref::TypeRef;
pub use validation_error::ValidationError;
pub use validator_options::ErrorPolicy;
pub use validator_options::ValidatorOptions;

/// Parses and validates `source` with the default [`ValidatorOptions`].
pub fn parse_and_validate(source: &str) -> Result<Document, Vec<Diagnostic>> {
    parse_and_validate_with_options(source, ValidatorOptions::default())
}

/// Parses and validates `source`.
///
/// A syntax or lexer error stops processing before validation, so the
/// `Err` then holds that single diagnostic.
pub fn parse_and_validate_with_options(
    source: &str,
    options: ValidatorOptions,
) -> Result<Document, Vec<Diagnostic>> {
    let parse_result = xidl_parser::XidlParser::new(source).parse_document();
    let parsed: Result<xidl_parser::ast::Document, Vec<xidl_parser::XidlParseError>> =
        parse_result.into();
    let ast = match parsed {
        Ok(ast) => ast,
        Err(parse_errors) => {
            return Err(parse_errors.iter().map(Diagnostic::from).collect());
        },
    };

    DocumentValidator::new(&ast)
        .with_options(options)
        .validate()
        .map_err(|errors| errors.iter().map(Diagnostic::from).collect())
}

#[cfg(test)]
mod test;
#[cfg(test)]
mod tests;
