//! AST produced by [`XidlParser`](crate::XidlParser).
//!
//! Every node carries an [`XidlSourceSpan`](crate::XidlSourceSpan). Names and
//! literals are owned `String`s, so a parsed document outlives its source
//! buffer. Named type references are left unresolved here; resolving them
//! against the document's declarations is the validator's job.
//!
//! # Example
//!
//! ```rust
//! use xidl_parser::ast;
//! use xidl_parser::XidlParser;
//!
//! let result = XidlParser::new("type Customer { id: u64 }").parse_document();
//! let doc = result.valid_ast().unwrap();
//! assert!(matches!(doc.definitions[0], ast::Definition::ObjectType(_)));
//! ```

mod annotation;
mod ast_node;
mod boolean_value;
mod document;
mod enum_type_definition;
mod enum_value_definition;
mod field_definition;
mod float_value;
mod int_value;
mod interface_definition;
mod name;
mod object_type_definition;
mod operation_definition;
mod parameter_definition;
mod role_definition;
mod scalar_alias_definition;
mod string_value;
mod type_ref;
mod value;

pub use annotation::Annotation;
pub use annotation::AnnotationArgument;
pub use annotation::SHORTHAND_ARGUMENT_NAME;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use document::Definition;
pub use document::Document;
pub use document::NamespaceDeclaration;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use int_value::IntValue;
pub use interface_definition::InterfaceDefinition;
pub use name::Name;
pub use object_type_definition::ObjectTypeDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use operation_definition::ReturnType;
pub use parameter_definition::ParameterDefinition;
pub use role_definition::RoleDefinition;
pub use scalar_alias_definition::ScalarAliasDefinition;
pub use string_value::StringValue;
pub use string_value::append_escaped_string;
pub use type_ref::ListTypeRef;
pub use type_ref::MapTypeRef;
pub use type_ref::NamedTypeRef;
pub use type_ref::OptionalTypeRef;
pub use type_ref::TypeRef;
pub use value::Value;

#[cfg(test)]
mod tests;
