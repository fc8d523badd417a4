use crate::EnumType;
use crate::EnumValue;
use crate::ValidationError;
use indexmap::IndexMap;
use std::collections::HashMap;
use xidl_parser::ast;
use xidl_parser::XidlSourceSpan;

/// Checks that an enum's value names and discriminants are each unique.
pub(super) struct EnumTypeValidator<'ast> {
    enum_: &'ast ast::EnumTypeDefinition,
    errors: Vec<ValidationError>,
}
impl<'ast> EnumTypeValidator<'ast> {
    pub fn new(enum_: &'ast ast::EnumTypeDefinition) -> Self {
        Self {
            enum_,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> (Option<EnumType>, Vec<ValidationError>) {
        let enum_ = self.enum_;
        let enum_name = enum_.name.as_str();
        let mut values = IndexMap::new();
        let mut first_locations = HashMap::<&str, &XidlSourceSpan>::new();
        let mut discriminant_owners = HashMap::<i64, &ast::EnumValueDefinition>::new();

        for value_def in &enum_.values {
            let value_name = value_def.name.as_str();
            if let Some(first_def_location) = first_locations.get(value_name) {
                self.errors.push(ValidationError::DuplicateEnumValue {
                    enum_name: enum_name.to_string(),
                    value_name: value_name.to_string(),
                    first_def_location: (*first_def_location).clone(),
                    second_def_location: value_def.name.span.clone(),
                });
                continue;
            }
            first_locations.insert(value_name, &value_def.name.span);

            // Discriminants that overflow i64 are rejected by the parser.
            let Some(discriminant) = value_def.discriminant.as_i64() else {
                continue;
            };
            if let Some(first_owner) = discriminant_owners.get(&discriminant) {
                self.errors.push(ValidationError::DuplicateEnumDiscriminant {
                    enum_name: enum_name.to_string(),
                    value_name: value_name.to_string(),
                    first_value_name: first_owner.name.value.clone(),
                    discriminant,
                    first_def_location: first_owner.discriminant.span.clone(),
                    second_def_location: value_def.discriminant.span.clone(),
                });
                continue;
            }
            discriminant_owners.insert(discriminant, value_def);

            values.insert(value_name.to_string(), EnumValue {
                def_location: value_def.name.span.clone(),
                discriminant,
                display_name: value_def.display_name.value.clone(),
                name: value_name.to_string(),
            });
        }

        if !self.errors.is_empty() {
            return (None, self.errors);
        }
        let enum_type = EnumType {
            def_location: enum_.name.span.clone(),
            description: enum_.description.as_ref().map(|d| d.value.clone()),
            name: enum_name.to_string(),
            values,
        };
        (Some(enum_type), self.errors)
    }
}
