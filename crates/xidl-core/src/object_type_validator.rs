use crate::annotation_validator::AnnotationValidator;
use crate::default_value_checker::DefaultValueChecker;
use crate::name_table::NameTable;
use crate::name_table::TypeUse;
use crate::Field;
use crate::ObjectType;
use crate::TypeRef;
use crate::ValidationError;
use indexmap::IndexMap;
use std::collections::HashMap;
use xidl_parser::ast;
use xidl_parser::XidlSourceSpan;

pub(super) struct ObjectTypeValidator<'a, 'ast> {
    errors: Vec<ValidationError>,
    name_table: &'a NameTable<'ast>,
    type_: &'ast ast::ObjectTypeDefinition,
}
impl<'a, 'ast> ObjectTypeValidator<'a, 'ast> {
    pub fn new(
        type_: &'ast ast::ObjectTypeDefinition,
        name_table: &'a NameTable<'ast>,
    ) -> Self {
        Self {
            errors: vec![],
            name_table,
            type_,
        }
    }

    /// Returns the resolved type only if none of its fields had an error.
    pub fn validate(mut self) -> (Option<ObjectType>, Vec<ValidationError>) {
        let type_ = self.type_;
        let type_name = type_.name.as_str();
        let mut fields = IndexMap::new();
        let mut first_locations = HashMap::<&str, &XidlSourceSpan>::new();

        for field_def in &type_.fields {
            let field_name = field_def.name.as_str();
            if let Some(first_def_location) = first_locations.get(field_name) {
                self.errors.push(ValidationError::DuplicateField {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                    first_def_location: (*first_def_location).clone(),
                    second_def_location: field_def.name.span.clone(),
                });
                continue;
            }
            first_locations.insert(field_name, &field_def.name.span);

            if let Some(field) = self.validate_field(field_def) {
                fields.insert(field_name.to_string(), field);
            }
        }

        if !self.errors.is_empty() {
            return (None, self.errors);
        }
        let object_type = ObjectType {
            def_location: type_.name.span.clone(),
            description: type_.description.as_ref().map(|d| d.value.clone()),
            fields,
            name: type_name.to_string(),
        };
        (Some(object_type), self.errors)
    }

    fn validate_field(&mut self, field_def: &'ast ast::FieldDefinition) -> Option<Field> {
        let type_name = self.type_.name.value.clone();

        if let (Some(marker_location), ast::TypeRef::Optional(optional)) =
            (&field_def.optional_marker, &field_def.type_ref)
        {
            self.errors.push(ValidationError::InconsistentOptionalMarker {
                type_name: type_name.clone(),
                field_name: field_def.name.value.clone(),
                marker_location: marker_location.clone(),
                type_location: optional.span.clone(),
            });
        }

        let mut annotations = vec![];
        for annotation in &field_def.annotations {
            let (annotation, mut errors) = AnnotationValidator::new(annotation).validate();
            self.errors.append(&mut errors);
            annotations.push(annotation);
        }

        let type_use = TypeUse {
            description: format!("field `{type_name}.{}`", field_def.name.as_str()),
            location: field_def.span.clone(),
        };
        let type_ref = self.name_table.resolve_type_ref(
            &field_def.type_ref,
            &type_use,
            &mut self.errors,
        )?;
        // `name?: T` is stored the same way as `name: T?`.
        let type_ref = match &field_def.optional_marker {
            Some(_) if !type_ref.is_optional() => TypeRef::Optional {
                ref_location: type_ref.ref_location().clone(),
                inner: Box::new(type_ref),
            },
            _ => type_ref,
        };

        let default_value = match &field_def.default_value {
            Some(value) => {
                match DefaultValueChecker::new(value, &type_ref, self.name_table).check() {
                    Ok(const_value) => Some(const_value),
                    Err(detail) => {
                        self.errors.push(ValidationError::DefaultValueTypeMismatch {
                            type_name,
                            field_name: field_def.name.value.clone(),
                            detail,
                            value_location: value.span().clone(),
                        });
                        return None;
                    },
                }
            },
            None => None,
        };

        Some(Field {
            annotations,
            def_location: field_def.name.span.clone(),
            default_value,
            description: field_def.description.as_ref().map(|d| d.value.clone()),
            name: field_def.name.value.clone(),
            parent_type_name: self.type_.name.value.clone(),
            type_ref,
        })
    }
}
