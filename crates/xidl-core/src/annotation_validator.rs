use crate::Annotation;
use crate::ConstValue;
use crate::ValidationError;
use indexmap::IndexMap;
use std::collections::HashMap;
use xidl_parser::ast;
use xidl_parser::XidlSourceSpan;

/// Converts one annotation's arguments to [`ConstValue`]s, rejecting an
/// argument name that appears twice.
pub(super) struct AnnotationValidator<'a> {
    annotation: &'a ast::Annotation,
    errors: Vec<ValidationError>,
}
impl<'a> AnnotationValidator<'a> {
    pub fn new(annotation: &'a ast::Annotation) -> Self {
        Self {
            annotation,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> (Annotation, Vec<ValidationError>) {
        let mut arguments = IndexMap::new();
        let mut first_locations = HashMap::<&str, &XidlSourceSpan>::new();
        for argument in &self.annotation.arguments {
            let argument_name = argument.name.as_str();
            if let Some(first_def_location) = first_locations.get(argument_name) {
                self.errors.push(ValidationError::DuplicateAnnotationArgument {
                    annotation_name: self.annotation.name.value.clone(),
                    argument_name: argument_name.to_string(),
                    first_def_location: (*first_def_location).clone(),
                    second_def_location: argument.name.span.clone(),
                });
                continue;
            }
            first_locations.insert(argument_name, &argument.name.span);
            arguments.insert(argument_name.to_string(), ConstValue::from(&argument.value));
        }

        let annotation = Annotation {
            arguments,
            def_location: self.annotation.span.clone(),
            name: self.annotation.name.value.clone(),
        };
        (annotation, self.errors)
    }
}
