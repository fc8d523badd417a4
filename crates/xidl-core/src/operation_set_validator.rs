use crate::name_table::NameTable;
use crate::name_table::TypeUse;
use crate::Operation;
use crate::Parameter;
use crate::ValidationError;
use indexmap::IndexMap;
use std::collections::HashMap;
use xidl_parser::ast;
use xidl_parser::XidlSourceSpan;

/// Validates the operations of the interface or of one role: operation
/// names are unique within the set, parameter names within an operation,
/// and every parameter and return type resolves.
pub(super) struct OperationSetValidator<'a, 'ast> {
    /// `interface` or `role \`Name\``, for messages.
    container: String,
    errors: Vec<ValidationError>,
    name_table: &'a NameTable<'ast>,
    operations: &'ast [ast::OperationDefinition],
}
impl<'a, 'ast> OperationSetValidator<'a, 'ast> {
    pub fn new(
        container: String,
        operations: &'ast [ast::OperationDefinition],
        name_table: &'a NameTable<'ast>,
    ) -> Self {
        Self {
            container,
            errors: vec![],
            name_table,
            operations,
        }
    }

    pub fn validate(mut self) -> (Option<IndexMap<String, Operation>>, Vec<ValidationError>) {
        let operations = self.operations;
        let mut resolved = IndexMap::new();
        let mut first_locations = HashMap::<&str, &XidlSourceSpan>::new();

        for operation_def in operations {
            let operation_name = operation_def.name.as_str();
            if let Some(first_def_location) = first_locations.get(operation_name) {
                self.errors.push(ValidationError::DuplicateOperation {
                    container: self.container.clone(),
                    operation_name: operation_name.to_string(),
                    first_def_location: (*first_def_location).clone(),
                    second_def_location: operation_def.name.span.clone(),
                });
                continue;
            }
            first_locations.insert(operation_name, &operation_def.name.span);

            log::trace!("validating operation `{operation_name}` in {}", self.container);
            if let Some(operation) = self.validate_operation(operation_def) {
                resolved.insert(operation_name.to_string(), operation);
            }
        }

        if !self.errors.is_empty() {
            return (None, self.errors);
        }
        (Some(resolved), self.errors)
    }

    fn validate_operation(&mut self, operation_def: &'ast ast::OperationDefinition) -> Option<Operation> {
        let mut parameters = IndexMap::new();
        let mut first_locations = HashMap::<&str, &XidlSourceSpan>::new();
        let mut all_resolved = true;

        for parameter_def in &operation_def.parameters {
            let parameter_name = parameter_def.name.as_str();
            if let Some(first_def_location) = first_locations.get(parameter_name) {
                self.errors.push(ValidationError::DuplicateParameter {
                    operation_name: operation_def.name.value.clone(),
                    parameter_name: parameter_name.to_string(),
                    first_def_location: (*first_def_location).clone(),
                    second_def_location: parameter_def.name.span.clone(),
                });
                all_resolved = false;
                continue;
            }
            first_locations.insert(parameter_name, &parameter_def.name.span);

            let type_use = TypeUse {
                description: format!(
                    "parameter `{parameter_name}` of operation `{}`",
                    operation_def.name.as_str(),
                ),
                location: parameter_def.span.clone(),
            };
            match self.name_table.resolve_type_ref(&parameter_def.type_ref, &type_use, &mut self.errors) {
                Some(type_ref) => {
                    parameters.insert(parameter_name.to_string(), Parameter {
                        def_location: parameter_def.name.span.clone(),
                        name: parameter_name.to_string(),
                        type_ref,
                    });
                },
                None => all_resolved = false,
            }
        }

        let return_type = match &operation_def.return_type {
            ast::ReturnType::Void(_) => None,
            ast::ReturnType::Type(type_ref) => {
                let type_use = TypeUse {
                    description: format!(
                        "the return type of operation `{}`",
                        operation_def.name.as_str(),
                    ),
                    location: operation_def.span.clone(),
                };
                Some(self.name_table.resolve_type_ref(type_ref, &type_use, &mut self.errors)?)
            },
        };
        if !all_resolved {
            return None;
        }

        Some(Operation {
            def_location: operation_def.name.span.clone(),
            description: operation_def.description.as_ref().map(|d| d.value.clone()),
            kind: operation_def.kind.into(),
            name: operation_def.name.value.clone(),
            parameters,
            return_type,
        })
    }
}
