use crate::enum_type_validator::EnumTypeValidator;
use crate::name_table::NameTable;
use crate::object_type_validator::ObjectTypeValidator;
use crate::operation_set_validator::OperationSetValidator;
use crate::BuiltinScalar;
use crate::Declaration;
use crate::Document;
use crate::ErrorPolicy;
use crate::Interface;
use crate::Role;
use crate::ScalarAlias;
use crate::ValidationError;
use crate::ValidatorOptions;
use indexmap::IndexMap;
use xidl_parser::ast;

/// Second pass over a parsed document: builds the name table, resolves
/// every type reference, and enforces the rules a well-formed document
/// must satisfy. Produces the resolved [`Document`].
///
/// ```
/// use xidl_core::DocumentValidator;
/// use xidl_parser::XidlParser;
///
/// let ast = XidlParser::new("type Customer { id: u64 }")
///     .parse_document()
///     .into_valid_ast()
///     .unwrap();
/// let document = DocumentValidator::new(&ast).validate().unwrap();
/// assert!(document.object_type("Customer").is_some());
/// ```
pub struct DocumentValidator<'ast> {
    ast: &'ast ast::Document,
    errors: Vec<ValidationError>,
    options: ValidatorOptions,
}

impl<'ast> DocumentValidator<'ast> {
    pub fn new(ast: &'ast ast::Document) -> Self {
        Self {
            ast,
            errors: vec![],
            options: ValidatorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs every check. With [`ErrorPolicy::AccumulateAll`] the `Err`
    /// holds every error in source order of the checks; with
    /// [`ErrorPolicy::StopAtFirst`] it holds exactly one.
    pub fn validate(mut self) -> Result<Document, Vec<ValidationError>> {
        let ast = self.ast;
        log::debug!(
            "validating document with {} definition(s)",
            ast.definitions.len(),
        );

        let name_table = NameTable::build(ast, &mut self.errors);
        let mut declarations = IndexMap::<String, Declaration>::new();
        let mut interface = None;

        for definition in &ast.definitions {
            if self.should_stop() {
                break;
            }
            log::trace!(
                "validating {} `{}`",
                definition.keyword(),
                definition.name().map_or("", |name| name.as_str()),
            );

            match definition {
                ast::Definition::ScalarAlias(alias_def) => {
                    if let Some(alias) = self.validate_scalar_alias(alias_def) {
                        insert_first(&mut declarations, Declaration::ScalarAlias(alias));
                    }
                },

                ast::Definition::ObjectType(type_def) => {
                    let (object_type, mut errors) =
                        ObjectTypeValidator::new(type_def, &name_table).validate();
                    self.errors.append(&mut errors);
                    if let Some(object_type) = object_type {
                        insert_first(&mut declarations, Declaration::ObjectType(object_type));
                    }
                },

                ast::Definition::Enum(enum_def) => {
                    let (enum_type, mut errors) = EnumTypeValidator::new(enum_def).validate();
                    self.errors.append(&mut errors);
                    if let Some(enum_type) = enum_type {
                        insert_first(&mut declarations, Declaration::Enum(enum_type));
                    }
                },

                ast::Definition::Interface(interface_def) => {
                    let (operations, mut errors) = OperationSetValidator::new(
                        "interface".to_string(),
                        &interface_def.operations,
                        &name_table,
                    ).validate();
                    self.errors.append(&mut errors);
                    interface = operations.map(|operations| Interface {
                        def_location: interface_def.keyword_span.clone(),
                        description: interface_def.description.as_ref().map(|d| d.value.clone()),
                        operations,
                    });
                },

                ast::Definition::Role(role_def) => {
                    let (operations, mut errors) = OperationSetValidator::new(
                        format!("role `{}`", role_def.name.as_str()),
                        &role_def.operations,
                        &name_table,
                    ).validate();
                    self.errors.append(&mut errors);
                    if let Some(operations) = operations {
                        insert_first(&mut declarations, Declaration::Role(Role {
                            def_location: role_def.name.span.clone(),
                            description: role_def.description.as_ref().map(|d| d.value.clone()),
                            name: role_def.name.value.clone(),
                            operations,
                        }));
                    }
                },
            }
        }

        if !self.errors.is_empty() {
            if self.options.get_error_policy() == ErrorPolicy::StopAtFirst {
                self.errors.truncate(1);
            }
            log::debug!("validation failed with {} error(s)", self.errors.len());
            return Err(self.errors);
        }

        log::debug!("validation succeeded: {} declaration(s)", declarations.len());
        Ok(Document {
            declarations,
            interface,
            namespace: ast.namespace.as_ref().map(|ns| ns.name.value.clone()),
        })
    }

    fn should_stop(&self) -> bool {
        self.options.get_error_policy() == ErrorPolicy::StopAtFirst
            && !self.errors.is_empty()
    }

    fn validate_scalar_alias(
        &mut self,
        alias_def: &ast::ScalarAliasDefinition,
    ) -> Option<ScalarAlias> {
        let Some(aliased) = BuiltinScalar::from_keyword(alias_def.aliased_type.as_str()) else {
            self.errors.push(ValidationError::InvalidScalarAlias {
                alias_name: alias_def.name.value.clone(),
                aliased_name: alias_def.aliased_type.value.clone(),
                aliased_location: alias_def.aliased_type.span.clone(),
            });
            return None;
        };
        Some(ScalarAlias {
            aliased,
            def_location: alias_def.name.span.clone(),
            description: alias_def.description.as_ref().map(|d| d.value.clone()),
            name: alias_def.name.value.clone(),
        })
    }
}

/// Duplicate declarations have already been reported by the name table;
/// the first one keeps the name.
fn insert_first(declarations: &mut IndexMap<String, Declaration>, declaration: Declaration) {
    declarations.entry(declaration.name().to_string()).or_insert(declaration);
}
