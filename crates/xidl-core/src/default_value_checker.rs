use crate::name_table::NameTable;
use crate::BuiltinScalar;
use crate::ConstValue;
use crate::NamedTypeTarget;
use crate::TypeRef;
use xidl_parser::ast;
use xidl_parser::ast::AstNode;

/// Checks a field's default literal against the field's resolved type and
/// converts it. A top-level optional and scalar aliases are looked
/// through; lists, maps and object types take no default.
///
/// The `Err` is a description of the mismatch for use in a
/// [`ValidationError::DefaultValueTypeMismatch`](crate::ValidationError).
pub(crate) struct DefaultValueChecker<'a, 'ast> {
    field_type: &'a TypeRef,
    name_table: &'a NameTable<'ast>,
    value: &'a ast::Value,
}

impl<'a, 'ast> DefaultValueChecker<'a, 'ast> {
    pub fn new(
        value: &'a ast::Value,
        field_type: &'a TypeRef,
        name_table: &'a NameTable<'ast>,
    ) -> Self {
        Self {
            field_type,
            name_table,
            value,
        }
    }

    pub fn check(self) -> Result<ConstValue, String> {
        match self.field_type.strip_optional() {
            TypeRef::Named(named) => match named.target() {
                NamedTypeTarget::Builtin(scalar)
                | NamedTypeTarget::ScalarAlias(scalar) => self.check_scalar(scalar, named.name()),
                NamedTypeTarget::Enum => self.check_enum_symbol(named.name()),
                NamedTypeTarget::ObjectType => Err(format!(
                    "fields of object type `{}` cannot have a default value",
                    named.name(),
                )),
            },
            TypeRef::List { .. } => Err("list fields cannot have a default value".to_string()),
            TypeRef::Map { .. } => Err("map fields cannot have a default value".to_string()),
            // `T??` cannot be written.
            TypeRef::Optional { .. } => Err(self.mismatch(&self.field_type.to_xidl_string())),
        }
    }

    fn check_scalar(&self, scalar: BuiltinScalar, type_name: &str) -> Result<ConstValue, String> {
        match (self.value, scalar) {
            (ast::Value::Int(int), scalar) if scalar.is_integer() => {
                let in_range = scalar.integer_range().zip(int.as_i128()).and_then(
                    |((min, max), value)| (min..=max).contains(&value).then_some(value)
                );
                match in_range {
                    Some(value) => Ok(ConstValue::Int(value)),
                    None => Err(self.out_of_range(scalar)),
                }
            },

            (ast::Value::Int(ast::IntValue { raw, .. }), scalar)
            | (ast::Value::Float(ast::FloatValue { raw, .. }), scalar) if scalar.is_float() => {
                let max = scalar.float_max().unwrap_or(f64::MAX);
                match raw.parse::<f64>() {
                    Ok(value) if value.is_finite() && value.abs() <= max =>
                        Ok(ConstValue::Float(value)),
                    _ => Err(self.out_of_range(scalar)),
                }
            },

            (ast::Value::String(string), BuiltinScalar::String) =>
                Ok(ConstValue::String(string.value.clone())),

            (ast::Value::Boolean(boolean), BuiltinScalar::Bool) =>
                Ok(ConstValue::Bool(boolean.value)),

            _ => Err(self.mismatch(type_name)),
        }
    }

    fn check_enum_symbol(&self, enum_name: &str) -> Result<ConstValue, String> {
        let ast::Value::EnumSymbol(symbol) = self.value else {
            return Err(self.mismatch(enum_name));
        };
        let enum_value = self.name_table
            .enum_definition(enum_name)
            .and_then(|enum_def| {
                enum_def.values.iter().find(|value| value.name.value == symbol.value)
            });
        let discriminant = enum_value.and_then(|value| value.discriminant.as_i64());
        match discriminant {
            Some(discriminant) => Ok(ConstValue::EnumSymbol {
                enum_name: enum_name.to_string(),
                symbol: symbol.value.clone(),
                discriminant,
            }),
            None => Err(format!(
                "`{}` is not a value of enum `{enum_name}`",
                symbol.value,
            )),
        }
    }

    fn mismatch(&self, expected: &str) -> String {
        format!(
            "expected a value of type `{expected}`, found {} `{}`",
            self.value.kind_description(),
            self.value.to_source(None),
        )
    }

    fn out_of_range(&self, scalar: BuiltinScalar) -> String {
        let literal = self.value.to_source(None);
        match scalar.integer_range() {
            Some((min, max)) => format!(
                "`{literal}` is out of range for `{scalar}` ({min} to {max})",
            ),
            None => format!("`{literal}` is out of range for `{scalar}`"),
        }
    }
}
