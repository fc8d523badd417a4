use crate::Annotation;
use crate::ConstValue;
use crate::Declaration;
use crate::Document;
use crate::EnumType;
use crate::ObjectType;
use crate::Operation;
use crate::OperationKind;
use indexmap::IndexMap;
use xidl_parser::ast::append_escaped_string;

const INDENT: &str = "  ";

impl Document {
    /// Prints this document as canonical xidl source.
    ///
    /// Declarations keep their order and the interface, if any, comes last.
    /// Parsing and validating the output yields a document equal to this
    /// one apart from source locations. A field-name `?` is printed on the
    /// type, and annotation shorthand is printed as its `value:` argument.
    ///
    /// ```
    /// let document = xidl_core::parse_and_validate("type T { a?: u8 = 1 }").unwrap();
    /// assert_eq!(document.to_xidl_source(), "type T {\n  a: u8? = 1\n}\n");
    /// ```
    pub fn to_xidl_source(&self) -> String {
        let mut sink = String::new();
        let mut blocks = vec![];

        if let Some(namespace) = self.namespace() {
            let mut block = String::from("namespace ");
            append_escaped_string(&mut block, namespace);
            block.push('\n');
            blocks.push(block);
        }
        for declaration in self.declarations().values() {
            let mut block = String::new();
            append_declaration(&mut block, declaration);
            blocks.push(block);
        }
        if let Some(interface) = self.interface() {
            let mut block = String::new();
            append_description(&mut block, interface.description(), "");
            block.push_str("interface");
            append_operations(&mut block, interface.operations());
            blocks.push(block);
        }

        for (idx, block) in blocks.iter().enumerate() {
            if idx > 0 {
                sink.push('\n');
            }
            sink.push_str(block);
        }
        sink
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_xidl_source())
    }
}

fn append_declaration(sink: &mut String, declaration: &Declaration) {
    append_description(sink, declaration.description(), "");
    match declaration {
        Declaration::ScalarAlias(alias) => {
            sink.push_str(&format!("scalar {} = {}\n", alias.name(), alias.aliased()));
        },
        Declaration::ObjectType(object_type) => append_object_type(sink, object_type),
        Declaration::Enum(enum_type) => append_enum_type(sink, enum_type),
        Declaration::Role(role) => {
            sink.push_str("role ");
            sink.push_str(role.name());
            append_operations(sink, role.operations());
        },
    }
}

fn append_object_type(sink: &mut String, object_type: &ObjectType) {
    sink.push_str(&format!("type {} {{\n", object_type.name()));
    for field in object_type.fields().values() {
        append_description(sink, field.description(), INDENT);
        sink.push_str(INDENT);
        sink.push_str(field.name());
        sink.push_str(": ");
        sink.push_str(&field.type_ref().to_xidl_string());
        if let Some(default_value) = field.default_value() {
            sink.push_str(" = ");
            append_const_value(sink, default_value);
        }
        for annotation in field.annotations() {
            sink.push(' ');
            append_annotation(sink, annotation);
        }
        sink.push('\n');
    }
    sink.push_str("}\n");
}

fn append_enum_type(sink: &mut String, enum_type: &EnumType) {
    sink.push_str(&format!("enum {} {{\n", enum_type.name()));
    for value in enum_type.values().values() {
        sink.push_str(&format!("{INDENT}{} = {} ", value.name(), value.discriminant()));
        append_escaped_string(sink, value.display_name());
        sink.push('\n');
    }
    sink.push_str("}\n");
}

/// Appends ` {`, one line per operation, and the closing `}`.
fn append_operations(sink: &mut String, operations: &IndexMap<String, Operation>) {
    sink.push_str(" {\n");
    for operation in operations.values() {
        append_description(sink, operation.description(), INDENT);
        sink.push_str(INDENT);
        sink.push_str(operation.name());
        let (open, close) = match operation.kind() {
            OperationKind::Function => ('(', ')'),
            OperationKind::Unary => ('{', '}'),
        };
        sink.push(open);
        let parameters = operation
            .parameters()
            .values()
            .map(|parameter| format!("{}: {}", parameter.name(), parameter.type_ref().to_xidl_string()))
            .collect::<Vec<_>>()
            .join(", ");
        sink.push_str(&parameters);
        sink.push(close);
        sink.push_str(": ");
        match operation.return_type() {
            Some(return_type) => sink.push_str(&return_type.to_xidl_string()),
            None => sink.push_str(xidl_parser::VOID_KEYWORD),
        }
        sink.push('\n');
    }
    sink.push_str("}\n");
}

fn append_annotation(sink: &mut String, annotation: &Annotation) {
    sink.push('@');
    sink.push_str(annotation.name());
    if annotation.arguments().is_empty() {
        return;
    }
    sink.push('(');
    for (idx, (name, value)) in annotation.arguments().iter().enumerate() {
        if idx > 0 {
            sink.push_str(", ");
        }
        sink.push_str(name);
        sink.push_str(": ");
        append_const_value(sink, value);
    }
    sink.push(')');
}

fn append_const_value(sink: &mut String, value: &ConstValue) {
    match value {
        ConstValue::Int(int) => sink.push_str(&int.to_string()),
        // `Debug` keeps a fraction or exponent, so the literal lexes as a
        // float again.
        ConstValue::Float(float) => sink.push_str(&format!("{float:?}")),
        ConstValue::String(string) => append_escaped_string(sink, string),
        ConstValue::Bool(boolean) => sink.push_str(if *boolean { "true" } else { "false" }),
        ConstValue::EnumSymbol { symbol, .. } => sink.push_str(symbol),
        ConstValue::Identifier(name) => sink.push_str(name),
    }
}

/// Descriptions are printed as single-line strings; escapes carry any
/// line breaks of a block description.
fn append_description(sink: &mut String, description: Option<&str>, indent: &str) {
    if let Some(description) = description {
        sink.push_str(indent);
        append_escaped_string(sink, description);
        sink.push('\n');
    }
}
