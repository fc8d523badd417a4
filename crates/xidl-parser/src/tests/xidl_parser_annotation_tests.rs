//! Tests for field annotations.

use crate::ast;
use crate::tests::utils::only_object_type;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::XidlParseErrorKind;

fn field_annotations(field_source: &str) -> Vec<ast::Annotation> {
    let doc = parse_ok(&format!("type T {{\n  {field_source}\n}}"));
    only_object_type(&doc).fields[0].annotations.clone()
}

/// Verifies a bare annotation and one with empty parentheses.
#[test]
fn annotation_without_arguments() {
    let annotations = field_annotations("old: u8 @deprecated @internal()");
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].name.as_str(), "deprecated");
    assert!(annotations[0].arguments.is_empty());
    assert!(annotations[1].arguments.is_empty());
}

/// Verifies named arguments.
#[test]
fn annotation_named_arguments() {
    let annotations = field_annotations("age: u8 @range(min: 0, max: 150)");
    let range = &annotations[0];
    assert_eq!(range.arguments.len(), 2);
    assert!(matches!(
        &range.argument("max").unwrap().value,
        ast::Value::Int(v) if v.raw == "150"
    ));
    assert!(range.argument("step").is_none());
}

/// Verifies that a shorthand argument is stored under the shorthand name.
#[test]
fn annotation_shorthand_argument() {
    let annotations = field_annotations("name: string @max_len(64)");
    let arg = annotations[0].argument(ast::SHORTHAND_ARGUMENT_NAME).unwrap();
    assert!(matches!(&arg.value, ast::Value::Int(v) if v.raw == "64"));
}

/// Verifies that a shorthand enum symbol is not mistaken for a named
/// argument.
#[test]
fn annotation_shorthand_enum_symbol() {
    let annotations = field_annotations("id: u64 @encoding(Hex)");
    let arg = annotations[0].argument("value").unwrap();
    assert!(matches!(&arg.value, ast::Value::EnumSymbol(n) if n.value == "Hex"));
}

/// Verifies annotations after a default value.
#[test]
fn annotation_after_default() {
    let doc = parse_ok("type T { retries: u8 = 3 @max(10) }");
    let field = &only_object_type(&doc).fields[0];
    assert!(field.default_value.is_some());
    assert_eq!(field.annotations.len(), 1);
}

/// Verifies that a shorthand argument cannot be followed by more arguments.
#[test]
fn shorthand_then_more_arguments_rejected() {
    let error = parse_err("type T { f: u8 @x(1, 2) }");
    assert!(matches!(
        error.kind(),
        XidlParseErrorKind::UnexpectedToken { found, .. } if found == ","
    ));
}

/// Verifies that an unclosed argument list is reported as such.
#[test]
fn unclosed_annotation_arguments() {
    let error = parse_err("type T { f: u8 @x(a: 1");
    assert_eq!(
        error.kind(),
        &XidlParseErrorKind::UnclosedDelimiter { delimiter: "(".to_string() },
    );
}
