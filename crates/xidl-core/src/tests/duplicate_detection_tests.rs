//! Tests for the uniqueness rules: declarations, fields, enum values and
//! discriminants, operations, parameters and annotation arguments.

use crate::tests::utils::span_text;
use crate::tests::utils::validate_err;
use crate::tests::utils::validate_ok;
use crate::tests::utils::validate_single_err;
use crate::DiagnosticKind;

/// Verifies that two declarations sharing a name are rejected, with a note
/// pointing at the first.
#[test]
fn duplicate_declaration() {
    let source = "type Customer { id: u64 }\n\ntype Customer { name: string }";
    let diagnostic = validate_single_err(source, DiagnosticKind::DuplicateDeclarationError);

    assert_eq!(diagnostic.span().start_inclusive.line(), 2);
    assert_eq!(span_text(&diagnostic, source), "Customer");
    assert_eq!(diagnostic.notes().len(), 1);
    let note_span = diagnostic.notes()[0].span.as_ref().unwrap();
    assert_eq!(note_span.start_inclusive.line(), 0);
}

/// Verifies that declarations of different kinds still share one namespace.
#[test]
fn duplicate_declaration_across_kinds() {
    let source = r#"
        enum Status { Active = 1 "Active" }
        role Status { ping(): void }
    "#;
    validate_single_err(source, DiagnosticKind::DuplicateDeclarationError);
}

/// Verifies that two `id` fields in one type are rejected.
#[test]
fn duplicate_field() {
    let source = "type Customer {\n  id: u64\n  id: string\n}";
    let diagnostic = validate_single_err(source, DiagnosticKind::DuplicateFieldError);

    assert_eq!(diagnostic.message(), "Duplicate field `id` in type `Customer`");
    assert_eq!(diagnostic.span().start_inclusive.line(), 2);
}

/// Verifies that the same field name in two different types is fine.
#[test]
fn same_field_name_in_different_types() {
    validate_ok("type A { id: u64 }\ntype B { id: u64 }");
}

/// Verifies that two enum values sharing a name are rejected.
#[test]
fn duplicate_enum_value() {
    let source = r#"enum Color { Red = 1 "Red" Red = 2 "Also red" }"#;
    validate_single_err(source, DiagnosticKind::DuplicateEnumValueError);
}

/// Verifies that two enum values with discriminant `1` are rejected, and
/// that the primary span is the second discriminant.
#[test]
fn duplicate_enum_discriminant() {
    let source = "enum Color {\n  Red = 1 \"Red\"\n  Green = 1 \"Green\"\n}";
    let diagnostic = validate_single_err(source, DiagnosticKind::DuplicateEnumDiscriminantError);

    assert_eq!(span_text(&diagnostic, source), "1");
    assert_eq!(diagnostic.span().start_inclusive.line(), 2);
    assert!(diagnostic.message().contains("`Color.Green`"));
    assert!(diagnostic.message().contains("`Color.Red`"));
}

/// Verifies that negative and positive discriminants are distinct.
#[test]
fn negative_discriminants_are_distinct() {
    let document = validate_ok(r#"enum Sign { Neg = -1 "Negative" Pos = 1 "Positive" }"#);
    let sign = document.enum_type("Sign").unwrap();
    assert_eq!(sign.value("Neg").unwrap().discriminant(), -1);
}

/// Verifies that two interface operations sharing a name are rejected.
#[test]
fn duplicate_interface_operation() {
    let source = "interface {\n  get(id: u64): string\n  get{id: u64}: string\n}";
    let diagnostic = validate_single_err(source, DiagnosticKind::DuplicateOperationError);
    assert!(diagnostic.message().ends_with("in interface"));
}

/// Verifies that a role and the interface may reuse an operation name, but
/// one role may not.
#[test]
fn duplicate_role_operation() {
    validate_ok(
        r#"
        interface { ping(): void }
        role Admin { ping(): void }
        role Support { ping(): void }
        "#,
    );

    let diagnostic = validate_single_err(
        "role Admin {\n  ping(): void\n  ping(): void\n}",
        DiagnosticKind::DuplicateOperationError,
    );
    assert!(diagnostic.message().ends_with("in role `Admin`"));
}

/// Verifies that an operation may not take two parameters of one name.
#[test]
fn duplicate_parameter() {
    let source = "interface { move(x: i32, y: i32, x: i32): void }";
    let diagnostic = validate_single_err(source, DiagnosticKind::DuplicateParameterError);
    assert_eq!(
        diagnostic.message(),
        "Duplicate parameter `x` in operation `move`",
    );
}

/// Verifies that an annotation may not repeat an argument name, including
/// through the normalized shorthand `value` argument.
#[test]
fn duplicate_annotation_argument() {
    let source = "type T { f: u8 @range(min: 0, min: 1) }";
    validate_single_err(source, DiagnosticKind::DuplicateAnnotationArgumentError);

    let source = "type T { f: u8 @range(value: 0, value: 1) }";
    validate_single_err(source, DiagnosticKind::DuplicateAnnotationArgumentError);
}

/// Verifies that every duplicate in a document is reported, in order.
#[test]
fn all_duplicates_are_reported() {
    let source = r#"
        type A { x: u8 x: u8 }
        enum E { One = 1 "One" Uno = 1 "Uno" }
        type A { y: u8 }
    "#;
    let kinds: Vec<DiagnosticKind> = validate_err(source).iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            DiagnosticKind::DuplicateDeclarationError,
            DiagnosticKind::DuplicateFieldError,
            DiagnosticKind::DuplicateEnumDiscriminantError,
        ],
    );
}
