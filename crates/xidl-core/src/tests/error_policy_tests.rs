//! Tests for `ErrorPolicy`.

use crate::parse_and_validate_with_options;
use crate::tests::utils::validate_err;
use crate::DiagnosticKind;
use crate::DocumentValidator;
use crate::ErrorPolicy;
use crate::ValidationError;
use crate::ValidatorOptions;

const MANY_ERRORS: &str = r#"
    type A { x: Missing }
    type B { y: u8 = "no" }
    enum E { One = 1 "One" Two = 1 "Two" }
"#;

/// Verifies that the default policy reports every error.
#[test]
fn accumulate_all_is_default() {
    assert_eq!(ValidatorOptions::default().get_error_policy(), ErrorPolicy::AccumulateAll);
    let kinds: Vec<DiagnosticKind> = validate_err(MANY_ERRORS).iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            DiagnosticKind::UnknownTypeError,
            DiagnosticKind::DefaultValueTypeMismatchError,
            DiagnosticKind::DuplicateEnumDiscriminantError,
        ],
    );
}

/// Verifies that `StopAtFirst` reports only the first error.
#[test]
fn stop_at_first() {
    let options = ValidatorOptions::new().error_policy(ErrorPolicy::StopAtFirst);
    let diagnostics = parse_and_validate_with_options(MANY_ERRORS, options).unwrap_err();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind(), DiagnosticKind::UnknownTypeError);
}

/// Verifies that `StopAtFirst` returns exactly one error even when a
/// single declaration has several.
#[test]
fn stop_at_first_within_one_declaration() {
    let ast = xidl_parser::XidlParser::new("type T { a: X b: Y c: Z }")
        .parse_document()
        .into_valid_ast()
        .unwrap();
    let errors = DocumentValidator::new(&ast)
        .with_options(ValidatorOptions::new().error_policy(ErrorPolicy::StopAtFirst))
        .validate()
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::UnknownType { type_name, .. } if type_name == "X"
    ));
}

/// Verifies that a valid document is unaffected by the policy.
#[test]
fn policy_does_not_affect_valid_documents() {
    let options = ValidatorOptions::new().error_policy(ErrorPolicy::StopAtFirst);
    assert!(parse_and_validate_with_options("type T { a: u8 }", options).is_ok());
}
