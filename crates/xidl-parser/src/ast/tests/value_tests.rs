//! Tests for [`crate::ast::Value`] and annotation lookups.

use crate::ast;
use crate::ast::AstNode;
use crate::ast::tests::ast_test_helpers::make_name;
use crate::ast::tests::ast_test_helpers::make_span;

/// Verifies kind descriptions and canonical printing of each literal kind.
#[test]
fn literal_kinds() {
    let cases = [
        (
            ast::Value::Int(ast::IntValue { span: make_span(0, 2), raw: "-5".to_string() }),
            "integer literal",
            "-5",
        ),
        (
            ast::Value::Float(ast::FloatValue { span: make_span(0, 3), raw: "1e3".to_string() }),
            "float literal",
            "1e3",
        ),
        (
            ast::Value::Boolean(ast::BooleanValue { span: make_span(0, 4), value: true }),
            "boolean literal",
            "true",
        ),
        (ast::Value::EnumSymbol(make_name("Red", 0, 3)), "enum symbol", "Red"),
    ];
    for (value, description, printed) in cases {
        assert_eq!(value.kind_description(), description);
        assert_eq!(value.to_source(None), printed);
    }
}

/// Verifies integer widening helpers.
#[test]
fn int_value_widths() {
    let big = ast::IntValue { span: make_span(0, 0), raw: "18446744073709551615".to_string() };
    assert_eq!(big.as_i64(), None);
    assert_eq!(big.as_i128(), Some(u64::MAX as i128));
}

/// Verifies annotation argument lookup and bare annotation printing.
#[test]
fn annotation_lookup() {
    let annotation = ast::Annotation {
        span: make_span(0, 0),
        name: make_name("deprecated", 0, 0),
        arguments: vec![],
    };
    assert!(annotation.argument("value").is_none());
    assert_eq!(annotation.to_source(None), "@deprecated");
}
