//! Tests for `XidlTokenKind` queries and literal cooking.

use crate::token::XidlTokenKind;
use crate::XidlStringParsingError;

/// Verifies that every punctuator reports its source text.
#[test]
fn punctuator_strings() {
    let cases = [
        (XidlTokenKind::At, "@"),
        (XidlTokenKind::Colon, ":"),
        (XidlTokenKind::Comma, ","),
        (XidlTokenKind::CurlyBraceClose, "}"),
        (XidlTokenKind::CurlyBraceOpen, "{"),
        (XidlTokenKind::Equals, "="),
        (XidlTokenKind::ParenClose, ")"),
        (XidlTokenKind::ParenOpen, "("),
        (XidlTokenKind::Question, "?"),
        (XidlTokenKind::SquareBracketClose, "]"),
        (XidlTokenKind::SquareBracketOpen, "["),
    ];
    for (kind, text) in cases {
        assert!(kind.is_punctuator());
        assert_eq!(kind.as_punctuator_str(), Some(text));
    }
    assert!(!XidlTokenKind::name_borrowed("x").is_punctuator());
    assert!(!XidlTokenKind::Eof.is_punctuator());
}

/// Verifies which kinds count as literal values.
#[test]
fn is_value() {
    assert!(XidlTokenKind::int_value_borrowed("1").is_value());
    assert!(XidlTokenKind::float_value_borrowed("1.0").is_value());
    assert!(XidlTokenKind::string_value_borrowed("\"s\"").is_value());
    assert!(XidlTokenKind::True.is_value());
    assert!(XidlTokenKind::False.is_value());
    assert!(!XidlTokenKind::block_string_value_borrowed("\"\"\"s\"\"\"").is_value());
    assert!(!XidlTokenKind::name_borrowed("Red").is_value());
}

/// Verifies integer and float parsing, including overflow.
#[test]
fn numeric_parsing() {
    assert_eq!(XidlTokenKind::int_value_borrowed("-42").parse_int_value(), Some(Ok(-42)));
    assert!(matches!(
        XidlTokenKind::int_value_borrowed("99999999999999999999").parse_int_value(),
        Some(Err(_))
    ));
    assert_eq!(
        XidlTokenKind::float_value_borrowed("2.5e2").parse_float_value(),
        Some(Ok(250.0)),
    );
    assert_eq!(XidlTokenKind::Colon.parse_int_value(), None);
}

/// Verifies single-line string escapes.
#[test]
fn single_line_string_escapes() {
    let kind = XidlTokenKind::string_value_borrowed(r#""a\"b\\c\/d\n\t\u0041\u{1F980}""#);
    assert_eq!(
        kind.parse_string_value(),
        Some(Ok("a\"b\\c/d\n\tA🦀".to_string())),
    );
}

/// Verifies errors for malformed escapes.
#[test]
fn single_line_string_escape_errors() {
    let cases = [
        (r#""\q""#, XidlStringParsingError::InvalidEscapeSequence("\\q".to_string())),
        (r#""\u12""#, XidlStringParsingError::InvalidUnicodeEscape("\\u12".to_string())),
        (r#""\u{}""#, XidlStringParsingError::InvalidUnicodeEscape("\\u{}".to_string())),
        (r#""\u{D800}""#, XidlStringParsingError::InvalidUnicodeEscape("\\u{D800}".to_string())),
        ("\"abc", XidlStringParsingError::UnterminatedString),
    ];
    for (raw, expected) in cases {
        let kind = XidlTokenKind::string_value_borrowed(raw);
        assert_eq!(kind.parse_string_value(), Some(Err(expected)), "raw: {raw}");
    }
}

/// Verifies that non-string kinds cannot be cooked as strings.
#[test]
fn non_string_parse_string_value() {
    assert_eq!(XidlTokenKind::name_borrowed("x").parse_string_value(), None);
}

/// Verifies error token construction.
#[test]
fn error_token() {
    let kind = XidlTokenKind::error("bad", Default::default());
    assert!(kind.is_error());
    assert!(!kind.is_value());
}
