//! Shared helpers for parser tests.

use crate::ast;
use crate::token::XidlToken;
use crate::token::XidlTokenKind;
use crate::ParseResult;
use crate::SourcePosition;
use crate::XidlParseError;
use crate::XidlParser;
use crate::XidlSourceSpan;
use smallvec::smallvec;

pub fn parse(source: &str) -> ParseResult<ast::Document> {
    XidlParser::new(source).parse_document()
}

/// Parses `source`, panicking with rendered diagnostics if it fails.
pub fn parse_ok(source: &str) -> ast::Document {
    let result = parse(source);
    let rendered = result.format_errors(Some(source));
    match result.into_valid_ast() {
        Some(doc) => doc,
        None => panic!("expected `{source}` to parse, got:\n{rendered}"),
    }
}

/// Parses `source`, asserting exactly one error and returning it.
pub fn parse_err(source: &str) -> XidlParseError {
    let result = parse(source);
    assert!(result.ast().is_none(), "expected `{source}` to fail to parse");
    assert_eq!(result.errors.len(), 1, "errors: {:?}", result.errors);
    result.errors.into_iter().next().unwrap()
}

/// Returns the only object type declared in `doc`.
pub fn only_object_type(doc: &ast::Document) -> &ast::ObjectTypeDefinition {
    assert_eq!(doc.definitions.len(), 1);
    match &doc.definitions[0] {
        ast::Definition::ObjectType(def) => def,
        other => panic!("expected an object type, got {other:?}"),
    }
}

/// Parses `type T { f: <type_ref> }` and returns the field's type.
pub fn parse_field_type(type_ref: &str) -> ast::TypeRef {
    let doc = parse_ok(&format!("type T {{ f: {type_ref} }}"));
    only_object_type(&doc).fields[0].type_ref.clone()
}

/// Creates a token with the given kind and an empty span at the origin.
pub fn mock_token(kind: XidlTokenKind<'static>) -> XidlToken<'static> {
    XidlToken {
        kind,
        preceding_trivia: smallvec![],
        span: XidlSourceSpan::empty_at(SourcePosition::zero()),
    }
}

/// A token source that yields a fixed list of tokens.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<XidlToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<XidlToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = XidlToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}
