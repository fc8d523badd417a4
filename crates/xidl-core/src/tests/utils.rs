//! Shared helpers for validator tests.

use crate::parse_and_validate;
use crate::Declaration;
use crate::Diagnostic;
use crate::DiagnosticKind;
use crate::Document;
use crate::Operation;
use crate::TypeRef;
use indexmap::IndexMap;

/// The end-to-end `customers` document: every declaration kind, forward and
/// self references, optionals in both spellings, maps, lists, defaults and
/// annotations.
pub const CUSTOMERS_DOCUMENT: &str = r#"
namespace "acme.customers"

# Identifiers are plain unsigned integers on the wire.
scalar CustomerId = u64

"A customer of the shop."
type Customer {
    id: CustomerId
    "Full name, as entered."
    name: string @length(max: 200)
    age: i32 = 18
    phones: [PhoneNumber]?
    address?: Address
    tags: {string: string}
    referrer: Customer?
    scores: {u32: [f64?]}
    tier: Tier = Free @deprecated
}

type PhoneNumber {
    kind: PhoneKind = Mobile
    number: string
}

type Address {
    street: string
    city: string
    postcode?: string
}

enum PhoneKind {
    Mobile = 1 "Mobile"
    Home = 2 "Home"
    Work = 3 "Work"
}

enum Tier {
    Free = 0 "Free"
    Gold = 10 "Gold"
}

"""
Operations available to every caller.
"""
interface {
    createCustomer{customer: Customer}: CustomerId
    getCustomer(id: CustomerId): Customer?
    deleteCustomer(id: CustomerId): void
}

role Admin {
    listCustomers(offset: u32, limit: u32): [Customer]
    purge(): void
}
"#;

/// Parses and validates `source`, panicking with rendered diagnostics if
/// anything fails.
pub fn validate_ok(source: &str) -> Document {
    match parse_and_validate(source) {
        Ok(document) => document,
        Err(diagnostics) => panic!(
            "expected `{source}` to validate, got:\n{}",
            render(&diagnostics, source),
        ),
    }
}

/// Parses and validates `source`, asserting that it fails.
pub fn validate_err(source: &str) -> Vec<Diagnostic> {
    match parse_and_validate(source) {
        Ok(document) => panic!("expected `{source}` to fail validation, got {document:#?}"),
        Err(diagnostics) => diagnostics,
    }
}

/// Asserts that `source` fails with exactly one diagnostic of `kind` and
/// returns it.
pub fn validate_single_err(source: &str, kind: DiagnosticKind) -> Diagnostic {
    let diagnostics = validate_err(source);
    assert_eq!(
        diagnostics.len(),
        1,
        "expected a single {kind}, got:\n{}",
        render(&diagnostics, source),
    );
    let diagnostic = diagnostics.into_iter().next().unwrap();
    assert_eq!(diagnostic.kind(), kind, "{}", diagnostic.format_detailed(Some(source)));
    diagnostic
}

pub fn render(diagnostics: &[Diagnostic], source: &str) -> String {
    diagnostics
        .iter()
        .map(|d| d.format_detailed(Some(source)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text covered by `diagnostic`'s primary span.
pub fn span_text<'a>(diagnostic: &Diagnostic, source: &'a str) -> &'a str {
    let span = diagnostic.span();
    &source[span.start_inclusive.byte_offset()..span.end_exclusive.byte_offset()]
}

/// A location-free rendering of each declaration, keyed by name, so that
/// documents parsed from differently laid out sources can be compared.
pub fn declaration_signatures(document: &Document) -> IndexMap<String, String> {
    let mut signatures: IndexMap<String, String> = document
        .declarations()
        .iter()
        .map(|(name, declaration)| (name.clone(), declaration_signature(declaration)))
        .collect();
    if let Some(interface) = document.interface() {
        signatures.insert(
            "<interface>".to_string(),
            operations_signature(interface.operations()),
        );
    }
    signatures
}

fn declaration_signature(declaration: &Declaration) -> String {
    match declaration {
        Declaration::ScalarAlias(alias) => format!("scalar {} = {}", alias.name(), alias.aliased()),
        Declaration::ObjectType(object_type) => {
            let fields = object_type
                .fields()
                .values()
                .map(|field| format!(
                    "{}: {} default={:?} annotations={:?}",
                    field.name(),
                    type_signature(field.type_ref()),
                    field.default_value(),
                    field.annotations()
                        .iter()
                        .map(|annot| (annot.name(), annot.arguments()))
                        .collect::<Vec<_>>(),
                ))
                .collect::<Vec<_>>()
                .join("; ");
            format!("type {} {:?} {{{fields}}}", object_type.name(), object_type.description())
        },
        Declaration::Enum(enum_type) => {
            let values = enum_type
                .values()
                .values()
                .map(|v| format!("{}={} {:?}", v.name(), v.discriminant(), v.display_name()))
                .collect::<Vec<_>>()
                .join("; ");
            format!("enum {} {{{values}}}", enum_type.name())
        },
        Declaration::Role(role) => {
            format!("role {} {{{}}}", role.name(), operations_signature(role.operations()))
        },
    }
}

fn operations_signature(operations: &IndexMap<String, Operation>) -> String {
    operations
        .values()
        .map(|op| format!(
            "{} {:?} ({}) -> {}",
            op.name(),
            op.kind(),
            op.parameters()
                .values()
                .map(|p| format!("{}: {}", p.name(), type_signature(p.type_ref())))
                .collect::<Vec<_>>()
                .join(", "),
            op.return_type().map_or_else(|| "void".to_string(), type_signature),
        ))
        .collect::<Vec<_>>()
        .join("; ")
}

/// The written form of a type plus what each named leaf resolved to.
fn type_signature(type_ref: &TypeRef) -> String {
    let targets = type_ref
        .named_type_refs()
        .iter()
        .map(|named| format!("{:?}", named.target()))
        .collect::<Vec<_>>()
        .join(",");
    format!("{} [{targets}]", type_ref.to_xidl_string())
}
