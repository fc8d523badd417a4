//! End-to-end validation of complete documents and the resolved model's
//! query interface.

use crate::tests::utils::validate_ok;
use crate::tests::utils::CUSTOMERS_DOCUMENT;
use crate::BuiltinScalar;
use crate::ConstValue;
use crate::Declaration;
use crate::NamedTypeTarget;
use crate::OperationKind;
use crate::TypeRef;

/// Verifies that the `customers` document validates with no diagnostics
/// and that its namespace and declaration order survive.
#[test]
fn customers_document_validates() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);

    assert_eq!(document.namespace(), Some("acme.customers"));
    let names: Vec<&str> = document.declarations().keys().map(String::as_str).collect();
    assert_eq!(
        names,
        ["CustomerId", "Customer", "PhoneNumber", "Address", "PhoneKind", "Tier", "Admin"],
    );
    assert_eq!(document.object_types().count(), 3);
    assert_eq!(document.enum_types().count(), 2);
    assert_eq!(document.scalar_aliases().count(), 1);
    assert_eq!(document.roles().count(), 1);
}

/// Verifies the kind-specific lookups return `None` for a name declared as
/// a different kind.
#[test]
fn typed_lookups_filter_by_kind() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);

    assert!(document.object_type("Customer").is_some());
    assert!(document.enum_type("Customer").is_none());
    assert!(document.scalar_alias("Customer").is_none());
    assert!(document.role("Customer").is_none());

    assert!(document.enum_type("Tier").is_some());
    assert!(document.role("Admin").is_some());
    assert_eq!(document.scalar_alias("CustomerId").unwrap().aliased(), BuiltinScalar::U64);
    assert!(document.declaration("Nope").is_none());
}

/// Verifies that descriptions are kept on declarations and fields, with
/// block strings de-indented.
#[test]
fn descriptions_are_kept() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);

    let customer = document.object_type("Customer").unwrap();
    assert_eq!(customer.description(), Some("A customer of the shop."));
    assert_eq!(customer.field("name").unwrap().description(), Some("Full name, as entered."));
    assert_eq!(customer.field("id").unwrap().description(), None);

    let interface = document.interface().unwrap();
    assert_eq!(interface.description(), Some("Operations available to every caller."));
}

/// Verifies field order, optionality and resolved targets of `Customer`.
#[test]
fn customer_fields_resolve() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);
    let customer = document.object_type("Customer").unwrap();

    let field_names: Vec<&str> = customer.fields().keys().map(String::as_str).collect();
    assert_eq!(
        field_names,
        ["id", "name", "age", "phones", "address", "tags", "referrer", "scores", "tier"],
    );

    let id = customer.field("id").unwrap();
    assert!(!id.optional());
    assert_eq!(
        id.type_ref().as_named().unwrap().target(),
        NamedTypeTarget::ScalarAlias(BuiltinScalar::U64),
    );
    assert_eq!(id.parent_type_name(), "Customer");

    assert!(customer.field("phones").unwrap().optional());
    assert!(customer.field("address").unwrap().optional());
    assert!(customer.field("referrer").unwrap().optional());
    assert!(!customer.field("tags").unwrap().optional());

    let referrer = customer.field("referrer").unwrap().type_ref().strip_optional();
    assert_eq!(referrer.as_named().unwrap().target(), NamedTypeTarget::ObjectType);
    assert_eq!(referrer.as_named().unwrap().name(), "Customer");
}

/// Verifies the defaults of the `customers` document are converted to
/// typed values.
#[test]
fn customer_defaults_convert() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);
    let customer = document.object_type("Customer").unwrap();

    assert_eq!(customer.field("age").unwrap().default_value(), Some(&ConstValue::Int(18)));
    assert_eq!(
        customer.field("tier").unwrap().default_value(),
        Some(&ConstValue::EnumSymbol {
            enum_name: "Tier".to_string(),
            symbol: "Free".to_string(),
            discriminant: 0,
        }),
    );
    assert_eq!(customer.field("name").unwrap().default_value(), None);
}

/// Verifies enum values keep their discriminants and display names, and can
/// be found by discriminant.
#[test]
fn enum_values_resolve() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);
    let phone_kind = document.enum_type("PhoneKind").unwrap();

    assert_eq!(phone_kind.values().len(), 3);
    let home = phone_kind.value("Home").unwrap();
    assert_eq!(home.discriminant(), 2);
    assert_eq!(home.display_name(), "Home");
    assert_eq!(phone_kind.value_by_discriminant(3).unwrap().name(), "Work");
    assert!(phone_kind.value_by_discriminant(4).is_none());
}

/// Verifies interface and role operations, including `void` returns.
#[test]
fn operations_resolve() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);

    let interface = document.interface().unwrap();
    let create = interface.operation("createCustomer").unwrap();
    assert_eq!(create.kind(), OperationKind::Unary);
    assert_eq!(create.parameters().len(), 1);
    assert_eq!(
        create.return_type().unwrap().as_named().unwrap().target(),
        NamedTypeTarget::ScalarAlias(BuiltinScalar::U64),
    );
    assert!(interface.operation("deleteCustomer").unwrap().return_type().is_none());

    let admin = document.role("Admin").unwrap();
    let list = admin.operation("listCustomers").unwrap();
    assert_eq!(list.kind(), OperationKind::Function);
    let param_names: Vec<&str> = list.parameters().keys().map(String::as_str).collect();
    assert_eq!(param_names, ["offset", "limit"]);
    assert!(matches!(list.return_type(), Some(TypeRef::List { .. })));
    assert!(admin.operation("purge").unwrap().parameters().is_empty());
}

/// Verifies that every named reference in the validated document resolves
/// to exactly one declaration or built-in.
#[test]
fn every_named_reference_resolves() {
    let document = validate_ok(CUSTOMERS_DOCUMENT);

    let mut type_refs: Vec<&TypeRef> = vec![];
    for declaration in document.declarations().values() {
        match declaration {
            Declaration::ObjectType(object_type) => {
                type_refs.extend(object_type.fields().values().map(|f| f.type_ref()));
            },
            Declaration::Role(role) => {
                for operation in role.operations().values() {
                    type_refs.extend(operation.parameters().values().map(|p| p.type_ref()));
                    type_refs.extend(operation.return_type());
                }
            },
            Declaration::ScalarAlias(_) | Declaration::Enum(_) => (),
        }
    }
    for operation in document.interface().unwrap().operations().values() {
        type_refs.extend(operation.parameters().values().map(|p| p.type_ref()));
        type_refs.extend(operation.return_type());
    }

    let named: Vec<_> = type_refs.iter().flat_map(|t| t.named_type_refs()).collect();
    assert!(named.len() > 20);
    for named_ref in named {
        assert!(
            named_ref.deref(&document).is_ok(),
            "`{}` failed to resolve",
            named_ref.name(),
        );
    }
}

/// Verifies that a document with no declarations at all is valid.
#[test]
fn empty_document_validates() {
    let document = validate_ok("");
    assert!(document.namespace().is_none());
    assert!(document.declarations().is_empty());
    assert!(document.interface().is_none());
}

/// Verifies the minimal four-line `customers` document: one-line bodies,
/// lowercase enum values and a role function returning `u64`.
#[test]
fn minimal_customers_scenario_validates() {
    let document = validate_ok(
        r#"
namespace "customers"
type Customer { firstName: string middleName: string? }
enum PhoneType { mobile = 0 "Mobile" home = 1 "Home" }
role CustomerStore { createCustomer(firstName: string, lastName: string): u64 }
"#,
    );

    assert_eq!(document.namespace(), Some("customers"));
    assert_eq!(document.declarations().len(), 3);
    assert!(document.interface().is_none());

    let object_types: Vec<_> = document.object_types().collect();
    assert_eq!(object_types.len(), 1);
    let customer = object_types[0];
    assert_eq!(customer.name(), "Customer");
    let fields: Vec<_> = customer.fields().values().collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name(), "firstName");
    assert!(!fields[0].optional());
    assert_eq!(fields[1].name(), "middleName");
    assert!(fields[1].optional());

    let enum_types: Vec<_> = document.enum_types().collect();
    assert_eq!(enum_types.len(), 1);
    let discriminants: Vec<i64> = enum_types[0]
        .values()
        .values()
        .map(|value| value.discriminant())
        .collect();
    assert_eq!(discriminants, [0, 1]);
    assert_eq!(enum_types[0].value("mobile").unwrap().display_name(), "Mobile");

    let roles: Vec<_> = document.roles().collect();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name(), "CustomerStore");
    assert_eq!(roles[0].operations().len(), 1);
    let operation = roles[0].operation("createCustomer").unwrap();
    assert_eq!(operation.kind(), OperationKind::Function);
    assert_eq!(operation.parameters().len(), 2);
    let return_type = operation.return_type().unwrap();
    assert_eq!(return_type.to_xidl_string(), "u64");
    assert_eq!(
        return_type.as_named().unwrap().target(),
        NamedTypeTarget::Builtin(BuiltinScalar::U64),
    );
}
