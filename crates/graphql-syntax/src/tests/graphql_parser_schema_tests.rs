//! Parser tests for type-system definitions and description
//! attachment.

use crate::ast::Definition;
use crate::ast::NullableTypeAnnotation;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::tests::utils::error_header;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;

fn single_definition(source: &str) -> Definition {
    let mut document = parse_ok(source);
    assert_eq!(document.definitions.len(), 1, "for {source:?}");
    document.definitions.remove(0)
}

// =============================================================================
// Object, interface, scalar
// =============================================================================

#[test]
fn parses_object_type_definition() {
    let Definition::Object(object) = single_definition("type Hello { world: String }") else {
        panic!("expected an object type definition");
    };
    assert_eq!(object.name.value, "Hello");
    assert!(object.description.is_none());
    assert_eq!(object.fields.len(), 1);

    let field = &object.fields[0];
    assert_eq!(field.name.value, "world");
    match &field.type_annotation {
        TypeAnnotation::Named(named) => assert_eq!(named.name.value, "String"),
        other => panic!("expected a named type, got {other:?}"),
    }
}

#[test]
fn parses_non_null_and_list_types() {
    let Definition::Object(object) =
        single_definition("type Hello { world: [String]!, again: [String!] }")
    else {
        panic!("expected an object type definition");
    };

    match &object.fields[0].type_annotation {
        TypeAnnotation::NonNull(non_null) => {
            assert!(matches!(&non_null.wrapped, NullableTypeAnnotation::List(_)));
        }
        other => panic!("expected a non-null type, got {other:?}"),
    }
    match &object.fields[1].type_annotation {
        TypeAnnotation::List(list) => {
            assert!(matches!(list.wrapped.as_ref(), TypeAnnotation::NonNull(_)));
        }
        other => panic!("expected a list type, got {other:?}"),
    }
}

#[test]
fn parses_implements_list_with_ampersands() {
    for source in [
        "type Hello implements World { field: Int }",
        "type Hello implements Wo & rld { field: Int }",
        "type Hello implements & Wo & rld { field: Int }",
    ] {
        let Definition::Object(object) = single_definition(source) else {
            panic!("expected an object type definition for {source:?}");
        };
        assert!(!object.interfaces.is_empty(), "for {source:?}");
    }
}

#[test]
fn parses_field_arguments_with_defaults() {
    let Definition::Object(object) =
        single_definition("type Hello { world(flag: Boolean = true): String }")
    else {
        panic!("expected an object type definition");
    };
    let argument = &object.fields[0].arguments[0];
    assert_eq!(argument.name.value, "flag");
    assert!(matches!(&argument.default_value, Some(Value::Boolean(b)) if b.value));
}

#[test]
fn parses_interface_type_definition() {
    let Definition::Interface(interface) =
        single_definition("interface Node { id: ID! }")
    else {
        panic!("expected an interface type definition");
    };
    assert_eq!(interface.name.value, "Node");
    assert_eq!(interface.fields.len(), 1);
}

#[test]
fn parses_scalar_type_definition() {
    let Definition::Scalar(scalar) = single_definition("scalar Hello") else {
        panic!("expected a scalar type definition");
    };
    assert_eq!(scalar.name.value, "Hello");
}

// =============================================================================
// Schema, union, enum, input, directive, extend
// =============================================================================

#[test]
fn parses_schema_definition() {
    let Definition::Schema(schema) =
        single_definition("schema {\n  query: QueryRoot\n  mutation: MutationRoot\n}")
    else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.operation_types.len(), 2);
    assert_eq!(schema.operation_types[0].type_annotation.name.value, "QueryRoot");
}

/// Operation names inside `schema { ... }` must be one of the three
/// operation keywords.
#[test]
fn rejects_unknown_schema_operation_types() {
    let error = parse_err("schema { weird: W }");
    assert_eq!(
        error_header(&error),
        "Syntax Error GraphQL (1:10) Unexpected Name \"weird\"",
    );
}

#[test]
fn parses_union_type_definitions() {
    let Definition::Union(union) = single_definition("union Feed = Story | Article | Advert")
    else {
        panic!("expected a union type definition");
    };
    let members: Vec<&str> = union
        .types
        .iter()
        .map(|member| member.name.value.as_str())
        .collect();
    assert_eq!(members, vec!["Story", "Article", "Advert"]);
}

#[test]
fn rejects_union_with_leading_pipe() {
    let error = parse_err("union Feed = | Story");
    assert_eq!(
        error_header(&error),
        "Syntax Error GraphQL (1:14) Expected Name, found |",
    );
}

#[test]
fn parses_enum_type_definition() {
    let Definition::Enum(definition) = single_definition("enum Site { DESKTOP MOBILE }") else {
        panic!("expected an enum type definition");
    };
    assert_eq!(definition.values.len(), 2);
    assert_eq!(definition.values[0].name.value, "DESKTOP");
}

#[test]
fn parses_input_object_type_definition() {
    let Definition::InputObject(input) =
        single_definition("input InputType {\n  key: String!\n  answer: Int = 42\n}")
    else {
        panic!("expected an input object type definition");
    };
    assert_eq!(input.fields.len(), 2);
    assert!(matches!(&input.fields[1].default_value, Some(Value::Int(v)) if v.value == "42"));
}

#[test]
fn parses_directive_definition() {
    let Definition::Directive(directive) = single_definition(
        "directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT",
    ) else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name.value, "skip");
    assert_eq!(directive.arguments.len(), 1);
    let locations: Vec<&str> = directive
        .locations
        .iter()
        .map(|location| location.value.as_str())
        .collect();
    assert_eq!(locations, vec!["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]);
}

#[test]
fn parses_type_extension() {
    let Definition::TypeExtension(extension) =
        single_definition("extend type Hello { world: String }")
    else {
        panic!("expected a type extension");
    };
    assert_eq!(extension.definition.name.value, "Hello");
    assert_eq!(extension.definition.fields.len(), 1);
}

// =============================================================================
// Descriptions
// =============================================================================

/// Single-line and block-string descriptions attach to every
/// type-system definition kind.
#[test]
fn attaches_descriptions_to_type_system_definitions() {
    let cases = [
        (
            "\"cool skip\"\ndirective @skip(if: Boolean!) on FIELD",
            "cool skip",
        ),
        (
            "\"\"\"\nInputType is indeed a type\n\"\"\"\ninput InputType { key: String! }",
            "InputType is indeed a type",
        ),
        ("\"\"\"\ndescription 2\n\"\"\"\nenum Site { DESKTOP }", "description 2"),
        ("\"\"\"\nCruft ...\n\"\"\"\nunion Cruft = Foo | Bar", "Cruft ..."),
        (
            "\"\"\"\nBar is an interface\n\"\"\"\ninterface Bar { foo: String! }",
            "Bar is an interface",
        ),
        (
            "\"\"\"\n\u{2605} Foo \u{2605}\n\"\"\"\ntype Foo implements Bar { foo: String! }",
            "\u{2605} Foo \u{2605}",
        ),
        (
            "\"\"\"\nReturns RFC666; includes timezone offset.\n\"\"\"\nscalar TimeWithZone",
            "Returns RFC666; includes timezone offset.",
        ),
        ("\"the roots\"\nschema { query: Q }", "the roots"),
    ];
    for (source, expected) in cases {
        let definition = single_definition(source);
        let description = match &definition {
            Definition::Schema(d) => &d.description,
            Definition::Scalar(d) => &d.description,
            Definition::Object(d) => &d.description,
            Definition::Interface(d) => &d.description,
            Definition::Union(d) => &d.description,
            Definition::Enum(d) => &d.description,
            Definition::InputObject(d) => &d.description,
            Definition::Directive(d) => &d.description,
            other => panic!("unexpected definition {other:?}"),
        };
        assert_eq!(
            description.as_ref().map(|d| d.value.as_str()),
            Some(expected),
            "for {source:?}",
        );
    }
}

/// Block-string descriptions on nested field definitions keep their
/// dedented value.
#[test]
fn attaches_descriptions_to_field_definitions() {
    let Definition::Object(object) = single_definition(
        "type Foo implements Bar {\n  \"\"\"\n  foo is quite the field.\n  \"\"\"\n  foo: String!\n}",
    ) else {
        panic!("expected an object type definition");
    };
    assert_eq!(
        object.fields[0].description.as_ref().map(|d| d.value.as_str()),
        Some("foo is quite the field."),
    );
}

#[test]
fn attaches_descriptions_to_input_value_definitions() {
    let Definition::Object(object) = single_definition(
        "type Foo {\n  foo(\n    \"\"\"\n    input value comment\n    \"\"\"\n    bar: String!\n  ): String!\n}",
    ) else {
        panic!("expected an object type definition");
    };
    let argument = &object.fields[0].arguments[0];
    assert_eq!(
        argument.description.as_ref().map(|d| d.value.as_str()),
        Some("input value comment"),
    );
}

#[test]
fn attaches_descriptions_to_enum_value_definitions() {
    let Definition::Enum(definition) = single_definition(
        "enum Site {\n  \"description 1\"\n  DESKTOP\n  \"\"\"\n  description 2\n  \"\"\"\n  MOBILE\n}",
    ) else {
        panic!("expected an enum type definition");
    };
    assert_eq!(
        definition.values[0].description.as_ref().map(|d| d.value.as_str()),
        Some("description 1"),
    );
    assert_eq!(
        definition.values[1].description.as_ref().map(|d| d.value.as_str()),
        Some("description 2"),
    );
}

/// A description must be followed by a type-system keyword.
#[test]
fn rejects_dangling_descriptions() {
    let error = parse_err("\"lonely description\" wat");
    assert_eq!(
        error_header(&error),
        "Syntax Error GraphQL (1:22) Unexpected Name \"wat\"",
    );

    let error = parse_err("\"lonely description\"");
    assert_eq!(
        error_header(&error),
        "Syntax Error GraphQL (1:21) Unexpected EOF",
    );
}

/// Top-level strings never attach to executable definitions.
#[test]
fn rejects_descriptions_on_operations() {
    let error = parse_err("\"not a description\" query Foo { field }");
    assert_eq!(
        error_header(&error),
        "Syntax Error GraphQL (1:21) Unexpected Name \"query\"",
    );
}

/// The original open question: any unrecognized leading name is
/// reported uniformly.
#[test]
fn rejects_bare_string_type_as_definition() {
    let error = parse_err("String");
    assert_eq!(
        error_header(&error),
        "Syntax Error GraphQL (1:1) Unexpected Name \"String\"",
    );
}
