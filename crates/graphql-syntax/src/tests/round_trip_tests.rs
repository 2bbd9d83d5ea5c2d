//! Print/parse round-trip coverage: the canonical printer's output
//! reaches a fixed point, and cooked values survive re-parsing.

use crate::ast::Location;
use crate::ast::StringValue;
use crate::ast::Value;
use crate::parse;
use crate::tests::utils::first_field;
use crate::tests::utils::parse_ok;
use crate::tests::utils::single_operation;
use proptest::prelude::*;

/// Executable-document kitchen sink: operations of every kind,
/// fragments, directives, aliases, and nested values.
const KITCHEN_SINK_QUERY: &str = r#"query queryName($foo: ComplexType, $site: Site = MOBILE) @onQuery {
  whoever123is: node(id: [123, 456]) {
    id
    ... on User @defer {
      field2 {
        alias: field1(first: 10, after: $foo) @include(if: $foo) {
          id
          ...frag
        }
      }
    }
    ... @skip(unless: $foo) {
      id
    }
    ... {
      id
    }
  }
}

mutation likeStory @onMutation {
  like(story: 123) @onField {
    story {
      id @onField
    }
  }
}

subscription StoryLikeSubscription($input: StoryLikeSubscribeInput) @onSubscription {
  storyLikeSubscribe(input: $input) {
    story {
      likers { count }
      likeSentence { text }
    }
  }
}

fragment frag on Friend @onFragment {
  foo(size: $size, bar: $b, obj: {key: "value", nested: [null, true, RED, 1.5]})
}

{
  unnamed(truthy: true, falsey: false, nullish: null)
  query
}
"#;

/// Type-system kitchen sink: every definition kind, descriptions at
/// every level, extensions, and defaults.
const KITCHEN_SINK_SCHEMA: &str = r#""""
A schema for everything.
"""
schema @onSchema {
  query: QueryType
  mutation: MutationType
}

"The root query"
type QueryType implements Node & Queryable @onObject {
  "fetch a node"
  node(
    "which one"
    id: ID! = 4
  ): Node @deprecated(reason: "use nodes")
  nodes(ids: [ID!]!): [Node]
}

interface Node {
  id: ID!
}

union Feed = Story | Article

"""
Time, with zone.
"""
scalar TimeWithZone @onScalar

enum Site {
  "desktop variant"
  DESKTOP
  MOBILE @onEnumValue
}

input StoryLikeSubscribeInput {
  story: String = "default \"quoted\" text"
  likers: [Int!]
}

directive @delegate(to: String!) on FIELD | FRAGMENT_SPREAD

extend type QueryType {
  extra: String
}
"#;

/// Printing a parsed document and re-parsing the result must converge:
/// `print(parse(print(parse(d))))` equals `print(parse(d))`.
fn assert_print_fixed_point(source: &str) {
    let once = parse_ok(source).to_graphql();
    let document = parse(once.as_str())
        .unwrap_or_else(|error| panic!("printed document should re-parse:\n{error}\n---\n{once}"));
    let twice = document.to_graphql();
    assert_eq!(once, twice, "printer output is not a fixed point");
}

#[test]
fn kitchen_sink_query_round_trips() {
    assert_print_fixed_point(KITCHEN_SINK_QUERY);
}

#[test]
fn kitchen_sink_schema_round_trips() {
    assert_print_fixed_point(KITCHEN_SINK_SCHEMA);
}

/// Multi-byte text earlier in a source must not perturb the printed
/// tree.
#[test]
fn multi_byte_sources_round_trip() {
    let source = "# фы世界 comment\n{ field(arg: \"фы世界 value\") }";
    assert_print_fixed_point(source);
}

#[test]
fn prints_shorthand_operations_bare() {
    assert_eq!(parse_ok("{ field }").to_graphql(), "{\n  field\n}\n");
}

#[test]
fn prints_operation_headers_canonically() {
    let printed = parse_ok("query Foo ($x: Int = 1) @dir { a : b ( c : 4 ) }").to_graphql();
    assert_eq!(printed, "query Foo($x: Int = 1) @dir {\n  a: b(c: 4)\n}\n");
}

proptest! {
    /// Generated field arguments survive a print/parse cycle: the
    /// printed form is a fixed point and the cooked string value is
    /// preserved exactly.
    #[test]
    fn printed_documents_reach_a_fixed_point(
        name in "[A-Za-z_][_0-9A-Za-z]{0,8}",
        int in any::<i64>(),
        text in "[ -~]{0,20}",
        flag in any::<bool>(),
    ) {
        let string_literal = StringValue {
            value: text.clone(),
            loc: Location::new(0, 0),
        }
        .to_graphql();
        let source = format!("{{ {name}(i: {int}, s: {string_literal}, f: {flag}) }}");

        let document = parse(source.as_str()).expect("generated document should parse");
        let operation = single_operation(&document);
        let field = first_field(&operation.selection_set);
        prop_assert_eq!(&field.name.value, &name);
        match &field.arguments[1].value {
            Value::String(string_value) => prop_assert_eq!(&string_value.value, &text),
            other => panic!("expected a string argument, got {other:?}"),
        }

        let once = document.to_graphql();
        let twice = parse(once.as_str())
            .expect("printed document should re-parse")
            .to_graphql();
        prop_assert_eq!(once, twice);
    }
}
