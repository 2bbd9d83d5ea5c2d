//! AST node types for parsed GraphQL documents.
//!
//! Every node owns its strings and carries a [`Location`]: a half-open
//! byte range into the originating [`Source`](crate::Source), plus an
//! optional shared back-reference to it (omitted when parsing with
//! `no_source`).
//!
//! Union-like grammar productions ([`Definition`], [`Selection`],
//! [`Value`], [`TypeAnnotation`]) are closed enums, so consumers match
//! exhaustively. [`NonNullTypeAnnotation`] wraps a
//! [`NullableTypeAnnotation`], making non-null-of-non-null
//! unrepresentable.
//!
//! All nodes implement [`AstNode`] inherently, providing `loc()` and
//! `to_graphql()` — the canonical pretty-printer used for round-trip
//! checks.

mod argument;
mod ast_node;
mod boolean_value;
mod definition;
mod directive;
mod directive_definition;
mod document;
mod enum_type_definition;
mod enum_value;
mod enum_value_definition;
mod field;
mod field_definition;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_type_definition;
mod input_value_definition;
mod int_value;
mod interface_type_definition;
mod list_value;
mod location;
mod name;
mod null_value;
mod object_type_definition;
mod object_value;
mod operation_definition;
mod operation_type;
mod scalar_type_definition;
mod schema_definition;
mod selection;
mod selection_set;
mod string_value;
mod type_annotation;
mod type_extension_definition;
mod union_type_definition;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use definition::Definition;
pub use directive::Directive;
pub use directive::DirectiveVec;
pub use directive_definition::DirectiveDefinition;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use int_value::IntValue;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use list_value::ListValue;
pub use location::Location;
pub use name::Name;
pub use null_value::NullValue;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_value::ObjectField;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::OperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_annotation::ListTypeAnnotation;
pub use type_annotation::NamedTypeAnnotation;
pub use type_annotation::NonNullTypeAnnotation;
pub use type_annotation::NullableTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use type_extension_definition::TypeExtensionDefinition;
pub use union_type_definition::UnionTypeDefinition;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
