use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Location;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use inherent::inherent;

/// One top-level unit of a [`Document`](crate::ast::Document).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Directive(DirectiveDefinition),
    TypeExtension(TypeExtensionDefinition),
}

#[inherent]
impl AstNode for Definition {
    pub fn loc(&self) -> &Location {
        match self {
            Definition::Operation(definition) => definition.loc(),
            Definition::Fragment(definition) => definition.loc(),
            Definition::Schema(definition) => definition.loc(),
            Definition::Scalar(definition) => definition.loc(),
            Definition::Object(definition) => definition.loc(),
            Definition::Interface(definition) => definition.loc(),
            Definition::Union(definition) => definition.loc(),
            Definition::Enum(definition) => definition.loc(),
            Definition::InputObject(definition) => definition.loc(),
            Definition::Directive(definition) => definition.loc(),
            Definition::TypeExtension(definition) => definition.loc(),
        }
    }

    pub fn to_graphql(&self) -> String {
        match self {
            Definition::Operation(definition) => definition.to_graphql(),
            Definition::Fragment(definition) => definition.to_graphql(),
            Definition::Schema(definition) => definition.to_graphql(),
            Definition::Scalar(definition) => definition.to_graphql(),
            Definition::Object(definition) => definition.to_graphql(),
            Definition::Interface(definition) => definition.to_graphql(),
            Definition::Union(definition) => definition.to_graphql(),
            Definition::Enum(definition) => definition.to_graphql(),
            Definition::InputObject(definition) => definition.to_graphql(),
            Definition::Directive(definition) => definition.to_graphql(),
            Definition::TypeExtension(definition) => definition.to_graphql(),
        }
    }
}
