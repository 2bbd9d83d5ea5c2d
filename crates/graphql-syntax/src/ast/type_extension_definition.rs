use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::ObjectTypeDefinition;
use inherent::inherent;

/// `extend type Name { ... }` — an object type extension.
///
/// Extensions do not take a leading description of their own; the
/// wrapped definition is parsed exactly like a `type` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectTypeDefinition,
    pub loc: Location,
}

#[inherent]
impl AstNode for TypeExtensionDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("extend {}", self.definition.to_graphql())
    }
}
