use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::Value;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// A `{key: value, ...}` input object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Location,
}

/// One `key: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Location,
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("{{{}}}", print_each(&self.fields).join(", "))
    }
}

#[inherent]
impl AstNode for ObjectField {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("{}: {}", self.name.value, self.value.to_graphql())
    }
}
