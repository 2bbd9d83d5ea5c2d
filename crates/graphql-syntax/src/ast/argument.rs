use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::Value;
use inherent::inherent;

/// A `name: value` pair in a field or directive argument list.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Location,
}

#[inherent]
impl AstNode for Argument {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("{}: {}", self.name.value, self.value.to_graphql())
    }
}
