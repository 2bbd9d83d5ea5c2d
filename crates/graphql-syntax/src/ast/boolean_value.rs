use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;

/// A `true` or `false` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Location,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        if self.value { "true" } else { "false" }.to_string()
    }
}
