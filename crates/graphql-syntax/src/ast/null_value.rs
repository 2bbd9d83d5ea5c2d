use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;

/// The `null` literal.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Location,
}

#[inherent]
impl AstNode for NullValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        "null".to_string()
    }
}
