use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Value;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// A `[a, b, c]` list literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Location,
}

#[inherent]
impl AstNode for ListValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("[{}]", print_each(&self.values).join(", "))
    }
}
