use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::ast_node::quote_string;
use inherent::inherent;

/// A string literal, from either a `"..."` string or a `"""..."""`
/// block string.
///
/// `value` is the cooked content: escape sequences resolved, and for
/// block strings the common indentation and surrounding blank lines
/// stripped. The two source forms are indistinguishable in the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub loc: Location,
}

#[inherent]
impl AstNode for StringValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        quote_string(&self.value)
    }
}
