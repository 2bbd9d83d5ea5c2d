use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;

/// A float literal. `value` is the raw source text (e.g. `"-1.2e-3"`).
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Location,
}

#[inherent]
impl AstNode for FloatValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        self.value.clone()
    }
}
