use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;

/// An integer literal. `value` is the raw source text (e.g. `"-42"`),
/// left unconverted so callers choose their own integer width.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub loc: Location,
}

#[inherent]
impl AstNode for IntValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        self.value.clone()
    }
}
