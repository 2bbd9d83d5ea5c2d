use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;

/// An enum value literal: a bare name in value position that is not
/// `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Location,
}

#[inherent]
impl AstNode for EnumValue {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        self.value.clone()
    }
}
