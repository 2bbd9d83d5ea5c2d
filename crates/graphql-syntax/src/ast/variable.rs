use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use inherent::inherent;

/// A `$name` variable reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Location,
}

#[inherent]
impl AstNode for Variable {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("${}", self.name.value)
    }
}
