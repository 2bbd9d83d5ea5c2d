use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names)
/// (identifier).
///
/// Names appear as type names, field names, aliases, argument names,
/// directive names, enum values, and directive locations. Any `Name`
/// token is accepted in a name position — including `on`, `query`,
/// `true`, and the other contextual keywords.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Location,
}

#[inherent]
impl AstNode for Name {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        self.value.clone()
    }
}
