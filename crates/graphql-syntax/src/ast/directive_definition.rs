use crate::ast::AstNode;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// `directive @name(arguments) on LOCATION | LOCATION`
///
/// Locations are plain names (`FIELD`, `FRAGMENT_SPREAD`, ...); the
/// parser does not validate them against the known location set — that
/// belongs to schema validation.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<Name>,
    pub loc: Location,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        let locations: Vec<String> = self
            .locations
            .iter()
            .map(|location| location.value.clone())
            .collect();
        format!(
            "{}directive @{}{} on {}",
            description_prefix(&self.description),
            self.name.value,
            wrap("(", &print_each(&self.arguments).join(", "), ")"),
            locations.join(" | "),
        )
    }
}
