use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// A field selection: `alias: name(arguments) @directives { ... }`.
///
/// See [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// in the GraphQL spec.
///
/// `arguments` and `directives` always materialize (empty when absent);
/// `selection_set` is `None` for leaf fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: DirectiveVec,
    pub selection_set: Option<SelectionSet>,
    pub loc: Location,
}

#[inherent]
impl AstNode for Field {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        let alias = self
            .alias
            .as_ref()
            .map(|alias| format!("{}: ", alias.value))
            .unwrap_or_default();
        let arguments = wrap("(", &print_each(&self.arguments).join(", "), ")");
        let selection_set = self
            .selection_set
            .as_ref()
            .map(|selection_set| selection_set.to_graphql())
            .unwrap_or_default();
        join(
            &[
                format!("{alias}{}{arguments}", self.name.value),
                print_each(&self.directives).join(" "),
                selection_set,
            ],
            " ",
        )
    }
}
