use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// A fragment spread: `...Name @directives`.
///
/// `name` is never the literal `on`; a spread followed by `on` parses
/// as an inline fragment instead.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: DirectiveVec,
    pub loc: Location,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "...{}{}",
            self.name.value,
            wrap(" ", &print_each(&self.directives).join(" "), ""),
        )
    }
}
