use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;
use smallvec::SmallVec;

/// Directive list storage. Uses SmallVec because directive lists are
/// always materialized but almost always hold zero or one entry.
pub type DirectiveVec = SmallVec<[Directive; 2]>;

/// A directive annotation: `@name(arguments)`.
///
/// Directive arguments are never a constant context — `@skip(if: $x)`
/// is legal wherever directives are.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Location,
}

#[inherent]
impl AstNode for Directive {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "@{}{}",
            self.name.value,
            wrap("(", &print_each(&self.arguments).join(", "), ")"),
        )
    }
}
