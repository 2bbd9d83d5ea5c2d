use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::Location;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// A complete parsed GraphQL document: one or more top-level
/// definitions (executable or type-system), in source order.
///
/// This is the sole owner of the tree a parse produces; the tree is
/// immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Location,
}

#[inherent]
impl AstNode for Document {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        let mut out = print_each(&self.definitions).join("\n\n");
        out.push('\n');
        out
    }
}
