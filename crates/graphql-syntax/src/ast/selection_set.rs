use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Selection;
use crate::ast::ast_node::block;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// A braced group of selections. The grammar requires at least one
/// selection, so `selections` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Location,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        block(&print_each(&self.selections))
    }
}
