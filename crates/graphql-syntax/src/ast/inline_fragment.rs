use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::NamedTypeAnnotation;
use crate::ast::SelectionSet;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// An inline fragment: `... on Type @directives { ... }`.
///
/// The type condition is optional (`... @include(if: $x) { ... }` is
/// legal), but when the `on` keyword is present a named type must
/// follow.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedTypeAnnotation>,
    pub directives: DirectiveVec,
    pub selection_set: SelectionSet,
    pub loc: Location,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        let type_condition = self
            .type_condition
            .as_ref()
            .map(|condition| condition.to_graphql())
            .unwrap_or_default();
        join(
            &[
                "...".to_string(),
                wrap("on ", &type_condition, ""),
                print_each(&self.directives).join(" "),
                self.selection_set.to_graphql(),
            ],
            " ",
        )
    }
}
