use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedTypeAnnotation;
use crate::ast::SelectionSet;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// A named fragment: `fragment Name on Type @directives { ... }`.
///
/// `name` is never the literal `on` — the parser rejects it, since `on`
/// introduces the type condition.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedTypeAnnotation,
    pub directives: DirectiveVec,
    pub selection_set: SelectionSet,
    pub loc: Location,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        join(
            &[
                "fragment".to_string(),
                self.name.value.clone(),
                "on".to_string(),
                self.type_condition.to_graphql(),
                print_each(&self.directives).join(" "),
                self.selection_set.to_graphql(),
            ],
            " ",
        )
    }
}
