use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// A query, mutation, or subscription operation.
///
/// The shorthand form `{ field }` produces an anonymous `query`
/// operation. `variable_definitions` and `directives` are always
/// materialized; absence is the empty collection.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: DirectiveVec,
    pub selection_set: SelectionSet,
    pub loc: Location,
}

impl OperationDefinition {
    /// Whether this operation can print in the `{ field }` shorthand
    /// form: an anonymous query with no variables or directives.
    fn is_shorthand(&self) -> bool {
        self.operation == OperationType::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        if self.is_shorthand() {
            return self.selection_set.to_graphql();
        }

        let name = self
            .name
            .as_ref()
            .map(|name| name.value.clone())
            .unwrap_or_default();
        let variable_definitions = wrap(
            "(",
            &print_each(&self.variable_definitions).join(", "),
            ")",
        );
        join(
            &[
                self.operation.as_str().to_string(),
                format!("{name}{variable_definitions}"),
                print_each(&self.directives).join(" "),
                self.selection_set.to_graphql(),
            ],
            " ",
        )
    }
}
