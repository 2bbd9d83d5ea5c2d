use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::NamedTypeAnnotation;
use crate::ast::OperationType;
use crate::ast::StringValue;
use crate::ast::ast_node::block;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// A `schema { query: Query ... }` definition mapping operation kinds
/// to their root types.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,
    pub directives: DirectiveVec,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub loc: Location,
}

/// One `query: TypeName` entry of a [`SchemaDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub type_annotation: NamedTypeAnnotation,
    pub loc: Location,
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}",
            description_prefix(&self.description),
            join(
                &[
                    "schema".to_string(),
                    print_each(&self.directives).join(" "),
                    block(&print_each(&self.operation_types)),
                ],
                " ",
            ),
        )
    }
}

#[inherent]
impl AstNode for OperationTypeDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("{}: {}", self.operation, self.type_annotation.to_graphql())
    }
}
