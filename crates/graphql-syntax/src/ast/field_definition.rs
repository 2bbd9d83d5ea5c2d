use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// One output-field definition inside an object or interface type:
/// `name(arguments): Type @directives`, optionally described.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub type_annotation: TypeAnnotation,
    pub directives: DirectiveVec,
    pub loc: Location,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}{}: {}{}",
            description_prefix(&self.description),
            self.name.value,
            wrap("(", &print_each(&self.arguments).join(", "), ")"),
            self.type_annotation.to_graphql(),
            wrap(" ", &print_each(&self.directives).join(" "), ""),
        )
    }
}
