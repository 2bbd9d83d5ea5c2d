use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// One value of an enum type definition, optionally described.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: DirectiveVec,
    pub loc: Location,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}{}",
            description_prefix(&self.description),
            self.name.value,
            wrap(" ", &print_each(&self.directives).join(" "), ""),
        )
    }
}
