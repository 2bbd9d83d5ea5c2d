use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::FieldDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::ast_node::block;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// `interface Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: DirectiveVec,
    pub fields: Vec<FieldDefinition>,
    pub loc: Location,
}

#[inherent]
impl AstNode for InterfaceTypeDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}",
            description_prefix(&self.description),
            join(
                &[
                    "interface".to_string(),
                    self.name.value.clone(),
                    print_each(&self.directives).join(" "),
                    block(&print_each(&self.fields)),
                ],
                " ",
            ),
        )
    }
}
