use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::ast_node::block;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: DirectiveVec,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Location,
}

#[inherent]
impl AstNode for InputObjectTypeDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}",
            description_prefix(&self.description),
            join(
                &[
                    "input".to_string(),
                    self.name.value.clone(),
                    print_each(&self.directives).join(" "),
                    block(&print_each(&self.fields)),
                ],
                " ",
            ),
        )
    }
}
