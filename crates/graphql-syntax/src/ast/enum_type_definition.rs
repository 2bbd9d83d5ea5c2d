use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::EnumValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::ast_node::block;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// `enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: DirectiveVec,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Location,
}

#[inherent]
impl AstNode for EnumTypeDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}",
            description_prefix(&self.description),
            join(
                &[
                    "enum".to_string(),
                    self.name.value.clone(),
                    print_each(&self.directives).join(" "),
                    block(&print_each(&self.values)),
                ],
                " ",
            ),
        )
    }
}
