use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::FieldDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedTypeAnnotation;
use crate::ast::StringValue;
use crate::ast::ast_node::block;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// `type Name implements A & B @directives { fields }`
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub interfaces: Vec<NamedTypeAnnotation>,
    pub directives: DirectiveVec,
    pub fields: Vec<FieldDefinition>,
    pub loc: Location,
}

#[inherent]
impl AstNode for ObjectTypeDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}",
            description_prefix(&self.description),
            join(
                &[
                    "type".to_string(),
                    self.name.value.clone(),
                    wrap("implements ", &print_each(&self.interfaces).join(" & "), ""),
                    print_each(&self.directives).join(" "),
                    block(&print_each(&self.fields)),
                ],
                " ",
            ),
        )
    }
}
