use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedTypeAnnotation;
use crate::ast::StringValue;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::join;
use crate::ast::ast_node::print_each;
use inherent::inherent;

/// `union Name @directives = A | B`
///
/// The member list has at least one entry and no leading pipe.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: DirectiveVec,
    pub types: Vec<NamedTypeAnnotation>,
    pub loc: Location,
}

#[inherent]
impl AstNode for UnionTypeDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!(
            "{}{}",
            description_prefix(&self.description),
            join(
                &[
                    "union".to_string(),
                    self.name.value.clone(),
                    print_each(&self.directives).join(" "),
                    "=".to_string(),
                    print_each(&self.types).join(" | "),
                ],
                " ",
            ),
        )
    }
}
