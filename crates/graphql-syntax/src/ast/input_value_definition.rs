use crate::ast::AstNode;
use crate::ast::DirectiveVec;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::ast_node::description_prefix;
use crate::ast::ast_node::print_each;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// An input value definition: an argument of a field or directive
/// definition, or a field of an input object type.
///
/// `name: Type = default @directives`, optionally described. The
/// default value is parsed in a constant context.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: DirectiveVec,
    pub loc: Location,
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        let default_value = self
            .default_value
            .as_ref()
            .map(|value| value.to_graphql())
            .unwrap_or_default();
        format!(
            "{}{}: {}{}{}",
            description_prefix(&self.description),
            self.name.value,
            self.type_annotation.to_graphql(),
            wrap(" = ", &default_value, ""),
            wrap(" ", &print_each(&self.directives).join(" "), ""),
        )
    }
}
