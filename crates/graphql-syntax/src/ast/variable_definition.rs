use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::ast_node::wrap;
use inherent::inherent;

/// One `$variable: Type = default` entry in an operation's variable
/// definition list.
///
/// The default value, when present, was parsed in a constant context:
/// it can never contain a variable reference, at any nesting depth.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub loc: Location,
}

#[inherent]
impl AstNode for VariableDefinition {
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
            "{}: {}{}",
            self.variable.to_graphql(),
            self.type_annotation.to_graphql(),
            wrap(" = ", &default_value, ""),
        )
    }
}
