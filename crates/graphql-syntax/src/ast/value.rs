use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::Location;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Variable;
use inherent::inherent;

/// A GraphQL
/// [input value](https://spec.graphql.org/October2021/#sec-Input-Values).
///
/// List and object values nest further values arbitrarily deep. In a
/// constant context (variable-definition and input-value default
/// values) the `Variable` variant never occurs — the parser rejects
/// `$` there at any nesting depth.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

#[inherent]
impl AstNode for Value {
    pub fn loc(&self) -> &Location {
        match self {
            Value::Variable(value) => value.loc(),
            Value::Int(value) => value.loc(),
            Value::Float(value) => value.loc(),
            Value::String(value) => value.loc(),
            Value::Boolean(value) => value.loc(),
            Value::Null(value) => value.loc(),
            Value::Enum(value) => value.loc(),
            Value::List(value) => value.loc(),
            Value::Object(value) => value.loc(),
        }
    }

    pub fn to_graphql(&self) -> String {
        match self {
            Value::Variable(value) => value.to_graphql(),
            Value::Int(value) => value.to_graphql(),
            Value::Float(value) => value.to_graphql(),
            Value::String(value) => value.to_graphql(),
            Value::Boolean(value) => value.to_graphql(),
            Value::Null(value) => value.to_graphql(),
            Value::Enum(value) => value.to_graphql(),
            Value::List(value) => value.to_graphql(),
            Value::Object(value) => value.to_graphql(),
        }
    }
}
