use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Location;
use inherent::inherent;

/// One entry in a [`SelectionSet`](crate::ast::SelectionSet).
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn loc(&self) -> &Location {
        match self {
            Selection::Field(selection) => selection.loc(),
            Selection::FragmentSpread(selection) => selection.loc(),
            Selection::InlineFragment(selection) => selection.loc(),
        }
    }

    pub fn to_graphql(&self) -> String {
        match self {
            Selection::Field(selection) => selection.to_graphql(),
            Selection::FragmentSpread(selection) => selection.to_graphql(),
            Selection::InlineFragment(selection) => selection.to_graphql(),
        }
    }
}
