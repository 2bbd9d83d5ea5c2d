use crate::ast::AstNode;
use crate::ast::Location;
use crate::ast::Name;
use inherent::inherent;

/// A type reference as written in variable definitions and field/input
/// definitions: a named type, a list type, or a non-null wrapper.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(NamedTypeAnnotation),
    List(ListTypeAnnotation),
    NonNull(NonNullTypeAnnotation),
}

/// A plain named type reference, e.g. `User`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub name: Name,
    pub loc: Location,
}

/// A list type, e.g. `[User]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListTypeAnnotation {
    pub wrapped: Box<TypeAnnotation>,
    pub loc: Location,
}

/// A non-null type, e.g. `User!` or `[User]!`.
///
/// Non-null wraps only nullable types — `T!!` is unrepresentable, which
/// is exactly what the grammar allows.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullTypeAnnotation {
    pub wrapped: NullableTypeAnnotation,
    pub loc: Location,
}

/// The types a `!` may wrap: named or list, never another non-null.
#[derive(Clone, Debug, PartialEq)]
pub enum NullableTypeAnnotation {
    Named(NamedTypeAnnotation),
    List(ListTypeAnnotation),
}

impl From<NullableTypeAnnotation> for TypeAnnotation {
    fn from(annotation: NullableTypeAnnotation) -> Self {
        match annotation {
            NullableTypeAnnotation::Named(named) => TypeAnnotation::Named(named),
            NullableTypeAnnotation::List(list) => TypeAnnotation::List(list),
        }
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn loc(&self) -> &Location {
        match self {
            TypeAnnotation::Named(annotation) => annotation.loc(),
            TypeAnnotation::List(annotation) => annotation.loc(),
            TypeAnnotation::NonNull(annotation) => annotation.loc(),
        }
    }

    pub fn to_graphql(&self) -> String {
        match self {
            TypeAnnotation::Named(annotation) => annotation.to_graphql(),
            TypeAnnotation::List(annotation) => annotation.to_graphql(),
            TypeAnnotation::NonNull(annotation) => annotation.to_graphql(),
        }
    }
}

#[inherent]
impl AstNode for NamedTypeAnnotation {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        self.name.value.clone()
    }
}

#[inherent]
impl AstNode for ListTypeAnnotation {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        format!("[{}]", self.wrapped.to_graphql())
    }
}

#[inherent]
impl AstNode for NonNullTypeAnnotation {
    pub fn loc(&self) -> &Location {
        &self.loc
    }

    pub fn to_graphql(&self) -> String {
        let wrapped = match &self.wrapped {
            NullableTypeAnnotation::Named(named) => named.to_graphql(),
            NullableTypeAnnotation::List(list) => list.to_graphql(),
        };
        format!("{wrapped}!")
    }
}
