/// An immutable GraphQL source text paired with a display name.
///
/// The display name appears in syntax-error headers (e.g.
/// `Syntax Error MyQuery.graphql (1:6) ...`) and defaults to `"GraphQL"`
/// when the source is built from a bare string.
///
/// A `Source` is never mutated after construction. The parser shares it
/// into the produced AST as `Arc<Source>` (see
/// [`Location`](crate::ast::Location)), so many locations reference a
/// single buffer without copying it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    /// The raw document text. All token/AST offsets are byte offsets
    /// into this string.
    pub body: String,

    /// The display name used in diagnostics.
    pub name: String,
}

impl Source {
    /// The display name used when none is supplied.
    pub const DEFAULT_NAME: &'static str = "GraphQL";

    /// Creates a source with the default display name.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: Self::DEFAULT_NAME.to_string(),
        }
    }

    /// Creates a source with an explicit display name.
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}
