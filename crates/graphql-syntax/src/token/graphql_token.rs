use crate::token::GraphQLTokenKind;

/// A single lexed token: a kind, an optional text value, and its
/// position within the source.
///
/// `start`/`end` are the token's half-open byte range. `line`/`column`
/// are the 1-based position of `start`, with byte-denominated columns.
///
/// Punctuators and `Eof` carry no value. `Name`, `Int`, and `Float`
/// carry their raw source text. `String` and `BlockString` carry the
/// *cooked* value: escape sequences resolved and, for block strings,
/// common indentation and surrounding blank lines stripped. `Comment`
/// carries the text after `#`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLToken {
    pub kind: GraphQLTokenKind,
    pub value: Option<String>,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl GraphQLToken {
    /// A token with no value (punctuators, `Eof`).
    pub fn punctuator(
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            value: None,
            start,
            end,
            line,
            column,
        }
    }

    /// A token carrying a text value.
    pub fn with_value(
        kind: GraphQLTokenKind,
        value: impl Into<String>,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            start,
            end,
            line,
            column,
        }
    }

    /// Renders this token for error messages: the kind description,
    /// plus the value in quotes when one is present (`Name "on"`,
    /// `EOF`, `{`).
    pub fn description(&self) -> String {
        match &self.value {
            Some(value) => format!("{} \"{}\"", self.kind.description(), value),
            None => self.kind.description().to_string(),
        }
    }

    /// Returns the token's value text, or `""` when it has none.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}
