use crate::Source;
use crate::SourceLocation;
use crate::source_location::get_location;
use crate::source_location::line_text;

/// A syntax error produced while lexing or parsing a GraphQL document.
///
/// Both lexical failures (bad character, unterminated string, malformed
/// number) and grammatical failures (`Expected X, found Y`,
/// `Unexpected Y`) are reported through this one type; callers can only
/// tell them apart by message text. The first error encountered aborts
/// the parse, so one parse call yields at most one of these.
///
/// The [`message`](Self::message) is the full multi-line diagnostic:
///
/// ```text
/// Syntax Error GraphQL (1:2) Expected Name, found EOF
///
/// 1: {
///     ^
/// ```
///
/// a header naming the source, the 1-based line/column, and the failure
/// description, followed by the offending source line and a caret under
/// the failing column. [`positions`](Self::positions) and
/// [`locations`](Self::locations) mirror the single failure point.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLSyntaxError {
    message: String,
    positions: Vec<usize>,
    locations: Vec<SourceLocation>,
}

impl GraphQLSyntaxError {
    /// Builds a syntax error at a byte position within `source`.
    ///
    /// `description` is the bare failure text (e.g.
    /// `Expected Name, found EOF`); the formatted header and source
    /// excerpt are rendered here.
    pub fn new(source: &Source, position: usize, description: impl AsRef<str>) -> Self {
        let location = get_location(source, position);
        let message = format!(
            "Syntax Error {} ({}:{}) {}\n\n{}",
            source.name,
            location.line,
            location.column,
            description.as_ref(),
            highlight_source_at_location(source, location),
        );
        Self {
            message,
            positions: vec![position],
            locations: vec![location],
        }
    }

    /// The full formatted multi-line diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The byte offset of the failure point.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The 1-based line/column of the failure point.
    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }
}

/// Renders the one-line source excerpt with a caret under the failing
/// column:
///
/// ```text
/// 1: { ...on }
///            ^
/// ```
///
/// The caret is aligned past the `"<line>: "` prefix plus `column - 1`
/// bytes of line text.
fn highlight_source_at_location(source: &Source, location: SourceLocation) -> String {
    let text = line_text(source, location.line).unwrap_or_default();
    let prefix = format!("{}: ", location.line);
    let caret_offset = prefix.len() + location.column - 1;
    format!("{prefix}{text}\n{}^\n", " ".repeat(caret_offset))
}
