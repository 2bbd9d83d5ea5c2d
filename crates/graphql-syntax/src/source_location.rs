use crate::Source;
use memchr::memchr2;

/// A 1-based line/column pair within a [`Source`] body.
///
/// Columns are byte-denominated: they count bytes from the start of the
/// line, not characters. This keeps position arithmetic exact in the
/// presence of multi-byte UTF-8 text and matches the offsets carried by
/// tokens and AST locations.
///
/// Serializes to the `{"line": .., "column": ..}` shape used by GraphQL
/// error responses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// Resolves a byte offset into a 1-based [`SourceLocation`].
///
/// Line terminators are `\n`, `\r`, and `\r\n` (counted as a single
/// terminator). Offsets at or past the end of the body resolve relative
/// to the last line.
pub fn get_location(source: &Source, position: usize) -> SourceLocation {
    let body = source.body.as_bytes();
    let mut line = 1;
    let mut line_start = 0;

    let mut cursor = 0;
    while let Some(found) = memchr2(b'\n', b'\r', &body[cursor..]) {
        let terminator = cursor + found;
        if terminator >= position {
            break;
        }
        let mut next = terminator + 1;
        if body[terminator] == b'\r' && body.get(next) == Some(&b'\n') {
            next += 1;
        }
        // A \r\n pair straddling `position` still counts as one
        // terminator before it only when the pair ends at or before it.
        if next > position {
            break;
        }
        line += 1;
        line_start = next;
        cursor = next;
    }

    SourceLocation {
        line,
        column: position - line_start + 1,
    }
}

/// Returns the raw text of the given 1-based line, without its
/// terminator. `None` if the source has fewer lines.
pub(crate) fn line_text(source: &Source, line: usize) -> Option<&str> {
    let body = &source.body;
    let bytes = body.as_bytes();
    let mut current = 1;
    let mut start = 0;
    let mut cursor = 0;

    while current < line {
        let found = memchr2(b'\n', b'\r', &bytes[cursor..])?;
        let terminator = cursor + found;
        let mut next = terminator + 1;
        if bytes[terminator] == b'\r' && bytes.get(next) == Some(&b'\n') {
            next += 1;
        }
        current += 1;
        start = next;
        cursor = next;
    }

    let end = memchr2(b'\n', b'\r', &bytes[start..])
        .map(|found| start + found)
        .unwrap_or(body.len());
    Some(&body[start..end])
}
