//! Byte-offset to line/column resolution.

use crate::Source;
use crate::SourceLocation;
use crate::get_location;

fn location(body: &str, position: usize) -> (usize, usize) {
    let resolved = get_location(&Source::new(body), position);
    (resolved.line, resolved.column)
}

#[test]
fn resolves_positions_on_the_first_line() {
    assert_eq!(location("abc", 0), (1, 1));
    assert_eq!(location("abc", 2), (1, 3));
}

/// An offset at or past the end resolves relative to the last line.
#[test]
fn resolves_end_of_body() {
    assert_eq!(location("abc", 3), (1, 4));
    assert_eq!(location("ab\ncd", 5), (2, 3));
}

#[test]
fn resolves_across_line_terminator_styles() {
    assert_eq!(location("ab\ncd", 3), (2, 1));
    assert_eq!(location("ab\rcd", 3), (2, 1));
    assert_eq!(location("ab\r\ncd", 4), (2, 1));
    assert_eq!(location("ab\r\ncd", 5), (2, 2));
    assert_eq!(location("a\n\nb", 3), (3, 1));
}

/// Columns count bytes, so multi-byte characters widen them.
#[test]
fn columns_are_byte_denominated() {
    // 'ф' and 'ы' are two bytes each.
    let body = "фы\nab";
    assert_eq!(location(body, 2), (1, 3));
    assert_eq!(location(body, 5), (2, 1));
}

#[test]
fn serializes_to_the_graphql_locations_shape() {
    let value = serde_json::to_value(SourceLocation { line: 3, column: 9 }).unwrap();
    assert_eq!(value, serde_json::json!({"line": 3, "column": 9}));
}
