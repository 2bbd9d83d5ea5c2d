use crate::ast::Location;
use crate::ast::StringValue;

/// Trait implemented by every AST node type.
///
/// All node types implement this via `#[inherent] impl AstNode`, giving
/// each node both inherent methods (no trait import needed) and a trait
/// bound for generic utilities.
pub trait AstNode {
    /// The node's source location.
    fn loc(&self) -> &Location;

    /// Renders this node as canonical GraphQL text.
    ///
    /// The output is semantically equivalent to the node's original
    /// source but normalized: two-space indented blocks, `", "`
    /// separated argument and object-value lists, descriptions emitted
    /// as single-line strings. Re-parsing the output yields a
    /// structurally equal tree (modulo locations).
    fn to_graphql(&self) -> String;
}

// =============================================================================
// Printing helpers shared by the node impls
// =============================================================================

/// Joins the non-empty parts with `separator`.
pub(crate) fn join(parts: &[String], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Wraps `content` in `prefix`/`suffix`, or returns `""` when the
/// content is empty.
pub(crate) fn wrap(prefix: &str, content: &str, suffix: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("{prefix}{content}{suffix}")
    }
}

/// Renders items as a brace-delimited block, each item on its own line
/// indented by two spaces (nested lines included).
pub(crate) fn block(items: &[String]) -> String {
    if items.is_empty() {
        return "{}".to_string();
    }
    let inner = items.join("\n").replace('\n', "\n  ");
    format!("{{\n  {inner}\n}}")
}

/// Renders the canonical text of every node in `items`.
pub(crate) fn print_each<T: AstNode>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.to_graphql()).collect()
}

/// Quotes a cooked string value back into source form, escaping
/// characters that cannot appear raw in a single-line string.
pub(crate) fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Renders an optional description as a quoted line preceding a
/// definition, or `""` when absent.
pub(crate) fn description_prefix(description: &Option<StringValue>) -> String {
    match description {
        Some(description) => format!("{}\n", quote_string(&description.value)),
        None => String::new(),
    }
}
