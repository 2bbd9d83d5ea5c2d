//! Pull-based lexer for GraphQL source text.
//!
//! [`GraphQLLexer::next_token`] yields one significant token per call,
//! skipping byte-order marks, whitespace, and commas. Comments are
//! *emitted* as [`GraphQLTokenKind::Comment`] tokens rather than being
//! swallowed here; [`GraphQLTokenStream`](crate::GraphQLTokenStream)
//! inspects and discards them before the parser sees the stream.
//!
//! All offsets are byte offsets into the source body, and columns count
//! bytes from line start. Multi-byte UTF-8 sequences inside comments and
//! string contents pass through byte-wise and never perturb subsequent
//! position arithmetic.
//!
//! The first lexical failure aborts the lex: errors are returned as
//! [`GraphQLSyntaxError`] values, never as error tokens.

use crate::GraphQLSyntaxError;
use crate::Source;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::sync::Arc;

/// A pull-based lexer over a shared [`Source`].
///
/// Past end of input, [`next_token`](Self::next_token) keeps returning
/// `Eof` tokens, so lookahead buffers can always be filled.
pub struct GraphQLLexer {
    source: Arc<Source>,

    /// Byte offset of the next unread byte.
    position: usize,

    /// Current 1-based line number.
    line: usize,

    /// Byte offset at which the current line starts. Token columns are
    /// `start - line_start + 1`.
    line_start: usize,
}

impl GraphQLLexer {
    pub fn new(source: Arc<Source>) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Lexes the next significant token (or `Comment`/`Eof`).
    pub fn next_token(&mut self) -> Result<GraphQLToken, GraphQLSyntaxError> {
        self.skip_ignored();

        let start = self.position;
        let line = self.line;
        let column = start - self.line_start + 1;

        let Some(byte) = self.byte_at(start) else {
            return Ok(GraphQLToken::punctuator(
                GraphQLTokenKind::Eof,
                start,
                start,
                line,
                column,
            ));
        };

        match byte {
            b'!' => Ok(self.punctuator(GraphQLTokenKind::Bang, 1)),
            b'$' => Ok(self.punctuator(GraphQLTokenKind::Dollar, 1)),
            b'&' => Ok(self.punctuator(GraphQLTokenKind::Amp, 1)),
            b'(' => Ok(self.punctuator(GraphQLTokenKind::ParenL, 1)),
            b')' => Ok(self.punctuator(GraphQLTokenKind::ParenR, 1)),
            b':' => Ok(self.punctuator(GraphQLTokenKind::Colon, 1)),
            b'=' => Ok(self.punctuator(GraphQLTokenKind::Equals, 1)),
            b'@' => Ok(self.punctuator(GraphQLTokenKind::At, 1)),
            b'[' => Ok(self.punctuator(GraphQLTokenKind::BracketL, 1)),
            b']' => Ok(self.punctuator(GraphQLTokenKind::BracketR, 1)),
            b'{' => Ok(self.punctuator(GraphQLTokenKind::BraceL, 1)),
            b'|' => Ok(self.punctuator(GraphQLTokenKind::Pipe, 1)),
            b'}' => Ok(self.punctuator(GraphQLTokenKind::BraceR, 1)),
            b'.' => {
                if self.byte_at(start + 1) == Some(b'.') && self.byte_at(start + 2) == Some(b'.') {
                    Ok(self.punctuator(GraphQLTokenKind::Spread, 3))
                } else {
                    Err(self.unexpected_character(start))
                }
            }
            b'#' => Ok(self.read_comment()),
            b'"' => self.read_string(),
            b'_' | b'A'..=b'Z' | b'a'..=b'z' => Ok(self.read_name()),
            b'-' | b'0'..=b'9' => self.read_number(),
            _ => Err(self.unexpected_character(start)),
        }
    }

    // =========================================================================
    // Position helpers
    // =========================================================================

    fn body(&self) -> &str {
        &self.source.body
    }

    fn byte_at(&self, position: usize) -> Option<u8> {
        self.source.body.as_bytes().get(position).copied()
    }

    /// Decodes the character starting at `position` for error messages.
    fn char_at(&self, position: usize) -> Option<char> {
        self.source.body.get(position..)?.chars().next()
    }

    /// Records a line break whose terminator ends at `line_start`.
    fn new_line(&mut self, line_start: usize) {
        self.line += 1;
        self.line_start = line_start;
    }

    /// Skips whitespace, commas, line terminators, and byte-order marks.
    ///
    /// These are all [ignored tokens](https://spec.graphql.org/October2021/#sec-Language.Source-Text.Ignored-Tokens):
    /// commas are insignificant separators, and `U+FEFF` is skipped
    /// wherever whitespace is.
    fn skip_ignored(&mut self) {
        loop {
            match self.byte_at(self.position) {
                Some(b' ') | Some(b'\t') | Some(b',') => self.position += 1,
                Some(b'\n') => {
                    self.position += 1;
                    self.new_line(self.position);
                }
                Some(b'\r') => {
                    self.position += 1;
                    if self.byte_at(self.position) == Some(b'\n') {
                        self.position += 1;
                    }
                    self.new_line(self.position);
                }
                // U+FEFF is EF BB BF in UTF-8.
                Some(0xEF)
                    if self.byte_at(self.position + 1) == Some(0xBB)
                        && self.byte_at(self.position + 2) == Some(0xBF) =>
                {
                    self.position += 3;
                }
                _ => break,
            }
        }
    }

    // =========================================================================
    // Token constructors and error helpers
    // =========================================================================

    /// Consumes `len` bytes and returns a valueless token.
    fn punctuator(&mut self, kind: GraphQLTokenKind, len: usize) -> GraphQLToken {
        let start = self.position;
        self.position = start + len;
        GraphQLToken::punctuator(
            kind,
            start,
            self.position,
            self.line,
            start - self.line_start + 1,
        )
    }

    fn syntax_error(&self, position: usize, description: String) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(&self.source, position, description)
    }

    fn unexpected_character(&self, position: usize) -> GraphQLSyntaxError {
        self.syntax_error(
            position,
            format!(
                "Unexpected character {}.",
                print_char_code(self.char_at(position))
            ),
        )
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Reads a `#` comment up to (not including) the line terminator.
    ///
    /// The token value is the text after `#`; the stream layer inspects
    /// and then discards these.
    fn read_comment(&mut self) -> GraphQLToken {
        let start = self.position;
        let line = self.line;
        let column = start - self.line_start + 1;

        self.position += 1;
        let value_start = self.position;
        while let Some(byte) = self.byte_at(self.position) {
            // Stop on line terminators and other control characters;
            // tabs and multi-byte sequences are comment text.
            if byte < 0x20 && byte != b'\t' {
                break;
            }
            self.position += 1;
        }

        GraphQLToken::with_value(
            GraphQLTokenKind::Comment,
            &self.body()[value_start..self.position],
            start,
            self.position,
            line,
            column,
        )
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Reads `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// There is no keyword table: `on`, `query`, `true`, `null`, and
    /// friends all lex as ordinary names.
    fn read_name(&mut self) -> GraphQLToken {
        let start = self.position;
        self.position += 1;
        while let Some(b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z') = self.byte_at(self.position)
        {
            self.position += 1;
        }

        GraphQLToken::with_value(
            GraphQLTokenKind::Name,
            &self.body()[start..self.position],
            start,
            self.position,
            self.line,
            start - self.line_start + 1,
        )
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Reads an `Int` or `Float` per the GraphQL numeric grammar:
    /// optional `-`, no leading zero except a lone `0`, optional
    /// fraction, optional exponent. A fraction or exponent promotes the
    /// token to `Float`.
    fn read_number(&mut self) -> Result<GraphQLToken, GraphQLSyntaxError> {
        let start = self.position;
        let mut is_float = false;

        if self.byte_at(self.position) == Some(b'-') {
            self.position += 1;
        }

        if self.byte_at(self.position) == Some(b'0') {
            self.position += 1;
            if let Some(b'0'..=b'9') = self.byte_at(self.position) {
                return Err(self.syntax_error(
                    self.position,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        print_char_code(self.char_at(self.position))
                    ),
                ));
            }
        } else {
            self.read_digits()?;
        }

        if self.byte_at(self.position) == Some(b'.') {
            is_float = true;
            self.position += 1;
            self.read_digits()?;
        }

        if let Some(b'e' | b'E') = self.byte_at(self.position) {
            is_float = true;
            self.position += 1;
            if let Some(b'+' | b'-') = self.byte_at(self.position) {
                self.position += 1;
            }
            self.read_digits()?;
        }

        let kind = if is_float {
            GraphQLTokenKind::Float
        } else {
            GraphQLTokenKind::Int
        };
        Ok(GraphQLToken::with_value(
            kind,
            &self.body()[start..self.position],
            start,
            self.position,
            self.line,
            start - self.line_start + 1,
        ))
    }

    /// Consumes one or more ASCII digits.
    fn read_digits(&mut self) -> Result<(), GraphQLSyntaxError> {
        let Some(b'0'..=b'9') = self.byte_at(self.position) else {
            return Err(self.syntax_error(
                self.position,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_char_code(self.char_at(self.position))
                ),
            ));
        };
        while let Some(b'0'..=b'9') = self.byte_at(self.position) {
            self.position += 1;
        }
        Ok(())
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Reads a `"..."` or `"""..."""` literal.
    fn read_string(&mut self) -> Result<GraphQLToken, GraphQLSyntaxError> {
        if self.byte_at(self.position + 1) == Some(b'"')
            && self.byte_at(self.position + 2) == Some(b'"')
        {
            return self.read_block_string();
        }

        let start = self.position;
        let line = self.line;
        let column = start - self.line_start + 1;

        self.position += 1;
        let mut value = String::new();
        let mut chunk_start = self.position;

        loop {
            match self.byte_at(self.position) {
                None => {
                    return Err(self.syntax_error(self.position, "Unterminated string.".into()));
                }
                Some(b'\n') | Some(b'\r') => {
                    return Err(self.syntax_error(self.position, "Unterminated string.".into()));
                }
                Some(b'"') => {
                    value.push_str(&self.body()[chunk_start..self.position]);
                    self.position += 1;
                    return Ok(GraphQLToken::with_value(
                        GraphQLTokenKind::String,
                        value,
                        start,
                        self.position,
                        line,
                        column,
                    ));
                }
                Some(b'\\') => {
                    value.push_str(&self.body()[chunk_start..self.position]);
                    self.position += 1;
                    self.read_escape_sequence(&mut value)?;
                    chunk_start = self.position;
                }
                Some(byte) if byte < 0x20 && byte != b'\t' => {
                    return Err(self.syntax_error(
                        self.position,
                        format!(
                            "Invalid character within String: {}.",
                            print_char_code(self.char_at(self.position))
                        ),
                    ));
                }
                Some(_) => self.position += 1,
            }
        }
    }

    /// Resolves one escape sequence; the cursor sits on the character
    /// after the backslash.
    fn read_escape_sequence(&mut self, value: &mut String) -> Result<(), GraphQLSyntaxError> {
        let position = self.position;
        match self.byte_at(position) {
            Some(b'"') => value.push('"'),
            Some(b'\\') => value.push('\\'),
            Some(b'/') => value.push('/'),
            Some(b'b') => value.push('\u{0008}'),
            Some(b'f') => value.push('\u{000C}'),
            Some(b'n') => value.push('\n'),
            Some(b'r') => value.push('\r'),
            Some(b't') => value.push('\t'),
            Some(b'u') => {
                let hex_start = position + 1;
                let hex_end = (hex_start + 4).min(self.body().len());
                let hex = &self.body()[hex_start..hex_end];
                let decoded = if hex.len() == 4 {
                    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(ch) => {
                        value.push(ch);
                        self.position = hex_end;
                        return Ok(());
                    }
                    None => {
                        return Err(self.syntax_error(
                            position,
                            format!("Invalid character escape sequence: \\u{hex}."),
                        ));
                    }
                }
            }
            _ => {
                let printed = self.char_at(position).map(String::from).unwrap_or_default();
                return Err(self.syntax_error(
                    position,
                    format!("Invalid character escape sequence: \\{printed}."),
                ));
            }
        }
        self.position += 1;
        Ok(())
    }

    /// Reads a `"""` block string; raw newlines are legal and tracked.
    ///
    /// The token value is produced by [`block_string_value`]: common
    /// indentation stripped and surrounding blank lines removed.
    fn read_block_string(&mut self) -> Result<GraphQLToken, GraphQLSyntaxError> {
        let start = self.position;
        let line = self.line;
        let column = start - self.line_start + 1;

        self.position += 3;
        let mut raw = String::new();
        let mut chunk_start = self.position;

        loop {
            match self.byte_at(self.position) {
                None => {
                    return Err(self.syntax_error(self.position, "Unterminated string.".into()));
                }
                Some(b'"')
                    if self.byte_at(self.position + 1) == Some(b'"')
                        && self.byte_at(self.position + 2) == Some(b'"') =>
                {
                    raw.push_str(&self.body()[chunk_start..self.position]);
                    self.position += 3;
                    return Ok(GraphQLToken::with_value(
                        GraphQLTokenKind::BlockString,
                        block_string_value(&raw),
                        start,
                        self.position,
                        line,
                        column,
                    ));
                }
                // \""" escapes a literal triple-quote.
                Some(b'\\')
                    if self.byte_at(self.position + 1) == Some(b'"')
                        && self.byte_at(self.position + 2) == Some(b'"')
                        && self.byte_at(self.position + 3) == Some(b'"') =>
                {
                    raw.push_str(&self.body()[chunk_start..self.position]);
                    raw.push_str("\"\"\"");
                    self.position += 4;
                    chunk_start = self.position;
                }
                Some(b'\n') => {
                    self.position += 1;
                    self.new_line(self.position);
                }
                Some(b'\r') => {
                    self.position += 1;
                    if self.byte_at(self.position) == Some(b'\n') {
                        self.position += 1;
                    }
                    self.new_line(self.position);
                }
                Some(byte) if byte < 0x20 && byte != b'\t' => {
                    return Err(self.syntax_error(
                        self.position,
                        format!(
                            "Invalid character within String: {}.",
                            print_char_code(self.char_at(self.position))
                        ),
                    ));
                }
                Some(_) => self.position += 1,
            }
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Renders a character for lexical error messages: printable ASCII in
/// quotes (`"a"`), anything else as an escaped code point (`"\u0007"`),
/// and `<EOF>` past end of input.
fn print_char_code(ch: Option<char>) -> String {
    match ch {
        None => "<EOF>".to_string(),
        Some(ch) if (' '..='\u{007E}').contains(&ch) => format!("\"{ch}\""),
        Some(ch) => format!("\"\\u{:04X}\"", ch as u32),
    }
}

/// Cooks a raw block-string body per the
/// [multi-line string convention](https://spec.graphql.org/October2021/#BlockStringValue%28%29):
/// line terminators normalized to `\n`, the common indentation of every
/// line but the first stripped, and leading/trailing blank lines
/// removed.
fn block_string_value(raw: &str) -> String {
    // Normalize \r\n and \r terminators so the line split below is
    // uniform; the cooked value only ever contains \n.
    let normalized;
    let raw = if raw.contains('\r') {
        normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
        normalized.as_str()
    } else {
        raw
    };
    let lines: Vec<&str> = raw.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut cooked: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.len() < common_indent {
                *line
            } else {
                &line[common_indent..]
            }
        })
        .collect();

    while cooked.first().is_some_and(|line| line.trim().is_empty()) {
        cooked.remove(0);
    }
    while cooked.last().is_some_and(|line| line.trim().is_empty()) {
        cooked.pop();
    }

    cooked.join("\n")
}
