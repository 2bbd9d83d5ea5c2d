//! Shared test helpers.

use crate::GraphQLLexer;
use crate::GraphQLSyntaxError;
use crate::Source;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::sync::Arc;

/// Lexes an entire source, returning every token through (and
/// including) `Eof`, or the first lexical error.
pub(super) fn lex(source_text: &str) -> Result<Vec<GraphQLToken>, GraphQLSyntaxError> {
    let mut lexer = GraphQLLexer::new(Arc::new(Source::new(source_text)));
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let at_end = token.kind == GraphQLTokenKind::Eof;
        tokens.push(token);
        if at_end {
            return Ok(tokens);
        }
    }
}

/// Lexes a source expected to be fully valid.
pub(super) fn lex_ok(source_text: &str) -> Vec<GraphQLToken> {
    lex(source_text).unwrap_or_else(|error| panic!("unexpected lexical error:\n{error}"))
}

/// Lexes a source expected to fail, returning the error.
pub(super) fn lex_err(source_text: &str) -> GraphQLSyntaxError {
    match lex(source_text) {
        Ok(tokens) => panic!("expected a lexical error for {source_text:?}, got {tokens:?}"),
        Err(error) => error,
    }
}

/// Parses a source expected to be valid.
pub(super) fn parse_ok(source_text: &str) -> Document {
    crate::parse(source_text).unwrap_or_else(|error| panic!("unexpected syntax error:\n{error}"))
}

/// Parses a source expected to fail, returning the error.
pub(super) fn parse_err(source_text: &str) -> GraphQLSyntaxError {
    match crate::parse(source_text) {
        Ok(document) => {
            panic!("expected a syntax error for {source_text:?}, got {document:?}")
        }
        Err(error) => error,
    }
}

/// The header line of an error's formatted message, without the source
/// excerpt that follows.
pub(super) fn error_header(error: &GraphQLSyntaxError) -> &str {
    error.message().lines().next().unwrap_or_default()
}

/// The sole definition of a document, asserted to be an operation.
pub(super) fn single_operation(document: &Document) -> &OperationDefinition {
    assert_eq!(document.definitions.len(), 1);
    match &document.definitions[0] {
        Definition::Operation(operation) => operation,
        other => panic!("expected an operation definition, got {other:?}"),
    }
}

/// The first selection of a selection set, asserted to be a field.
pub(super) fn first_field(selection_set: &SelectionSet) -> &Field {
    match selection_set
        .selections
        .first()
        .expect("selection set is empty")
    {
        Selection::Field(field) => field,
        other => panic!("expected a field selection, got {other:?}"),
    }
}
