//! Token stream tests: lookahead buffering and comment filtering.

use crate::GraphQLLexer;
use crate::GraphQLTokenStream;
use crate::Source;
use crate::token::GraphQLTokenKind;
use std::sync::Arc;

fn stream_over(source_text: &str) -> GraphQLTokenStream {
    let lexer = GraphQLLexer::new(Arc::new(Source::new(source_text)));
    GraphQLTokenStream::new(lexer)
}

#[test]
fn peek_does_not_consume() {
    let mut stream = stream_over("{ name }");
    assert_eq!(stream.peek().unwrap().kind, GraphQLTokenKind::BraceL);
    assert_eq!(stream.peek().unwrap().kind, GraphQLTokenKind::BraceL);

    let token = stream.consume().unwrap();
    assert_eq!(token.kind, GraphQLTokenKind::BraceL);
    assert_eq!(stream.peek().unwrap().kind, GraphQLTokenKind::Name);
}

#[test]
fn peek_nth_looks_arbitrarily_far_ahead() {
    let mut stream = stream_over("{ name }");
    assert_eq!(stream.peek_nth(1).unwrap().kind, GraphQLTokenKind::Name);
    assert_eq!(stream.peek_nth(2).unwrap().kind, GraphQLTokenKind::BraceR);
    assert_eq!(stream.peek_nth(3).unwrap().kind, GraphQLTokenKind::Eof);

    // Lookahead past EOF keeps yielding EOF tokens.
    assert_eq!(stream.peek_nth(7).unwrap().kind, GraphQLTokenKind::Eof);

    // Buffered lookahead does not disturb consumption order.
    assert_eq!(stream.consume().unwrap().kind, GraphQLTokenKind::BraceL);
    assert_eq!(stream.consume().unwrap().kind, GraphQLTokenKind::Name);
}

/// Comments never reach the stream's consumers.
#[test]
fn filters_comment_tokens() {
    let mut stream = stream_over("# leading\nname # trailing\n# another\n}");
    assert_eq!(stream.peek().unwrap().kind, GraphQLTokenKind::Name);
    stream.consume().unwrap();
    assert_eq!(stream.consume().unwrap().kind, GraphQLTokenKind::BraceR);
    assert_eq!(stream.consume().unwrap().kind, GraphQLTokenKind::Eof);
}

/// The first lexical error surfaces from whichever call reaches it.
#[test]
fn propagates_lexical_errors() {
    let mut stream = stream_over("name `");
    assert!(stream.peek().is_ok());
    stream.consume().unwrap();
    assert!(stream.peek().is_err());
}
