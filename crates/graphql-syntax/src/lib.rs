//! A GraphQL lexer and parser: source text in, location-annotated AST
//! out, with precise human-readable syntax errors.
//!
//! Parsing is eager and document-at-a-time: the whole source is
//! tokenized and parsed in one synchronous call with no I/O and no
//! shared state, so parses of distinct sources run in parallel freely.
//! The first lexical or grammatical violation aborts the parse — there
//! is no recovery and no partial tree.
//!
//! ```
//! let document = graphql_syntax::parse("{ hero { name } }").unwrap();
//! assert_eq!(document.definitions.len(), 1);
//!
//! let error = graphql_syntax::parse("{").unwrap_err();
//! assert!(error.message().starts_with("Syntax Error GraphQL (1:2)"));
//! ```

pub mod ast;
mod graphql_lexer;
mod graphql_parser;
mod graphql_syntax_error;
mod graphql_token_stream;
mod source;
mod source_location;
pub mod token;

pub use graphql_lexer::GraphQLLexer;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::ParseOptions;
pub use graphql_parser::parse;
pub use graphql_parser::parse_with_options;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source::Source;
pub use source_location::SourceLocation;
pub use source_location::get_location;

#[cfg(test)]
mod tests;
