//! A parser for a compact GraphQL-style query language.
//!
//! Parses a document of named or anonymous `query`/`mutation` operations and
//! named `fragment`s into an owned [`ast::Document`]. Parsing is fail-fast:
//! the first syntax error is returned as a [`GraphQLParseError`] carrying the
//! offending location.
//!
//! ```
//! let document = libgraphql_query::parse(r#"
//!     query Hero($episode: Episode!) {
//!         hero(episode: $episode) { name ...Friends }
//!     }
//!     fragment Friends on Character { friends { name } }
//! "#).unwrap();
//!
//! assert!(document.operation("Hero").is_some());
//! assert!(document.fragment("Friends").is_some());
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_parser_config;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser_config::GraphQLParserConfig;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

/// Parses `source` into a [`ast::Document`] with the default
/// [`GraphQLParserConfig`].
pub fn parse(source: &str) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

/// Parses `source` with explicit limits and file path.
pub fn parse_with_config(
    source: &str,
    config: &GraphQLParserConfig,
) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::with_config(source, config.clone()).parse_document()
}

#[cfg(test)]
mod tests;
