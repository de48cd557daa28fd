//! Shared helpers for parser and token stream tests.

use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use smallvec::smallvec;

/// Creates a mock token with the given kind and a zero-width span at the
/// start of input.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    let pos = SourcePosition::new(0, 0, Some(0), 0);
    GraphQLToken {
        kind,
        preceding_trivia: smallvec![],
        span: GraphQLSourceSpan {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
            file_path: None,
        },
    }
}

pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

pub fn mock_eof_token() -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof)
}

/// A token source that replays a fixed list of tokens.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses `source`, panicking with the formatted error if it fails.
pub(super) fn parse_ok(source: &str) -> ast::Document {
    match crate::parse(source) {
        Ok(document) => document,
        Err(error) => panic!(
            "expected `{source}` to parse, got:\n{}",
            error.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, panicking if it succeeds.
pub(super) fn parse_err(source: &str) -> GraphQLParseError {
    match crate::parse(source) {
        Ok(document) => panic!("expected `{source}` to fail, got: {document:?}"),
        Err(error) => error,
    }
}

/// The anonymous operation's top-level selections, for `{ ... }` inputs.
pub(super) fn anonymous_selections(source: &str) -> Vec<ast::Selection> {
    let document = parse_ok(source);
    match document.anonymous_operation() {
        Some(operation) => operation.selection_set.selections.clone(),
        None => panic!("expected an anonymous operation in `{source}`"),
    }
}

/// The first top-level field of the anonymous operation.
pub(super) fn first_field(source: &str) -> ast::Field {
    let selections = anonymous_selections(source);
    match selections.into_iter().next() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("expected a field first in `{source}`, got {other:?}"),
    }
}
