use crate::token::GraphQLToken;

/// Marker trait for lexers: iterators that produce [`GraphQLToken`]s.
///
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource) lexes
/// a `&str`, but any iterator of tokens can drive
/// [`GraphQLParser`](crate::GraphQLParser) (pre-lexed buffers, tokens
/// synthesized by tooling, test fixtures, ...). All lookahead and buffering is
/// handled by [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// Token sources are responsible for:
/// - Skipping whitespace
/// - Attaching comments to the following token as trivia
/// - Emitting [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for malformed input rather than panicking
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
