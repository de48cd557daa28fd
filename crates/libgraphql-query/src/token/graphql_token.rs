use crate::GraphQLSourceSpan;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use smallvec::SmallVec;

/// Trivia storage. Most tokens are preceded by at most a couple of comments.
pub type GraphQLTriviaTokenVec<'src> = SmallVec<[GraphQLTriviaToken<'src>; 2]>;

/// A token with its source span and any comments that precede it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,
    pub preceding_trivia: GraphQLTriviaTokenVec<'src>,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    /// Convenience constructor for a token with no preceding trivia.
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }
}
