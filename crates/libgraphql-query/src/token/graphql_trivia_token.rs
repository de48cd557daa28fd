use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// A token that doesn't affect parsing but is preserved for tooling.
///
/// Trivia is attached to the *following* token as its `preceding_trivia`.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// A `#` comment running to the end of the line.
    Comment {
        /// The comment text, excluding the leading `#`.
        value: Cow<'src, str>,
        span: GraphQLSourceSpan,
    },
}
