use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// An extra piece of context attached to a lexer or parser error.
///
/// A note may point at a related location (e.g. where an unclosed delimiter
/// was opened) or just carry a message.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn new(
        kind: GraphQLErrorNoteKind,
        message: impl Into<String>,
        span: Option<GraphQLSourceSpan>,
    ) -> Self {
        Self { kind, message: message.into(), span }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, None)
    }

    /// A general note that renders its own snippet at `span`.
    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message, Some(span))
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message, None)
    }
}

/// Most errors carry 0-2 notes, so these live inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
