/// How an error note is rendered by
/// [`GraphQLParseError::format_detailed`](crate::GraphQLParseError::format_detailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// Context about the error, e.g. "opening `{` here".
    ///
    /// Rendered as `= note: ...`.
    General,

    /// A suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...`.
    Help,
}

impl GraphQLErrorNoteKind {
    /// The prefix used when rendering a note of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
        }
    }
}
