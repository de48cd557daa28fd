use crate::GraphQLSourceSpan;

/// Behavior shared by every AST node that remembers where it came from.
pub trait AstNode {
    /// The node's location in the source text.
    fn span(&self) -> &GraphQLSourceSpan;

    /// Appends this node's exact source text to `sink`.
    ///
    /// `source` must be the text the node was parsed from. Nothing is
    /// appended when `source` is `None` or does not cover the span.
    fn append_source(&self, sink: &mut String, source: Option<&str>) {
        if let Some(slice) = source.and_then(|src| self.span().source_slice(src)) {
            sink.push_str(slice);
        }
    }
}
