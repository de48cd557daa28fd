use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::Selection;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A brace-delimited, ordered list of selections. `{}` is allowed and yields
/// no selections.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    /// In source order, which is also the order results are produced in.
    pub selections: Vec<Selection>,
    pub span: GraphQLSourceSpan,
}

impl SelectionSet {
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The field selections, in order, skipping fragment spreads.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.selections.iter().filter_map(Selection::as_field)
    }

    /// The fragment spreads, in order, skipping fields.
    pub fn fragment_spreads(&self) -> impl Iterator<Item = &FragmentSpread> {
        self.selections.iter().filter_map(Selection::as_fragment_spread)
    }
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}
