use crate::ast::AstNode;
use crate::ast::SelectionSet;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// `fragment Name on Type { ... }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Fragment {
    pub name: String,
    /// The type named after `on`.
    pub type_condition: String,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for Fragment {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}
