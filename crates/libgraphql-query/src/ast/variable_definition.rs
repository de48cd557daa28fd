use crate::ast::AstNode;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A `$name: Type` entry in an operation's variable list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    /// The name without the leading `$`.
    pub name: String,
    /// The type exactly as written, without any trailing `!`.
    pub type_name: String,
    /// Whether the type was followed by `!`. Recorded only; nothing checks
    /// supplied variables against it.
    pub non_null: bool,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}
