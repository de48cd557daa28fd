use crate::ast::AstNode;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::GraphQLSourceSpan;
use indexmap::IndexMap;
use inherent::inherent;

/// A query or mutation.
///
/// ```text
/// query Name($var: Type!) { ... }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    pub kind: OperationKind,
    /// `None` for `{ ... }` and for `query { ... }` / `mutation { ... }`.
    pub name: Option<String>,
    pub variables: IndexMap<String, VariableDefinition>,
    pub selection_set: SelectionSet,
    pub span: GraphQLSourceSpan,
}

impl Operation {
    /// The key this operation is stored under in
    /// [`Document::operations`](crate::ast::Document::operations).
    pub fn map_key(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.get(name)
    }
}

#[inherent]
impl AstNode for Operation {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}
