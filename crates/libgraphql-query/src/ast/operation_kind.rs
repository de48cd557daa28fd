use std::fmt;

/// The kind of an [`Operation`](crate::ast::Operation).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    /// Also the kind of the anonymous `{ ... }` shorthand.
    #[default]
    Query,
    Mutation,
}

impl OperationKind {
    /// The keyword that introduces this kind of operation.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }

    /// Maps an operation keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
