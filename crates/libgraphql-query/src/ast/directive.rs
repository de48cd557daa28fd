use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A `@name(arg: value, ...)` annotation on a field or fragment spread.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub name: String,
    /// `None` when no parentheses were written; `Some` (possibly empty) for
    /// `@name(...)`.
    pub arguments: Option<Arguments>,
    pub span: GraphQLSourceSpan,
}

impl Directive {
    /// Looks up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.as_ref()?.get(name)
    }
}

#[inherent]
impl AstNode for Directive {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}
