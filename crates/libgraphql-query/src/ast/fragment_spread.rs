use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::DirectiveAnnotated;
use crate::ast::Directives;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// `...FragmentName @directives`
///
/// The name is not resolved against the document's fragments; consumers do
/// that.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Directives,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}

#[inherent]
impl DirectiveAnnotated for FragmentSpread {
    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    pub fn directive(&self, name: &str) -> Option<&Directive>;

    pub fn has_directive(&self, name: &str) -> bool;
}
