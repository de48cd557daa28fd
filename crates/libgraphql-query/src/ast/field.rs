use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::DirectiveAnnotated;
use crate::ast::Directives;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// A field selection: `alias: name(args) @directives { ... }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    /// The response key. Equal to `name` unless an alias was written.
    pub alias: String,
    pub name: String,
    /// `None` when no parentheses were written; `Some` (possibly empty) for
    /// `name(...)`.
    pub arguments: Option<Arguments>,
    pub directives: Directives,
    /// `None` for leaf fields.
    pub selection_set: Option<SelectionSet>,
    pub span: GraphQLSourceSpan,
}

impl Field {
    /// Looks up an argument by name.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.as_ref()?.get(name)
    }

    /// Returns `true` if the field has no nested selection set.
    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_none()
    }
}

#[inherent]
impl AstNode for Field {
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}

#[inherent]
impl DirectiveAnnotated for Field {
    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    pub fn directive(&self, name: &str) -> Option<&Directive>;

    pub fn has_directive(&self, name: &str) -> bool;
}
