use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::DirectiveAnnotated;
use crate::ast::Directives;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::GraphQLSourceSpan;
use inherent::inherent;

/// One entry of a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
}

impl Selection {
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Selection::Field(field) => Some(field),
            Selection::FragmentSpread(_) => None,
        }
    }

    pub fn as_fragment_spread(&self) -> Option<&FragmentSpread> {
        match self {
            Selection::Field(_) => None,
            Selection::FragmentSpread(spread) => Some(spread),
        }
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            Selection::Field(field) => &field.span,
            Selection::FragmentSpread(spread) => &spread.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: Option<&str>);
}

#[inherent]
impl DirectiveAnnotated for Selection {
    pub fn directives(&self) -> &Directives {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
        }
    }

    pub fn directive(&self, name: &str) -> Option<&Directive>;

    pub fn has_directive(&self, name: &str) -> bool;
}
