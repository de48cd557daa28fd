use crate::ast::Directive;
use crate::ast::Directives;

/// Nodes that can carry `@directive` annotations.
pub trait DirectiveAnnotated {
    fn directives(&self) -> &Directives;

    /// Looks up a directive by name (without the `@`).
    fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives().get(name)
    }

    fn has_directive(&self, name: &str) -> bool {
        self.directives().contains_key(name)
    }
}
