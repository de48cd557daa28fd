//! The abstract syntax tree produced by [`parse`](crate::parse).
//!
//! Every node owns its data (`String`s, not borrows of the source text), so a
//! [`Document`] outlives both the input and the parser that built it.

mod ast_node;
mod directive;
mod directive_annotated;
mod document;
mod field;
mod fragment;
mod fragment_spread;
mod literal;
mod operation;
mod operation_kind;
mod selection;
mod selection_set;
mod value;
mod variable_definition;

pub use ast_node::AstNode;
pub use directive::Directive;
pub use directive_annotated::DirectiveAnnotated;
pub use document::Document;
pub use field::Field;
pub use fragment::Fragment;
pub use fragment_spread::FragmentSpread;
pub use literal::Literal;
pub use literal::LiteralKind;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use value::Value;
pub use value::Variable;
pub use variable_definition::VariableDefinition;

/// Argument name → value. `IndexMap` keeps source order for iteration, but
/// a repeated name replaces the earlier value in place.
pub type Arguments = indexmap::IndexMap<String, Value>;

/// Directive name → directive. A repeated name replaces the earlier one.
pub type Directives = indexmap::IndexMap<String, Directive>;

#[cfg(test)]
mod tests;
