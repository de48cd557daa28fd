use crate::ast::Literal;

/// An argument value.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    /// `$name`, resolved later against the variables supplied by the caller.
    Variable(Variable),
    Literal(Literal),
}

/// A `$name` reference (the name is stored without the `$`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Variable {
    pub name: String,
}

impl Value {
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Value::Variable(var) => Some(var),
            Value::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Variable(_) => None,
            Value::Literal(lit) => Some(lit),
        }
    }
}
