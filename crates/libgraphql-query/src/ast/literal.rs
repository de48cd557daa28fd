use std::fmt;

/// How a [`Literal`] was written.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum LiteralKind {
    Int,
    Float,
    String,
    /// `true` or `false`.
    Boolean,
    /// Any other bare identifier.
    Enum,
    Null,
}

/// A value written directly in the query text.
///
/// `value` holds the decoded content for strings and the raw source text for
/// everything else (so `1e3` stays `"1e3"` and `RED` stays `"RED"`).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: String,
}

impl Literal {
    pub fn new(kind: LiteralKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Builds the literal for a bare identifier, telling booleans and `null`
    /// apart from enum values.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = match name.as_str() {
            "true" | "false" => LiteralKind::Boolean,
            "null" => LiteralKind::Null,
            _ => LiteralKind::Enum,
        };
        Self::new(kind, name)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The integer value of an `Int` literal. `None` for other kinds or when
    /// the value does not fit in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self.kind {
            LiteralKind::Int => self.value.parse().ok(),
            _ => None,
        }
    }

    /// The numeric value of an `Int` or `Float` literal.
    pub fn as_f64(&self) -> Option<f64> {
        match self.kind {
            LiteralKind::Int | LiteralKind::Float => self.value.parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match (self.kind, self.value.as_str()) {
            (LiteralKind::Boolean, "true") => Some(true),
            (LiteralKind::Boolean, "false") => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.kind == LiteralKind::Null
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LiteralKind::String => write!(f, "{:?}", self.value),
            _ => f.write_str(&self.value),
        }
    }
}
