use crate::ast::Fragment;
use crate::ast::Operation;
use indexmap::IndexMap;

/// Root of the AST: every operation and fragment defined in the input.
///
/// Operations are keyed by name, with the anonymous operation (`{ ... }` or
/// an unnamed `query { ... }`) stored under `""`. A definition whose name is
/// already present replaces the earlier one; no duplicate-name error is
/// raised.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub operations: IndexMap<String, Operation>,
    pub fragments: IndexMap<String, Fragment>,
}

impl Document {
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    /// The operation stored under the empty name, if any.
    pub fn anonymous_operation(&self) -> Option<&Operation> {
        self.operations.get("")
    }

    pub fn fragment(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    /// Returns `true` if the input contained no definitions at all.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.fragments.is_empty()
    }

    /// Inserts `operation` under its name, replacing any previous operation
    /// with that name.
    pub(crate) fn insert_operation(&mut self, operation: Operation) {
        let key = operation.map_key().to_string();
        if self.operations.insert(key, operation).is_some() {
            log::debug!("replaced earlier operation with the same name");
        }
    }

    /// Inserts `fragment` under its name, replacing any previous fragment
    /// with that name.
    pub(crate) fn insert_fragment(&mut self, fragment: Fragment) {
        let key = fragment.name.clone();
        if let Some(previous) = self.fragments.insert(key, fragment) {
            log::debug!("replaced earlier fragment `{}`", previous.name);
        }
    }
}
