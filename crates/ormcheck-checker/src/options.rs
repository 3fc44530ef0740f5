//! Checker options.

use ormcheck_solver::builtin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationCheckOptions {
    /// Tolerate `T|null` on a property whose association is required.
    pub allow_nullable_property_for_required_field: bool,
    /// Interface a to-many association is exposed through.
    pub collection_interface: String,
}

impl Default for RelationCheckOptions {
    fn default() -> Self {
        Self {
            allow_nullable_property_for_required_field: false,
            collection_interface: builtin::COLLECTION.to_string(),
        }
    }
}

impl RelationCheckOptions {
    pub fn with_allow_nullable_property_for_required_field(mut self, allow: bool) -> Self {
        self.allow_nullable_property_for_required_field = allow;
        self
    }

    pub fn with_collection_interface(mut self, interface: impl Into<String>) -> Self {
        self.collection_interface = interface.into().trim_start_matches('\\').to_string();
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
