//! Relation query entrypoint.
//!
//! Checker code calls `query_relation` instead of driving a `SubtypeChecker`
//! directly, so tracing and the depth-limit flag are handled in one place.

use crate::format::format_type;
use crate::inheritance::InheritanceGraph;
use crate::intern::TypeInterner;
use crate::subtype::{SubtypeChecker, SubtypeResult};
use crate::types::TypeId;

/// Result of a relation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationResult {
    pub result: SubtypeResult,
    pub depth_exceeded: bool,
}

impl RelationResult {
    /// Only a definite `True` counts as related.
    #[inline]
    pub fn is_related(self) -> bool {
        self.result.is_true()
    }
}

/// Is `source` a subtype of `target` under `hierarchy`?
pub fn query_relation(
    interner: &TypeInterner,
    hierarchy: &InheritanceGraph,
    source: TypeId,
    target: TypeId,
) -> RelationResult {
    let mut checker = SubtypeChecker::new(interner, hierarchy);
    let result = checker.check_subtype(source, target);
    let depth_exceeded = checker.depth_exceeded();

    if tracing::enabled!(target: "ormcheck::relation", tracing::Level::TRACE) {
        tracing::trace!(
            target: "ormcheck::relation",
            from = %format_type(interner, source),
            to = %format_type(interner, target),
            ?result,
            depth_exceeded,
            "relation query"
        );
    }
    if depth_exceeded {
        tracing::warn!(
            from = %format_type(interner, source),
            to = %format_type(interner, target),
            "subtype check hit the recursion limit"
        );
    }

    RelationResult {
        result,
        depth_exceeded,
    }
}

#[cfg(test)]
#[path = "../tests/relation_queries_tests.rs"]
mod tests;
