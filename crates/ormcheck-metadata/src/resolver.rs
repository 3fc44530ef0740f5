//! Metadata resolution contract and the run-scoped cache behind it.

use crate::mapping::ClassMetadata;
use dashmap::DashMap;
use std::sync::Arc;

/// Source of class metadata for one analysis run.
///
/// Implementations never fail outward: a class that is not an entity, or
/// metadata that cannot be produced, resolves to `None`.
pub trait MetadataResolver: Send + Sync {
    /// Metadata for `class`, or `None` when it is not a mapped entity.
    fn resolve(&self, class: &str) -> Option<Arc<ClassMetadata>>;

    /// Offer mapping data the driver attached to a class.
    ///
    /// Returns true when the resolver will use it. Resolvers that produce
    /// their own metadata ignore attachments.
    fn attach(&self, _metadata: ClassMetadata) -> bool {
        false
    }

    /// End the current run: forget everything resolved so far.
    fn clear(&self);
}

/// Normalized cache key: class names are case-insensitive and may carry a
/// leading namespace separator.
pub(crate) fn class_key(class: &str) -> String {
    class.trim_start_matches('\\').to_ascii_lowercase()
}

/// Resolved-at-most-once cache keyed by class name.
///
/// Negative results are cached too, so a class without metadata is not
/// looked up again within the run.
#[derive(Debug, Default)]
pub struct MetadataCache {
    entries: DashMap<String, Option<Arc<ClassMetadata>>>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `class`, computing it with `resolve` on first use.
    pub fn get_or_resolve(
        &self,
        class: &str,
        resolve: impl FnOnce() -> Option<Arc<ClassMetadata>>,
    ) -> Option<Arc<ClassMetadata>> {
        let key = class_key(class);
        if let Some(entry) = self.entries.get(&key) {
            return entry.value().clone();
        }
        self.entries.entry(key).or_insert_with(resolve).value().clone()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.entries.contains_key(&class_key(class))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
