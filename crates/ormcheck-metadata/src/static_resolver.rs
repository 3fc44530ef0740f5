//! Static mode: metadata comes only from what the driver attached.

use crate::mapping::ClassMetadata;
use crate::resolver::{MetadataCache, MetadataResolver, class_key};
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct StaticResolver {
    attached: DashMap<String, Arc<ClassMetadata>>,
    cache: MetadataCache,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_len(&self) -> usize {
        self.attached.len()
    }
}

impl MetadataResolver for StaticResolver {
    fn resolve(&self, class: &str) -> Option<Arc<ClassMetadata>> {
        self.cache.get_or_resolve(class, || {
            let metadata = self.attached.get(&class_key(class))?.value().clone();
            if !metadata.is_entity() {
                tracing::debug!(class, "attached mapping is not an entity");
                return None;
            }
            Some(metadata)
        })
    }

    fn attach(&self, metadata: ClassMetadata) -> bool {
        let key = class_key(&metadata.name);
        // A class attached after it was resolved must not keep a stale answer.
        if self.cache.contains(&metadata.name) {
            self.cache.clear();
        }
        self.attached.insert(key, Arc::new(metadata));
        true
    }

    fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
#[path = "../tests/static_resolver_tests.rs"]
mod tests;
