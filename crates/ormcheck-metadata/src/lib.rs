//! ORM association metadata for ormcheck.
//!
//! A `MetadataResolver` answers "which associations does this class map?"
//! for one analysis run. Two implementations exist:
//!
//! - `LiveResolver` runs a user-supplied bootstrap once and reads the object
//!   manager snapshot it prints.
//! - `StaticResolver` serves mapping data the driver attached to classes.
//!
//! Both cache per class and are cleared at the run boundary.

pub mod live;
pub mod mapping;
pub mod resolver;
pub mod static_resolver;

pub use live::{BootstrapLoader, LiveResolver, LoaderError, ObjectManagerSnapshot};
pub use mapping::{
    AssociationMapping, AssociationType, Cardinality, ClassMetadata, JoinColumn, JoinTable,
    PrimaryKeyRole, RawAssociationMapping, RawMappingKind,
};
pub use resolver::{MetadataCache, MetadataResolver};
pub use static_resolver::StaticResolver;

use std::path::PathBuf;
use std::sync::Arc;

/// Resolver selection for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Bootstrap script; absent selects static mode.
    pub object_manager_loader: Option<PathBuf>,
    pub bootstrap_interpreter: Option<String>,
}

impl ResolverConfig {
    pub fn build(&self) -> Arc<dyn MetadataResolver> {
        match &self.object_manager_loader {
            Some(script) => {
                let mut loader = BootstrapLoader::new(script);
                if let Some(interpreter) = &self.bootstrap_interpreter {
                    loader = loader.with_interpreter(interpreter);
                }
                tracing::debug!(script = %script.display(), "using live metadata");
                Arc::new(LiveResolver::new(loader))
            }
            None => {
                tracing::debug!("using static metadata");
                Arc::new(StaticResolver::new())
            }
        }
    }
}
