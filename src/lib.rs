//! ormcheck: checks that ORM association mappings agree with the types
//! declared on the mapped properties.
//!
//! This crate re-exports the workspace crates under one name:
//!
//! - [`common`]: diagnostics and message templates
//! - [`solver`]: type model, parser, formatter and subtype relation
//! - [`metadata`]: mapping model and metadata resolvers
//! - [`checker`]: the association type rule

pub use ormcheck_checker as checker;
pub use ormcheck_common as common;
pub use ormcheck_metadata as metadata;
pub use ormcheck_solver as solver;

pub mod tracing_config;

pub use ormcheck_checker::{DeclaredProperty, EntityClass, EntityRelationChecker, RelationCheckOptions};
pub use ormcheck_common::Diagnostic;
pub use ormcheck_metadata::{MetadataResolver, ResolverConfig};
