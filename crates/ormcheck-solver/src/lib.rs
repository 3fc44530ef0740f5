//! Type solver for association mapping checks.
//!
//! - **Interned types**: structurally equal types share one `TypeId`
//! - **Tri-state relations**: `True`, `False` or `Maybe`, where only `True`
//!   proves a subtype relation
//! - **Nominal hierarchy**: class and interface relations come from an
//!   `InheritanceGraph` populated by the caller
//!
//! Types are built either programmatically through `TypeInterner` or by
//! parsing annotation text with `parse_type`, and rendered back with
//! `format_type`.

pub mod format;
pub mod inheritance;
mod intern;
pub mod parser;
pub mod relation_queries;
pub mod subtype;
mod subtype_rules;
pub mod type_operations;
pub mod types;

pub use format::{TypeFormatter, format_type};
pub use inheritance::{ClassInfo, ClassKind, InheritanceGraph, builtin, same_class};
pub use intern::TypeInterner;
pub use parser::{TypeParseError, TypeParser, parse_type};
pub use relation_queries::{RelationResult, query_relation};
pub use subtype::{SubtypeChecker, SubtypeResult, is_subtype_of};
pub use type_operations::{add_null, is_nullable, remove_null};
pub use types::{IntrinsicKind, TypeData, TypeId, TypeList};
