//! Association mapping type checker.
//!
//! `EntityRelationChecker` compares each association property's declared
//! type with the type its ORM mapping implies and reports mismatches in
//! both directions.

pub mod entity;
pub mod expected_type;
pub mod options;
pub mod relation_rule;

pub use entity::{DeclaredProperty, EntityClass};
pub use expected_type::{expected_type, is_expected_nullable, normalize_collection};
pub use options::RelationCheckOptions;
pub use relation_rule::{EntityRelationChecker, database_direction_holds, property_direction_holds};
