//! Types on both sides of an association before they are compared.
//!
//! The expected side is derived from the mapping: the target entity, or
//! `Collection&iterable<Target>` for to-many. The declared side of a to-many
//! association has generic collections rewritten into the same shape so
//! `Collection<int, Target>` and `Collection&iterable<Target>` compare equal.
//! Keys of declared iterables and arrays are ignored the same way; only the
//! element type and the container kind take part in the comparison.

use crate::options::RelationCheckOptions;
use ormcheck_metadata::{AssociationMapping, PrimaryKeyRole};
use ormcheck_solver::{InheritanceGraph, TypeData, TypeId, TypeInterner, add_null};

/// Whether the database side of a to-one association can be null.
///
/// The sole identifier of an entity is never null. Composite identifier
/// members and keyless entities follow their own mapping.
pub fn is_expected_nullable(mapping: &AssociationMapping) -> bool {
    if mapping.is_to_many() {
        return false;
    }
    mapping.is_nullable && mapping.primary_key != PrimaryKeyRole::Sole
}

/// Type the mapping allows the property to hold.
pub fn expected_type(
    interner: &TypeInterner,
    options: &RelationCheckOptions,
    mapping: &AssociationMapping,
) -> TypeId {
    let target = interner.object(&mapping.target_entity);
    if mapping.is_to_many() {
        return collection_of(interner, &options.collection_interface, target);
    }
    if is_expected_nullable(mapping) {
        add_null(interner, target)
    } else {
        target
    }
}

/// `Class&iterable<value>`.
fn collection_of(interner: &TypeInterner, class: &str, value: TypeId) -> TypeId {
    interner.intersection(vec![
        interner.object(class),
        interner.iterable(TypeId::MIXED, value),
    ])
}

/// Rewrite generic collections in a declared to-many type.
///
/// `C<K, V>` where `C` is the collection interface or implements it becomes
/// `C&iterable<V>`; `iterable<K, V>` and `array<K, V>` lose their key.
/// Union and intersection members are rewritten one by one. Anything else is
/// returned unchanged.
pub fn normalize_collection(
    interner: &TypeInterner,
    hierarchy: &InheritanceGraph,
    options: &RelationCheckOptions,
    declared: TypeId,
) -> TypeId {
    match interner.lookup(declared) {
        Some(TypeData::Object { class, type_args }) if !type_args.is_empty() => {
            let name = interner.resolve_atom(class);
            if !hierarchy.is_same_or_derived(&name, &options.collection_interface) {
                return declared;
            }
            let value = type_args.last().copied().unwrap_or(TypeId::MIXED);
            collection_of(interner, &name, value)
        }
        Some(TypeData::Iterable { key, value }) if key != TypeId::MIXED => {
            interner.iterable(TypeId::MIXED, value)
        }
        Some(TypeData::Array { key, value }) if key != TypeId::MIXED => {
            interner.array(TypeId::MIXED, value)
        }
        Some(TypeData::Union(members)) => interner.union(
            members
                .iter()
                .map(|&member| normalize_collection(interner, hierarchy, options, member))
                .collect(),
        ),
        Some(TypeData::Intersection(members)) => interner.intersection(
            members
                .iter()
                .map(|&member| normalize_collection(interner, hierarchy, options, member))
                .collect(),
        ),
        _ => declared,
    }
}

#[cfg(test)]
#[path = "../tests/expected_type_tests.rs"]
mod tests;
