//! Nullability helpers shared by the checker and the parser.

use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId};

/// `T|null`.
pub fn add_null(types: &TypeInterner, type_id: TypeId) -> TypeId {
    types.union(vec![type_id, TypeId::NULL])
}

/// `T` without its `null` member. `null` alone becomes `never`.
pub fn remove_null(types: &TypeInterner, type_id: TypeId) -> TypeId {
    if type_id.is_null() {
        return TypeId::NEVER;
    }
    match types.lookup(type_id) {
        Some(TypeData::Union(members)) => types.union(
            members
                .iter()
                .copied()
                .filter(|member| !member.is_null())
                .collect(),
        ),
        _ => type_id,
    }
}

/// Whether `null` is a member of the type (or is the type).
pub fn is_nullable(types: &TypeInterner, type_id: TypeId) -> bool {
    type_id.is_null() || types.union_members(type_id).contains(&TypeId::NULL)
}

#[cfg(test)]
#[path = "../tests/type_operations_tests.rs"]
mod tests;
