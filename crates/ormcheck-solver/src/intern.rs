//! Type interning.
//!
//! The interner deduplicates structurally identical types and normalizes
//! unions and intersections on construction, so `TypeId` equality is the only
//! equality the rest of the solver needs.

use crate::types::{IntrinsicKind, TypeData, TypeId, TypeList};
use ormcheck_common::{Atom, Interner};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct TypeTable {
    map: FxHashMap<TypeData, TypeId>,
    data: Vec<TypeData>,
}

/// Shared, thread-safe type store.
pub struct TypeInterner {
    atoms: Interner,
    table: RwLock<TypeTable>,
}

impl TypeInterner {
    pub fn new() -> Self {
        let interner = Self {
            atoms: Interner::new(),
            table: RwLock::new(TypeTable::default()),
        };
        // Intrinsics occupy the first ids in `IntrinsicKind::ALL` order.
        for kind in IntrinsicKind::ALL {
            let id = interner.intern(TypeData::Intrinsic(kind));
            debug_assert_eq!(id, kind.to_type_id());
        }
        interner
    }

    fn read(&self) -> RwLockReadGuard<'_, TypeTable> {
        self.table.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, TypeTable> {
        self.table
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Intern raw type data without normalization.
    pub fn intern(&self, data: TypeData) -> TypeId {
        if let Some(&id) = self.read().map.get(&data) {
            return id;
        }
        let mut table = self.write();
        if let Some(&id) = table.map.get(&data) {
            return id;
        }
        let id = TypeId(table.data.len() as u32);
        table.data.push(data.clone());
        table.map.insert(data, id);
        id
    }

    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        self.read().data.get(id.0 as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Strings
    // =========================================================================

    pub fn intern_string(&self, text: &str) -> Atom {
        self.atoms.intern(text)
    }

    pub fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.atoms.resolve(atom)
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Non-generic class or interface instance.
    pub fn object(&self, class: &str) -> TypeId {
        self.generic_object(class, Vec::new())
    }

    /// Class instance with generic arguments, e.g. `Collection<int, User>`.
    pub fn generic_object(&self, class: &str, type_args: Vec<TypeId>) -> TypeId {
        let class = self.intern_string(class.trim_start_matches('\\'));
        self.intern(TypeData::Object {
            class,
            type_args: TypeList::from_vec(type_args),
        })
    }

    pub fn iterable(&self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(TypeData::Iterable { key, value })
    }

    pub fn array(&self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(TypeData::Array { key, value })
    }

    /// Normalized union.
    ///
    /// Nested unions are flattened, duplicates and `never` are dropped, `mixed`
    /// absorbs everything and `null` is ordered last.
    pub fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::with_capacity(members.len());
        let mut seen = FxHashSet::default();
        let mut has_null = false;
        for member in members {
            self.collect_flattened(member, true, &mut |id| {
                if id.is_null() {
                    has_null = true;
                } else if !id.is_never() && seen.insert(id) {
                    flat.push(id);
                }
            });
        }
        if flat.contains(&TypeId::MIXED) {
            return TypeId::MIXED;
        }
        if has_null {
            flat.push(TypeId::NULL);
        }
        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => self.intern(TypeData::Union(TypeList::from_vec(flat))),
        }
    }

    /// Normalized intersection.
    ///
    /// Nested intersections are flattened, duplicates and `mixed` are dropped
    /// and `never` absorbs everything. Member order is preserved.
    pub fn intersection(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::with_capacity(members.len());
        let mut seen = FxHashSet::default();
        for member in members {
            self.collect_flattened(member, false, &mut |id| {
                if !id.is_mixed() && seen.insert(id) {
                    flat.push(id);
                }
            });
        }
        if flat.contains(&TypeId::NEVER) {
            return TypeId::NEVER;
        }
        match flat.len() {
            0 => TypeId::MIXED,
            1 => flat[0],
            _ => self.intern(TypeData::Intersection(TypeList::from_vec(flat))),
        }
    }

    fn collect_flattened(&self, id: TypeId, union: bool, sink: &mut dyn FnMut(TypeId)) {
        match self.lookup(id) {
            Some(TypeData::Union(members)) if union => {
                for member in members {
                    self.collect_flattened(member, union, sink);
                }
            }
            Some(TypeData::Intersection(members)) if !union => {
                for member in members {
                    self.collect_flattened(member, union, sink);
                }
            }
            _ => sink(id),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Class name of an object type.
    pub fn class_name(&self, id: TypeId) -> Option<Arc<str>> {
        match self.lookup(id)? {
            TypeData::Object { class, .. } => Some(self.resolve_atom(class)),
            _ => None,
        }
    }

    /// Union members, or the type itself for a non-union.
    pub fn union_members(&self, id: TypeId) -> Vec<TypeId> {
        match self.lookup(id) {
            Some(TypeData::Union(members)) => members.to_vec(),
            _ => vec![id],
        }
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeInterner")
            .field("types", &self.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
