//! Tri-state subtype checking.
//!
//! `SubtypeChecker::check_subtype(source, target)` answers "is every value of
//! `source` also a value of `target`?" with `True`, `False`, or `Maybe` when
//! the answer depends on information the type does not carry (an
//! un-parameterized collection, a non-final class that might implement an
//! interface). Callers that need certainty require `True`.
//!
//! Composite types are dispatched in a fixed order:
//! 1. union source (every member must relate)
//! 2. union target (some member must accept)
//! 3. intersection target (every member must accept)
//! 4. intersection source (some member must relate)
//!
//! Atomic pairs are handled by the rules in `subtype_rules`.

use crate::inheritance::InheritanceGraph;
use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId};
use ormcheck_common::limits::MAX_SUBTYPE_DEPTH;

/// Three-valued relation result.
///
/// Ordered `False < Maybe < True`, so `and` is a minimum and `or` a maximum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubtypeResult {
    False,
    Maybe,
    True,
}

impl SubtypeResult {
    #[inline]
    pub fn is_true(self) -> bool {
        self == SubtypeResult::True
    }

    #[inline]
    pub fn is_false(self) -> bool {
        self == SubtypeResult::False
    }

    #[inline]
    pub fn and(self, other: SubtypeResult) -> SubtypeResult {
        self.min(other)
    }

    #[inline]
    pub fn or(self, other: SubtypeResult) -> SubtypeResult {
        self.max(other)
    }

    pub fn from_bool(value: bool) -> SubtypeResult {
        if value {
            SubtypeResult::True
        } else {
            SubtypeResult::False
        }
    }

    /// `True`/`False` when all results agree, `Maybe` otherwise.
    ///
    /// An empty sequence is `True`.
    pub fn extreme_identity(results: impl IntoIterator<Item = SubtypeResult>) -> SubtypeResult {
        let mut seen: Option<SubtypeResult> = None;
        for result in results {
            match seen {
                None => seen = Some(result),
                Some(previous) if previous != result => return SubtypeResult::Maybe,
                Some(_) => {}
            }
        }
        seen.unwrap_or(SubtypeResult::True)
    }
}

pub struct SubtypeChecker<'a> {
    pub(crate) interner: &'a TypeInterner,
    pub(crate) hierarchy: &'a InheritanceGraph,
    depth: u32,
    depth_exceeded: bool,
}

impl<'a> SubtypeChecker<'a> {
    pub fn new(interner: &'a TypeInterner, hierarchy: &'a InheritanceGraph) -> Self {
        Self {
            interner,
            hierarchy,
            depth: 0,
            depth_exceeded: false,
        }
    }

    /// Whether any query run by this checker hit the recursion limit.
    pub fn depth_exceeded(&self) -> bool {
        self.depth_exceeded
    }

    pub fn is_subtype_of(&mut self, source: TypeId, target: TypeId) -> bool {
        self.check_subtype(source, target).is_true()
    }

    pub fn check_subtype(&mut self, source: TypeId, target: TypeId) -> SubtypeResult {
        if self.depth >= MAX_SUBTYPE_DEPTH {
            self.depth_exceeded = true;
            return SubtypeResult::Maybe;
        }
        self.depth += 1;
        let result = self.check_subtype_inner(source, target);
        self.depth -= 1;
        result
    }

    fn check_subtype_inner(&mut self, source: TypeId, target: TypeId) -> SubtypeResult {
        if source == target || target.is_mixed() || source.is_never() {
            return SubtypeResult::True;
        }
        if target.is_never() {
            return SubtypeResult::False;
        }
        if source.is_mixed() {
            return SubtypeResult::Maybe;
        }

        let (Some(source_data), Some(target_data)) =
            (self.interner.lookup(source), self.interner.lookup(target))
        else {
            return SubtypeResult::False;
        };

        if let TypeData::Union(members) = &source_data {
            return self.check_union_source(members, target);
        }
        if let TypeData::Union(members) = &target_data {
            return self.check_union_target(source, members);
        }
        if let TypeData::Intersection(members) = &target_data {
            return self.check_intersection_target(source, members);
        }
        if let TypeData::Intersection(members) = &source_data {
            return self.check_intersection_source(members, target);
        }

        match (&source_data, &target_data) {
            (TypeData::Intrinsic(_), _) | (_, TypeData::Intrinsic(_)) => {
                // Distinct intrinsics (equal ids were handled above) and
                // intrinsic-vs-composite pairs never relate.
                SubtypeResult::False
            }
            (
                TypeData::Object {
                    class: s_class,
                    type_args: s_args,
                },
                TypeData::Object {
                    class: t_class,
                    type_args: t_args,
                },
            ) => self.check_object_subtype(*s_class, s_args, *t_class, t_args),
            (TypeData::Object { class, type_args }, TypeData::Iterable { key, value }) => {
                self.check_object_to_iterable(*class, type_args, *key, *value)
            }
            (TypeData::Iterable { .. }, TypeData::Object { class, .. }) => {
                self.check_iterable_to_object(*class)
            }
            (
                TypeData::Array {
                    key: s_key,
                    value: s_value,
                }
                | TypeData::Iterable {
                    key: s_key,
                    value: s_value,
                },
                TypeData::Iterable {
                    key: t_key,
                    value: t_value,
                },
            ) => self.check_key_value(*s_key, *s_value, *t_key, *t_value),
            (
                TypeData::Array {
                    key: s_key,
                    value: s_value,
                },
                TypeData::Array {
                    key: t_key,
                    value: t_value,
                },
            ) => self.check_key_value(*s_key, *s_value, *t_key, *t_value),
            (
                TypeData::Iterable {
                    key: s_key,
                    value: s_value,
                },
                TypeData::Array {
                    key: t_key,
                    value: t_value,
                },
            ) => {
                // An iterable may or may not be an array.
                SubtypeResult::Maybe.and(self.check_key_value(*s_key, *s_value, *t_key, *t_value))
            }
            (TypeData::Array { .. }, TypeData::Object { .. })
            | (TypeData::Object { .. }, TypeData::Array { .. }) => SubtypeResult::False,
            (TypeData::Union(_) | TypeData::Intersection(_), _)
            | (_, TypeData::Union(_) | TypeData::Intersection(_)) => SubtypeResult::False,
        }
    }
}

/// One-shot subtype query.
pub fn is_subtype_of(
    interner: &TypeInterner,
    hierarchy: &InheritanceGraph,
    source: TypeId,
    target: TypeId,
) -> bool {
    SubtypeChecker::new(interner, hierarchy).is_subtype_of(source, target)
}

#[cfg(test)]
#[path = "../tests/subtype_tests.rs"]
mod tests;
