//! Key/value relations shared by arrays, iterables and traversable objects.

use crate::subtype::{SubtypeChecker, SubtypeResult};
use crate::types::TypeId;

impl<'a> SubtypeChecker<'a> {
    /// Keys and values are compared covariantly.
    pub(crate) fn check_key_value(
        &mut self,
        source_key: TypeId,
        source_value: TypeId,
        target_key: TypeId,
        target_value: TypeId,
    ) -> SubtypeResult {
        let keys = self.check_subtype(source_key, target_key);
        if keys.is_false() {
            return keys;
        }
        keys.and(self.check_subtype(source_value, target_value))
    }
}

/// Key and value types a generic traversable object iterates over.
///
/// `Collection<K, V>` yields `(K, V)`, `Collection<V>` yields `(mixed, V)`
/// and an un-parameterized class yields `(mixed, mixed)`.
pub(crate) fn iterated_key_value(type_args: &[TypeId]) -> (TypeId, TypeId) {
    match type_args {
        [] => (TypeId::MIXED, TypeId::MIXED),
        [value] => (TypeId::MIXED, *value),
        [.., key, value] => (*key, *value),
    }
}
