//! Nominal object relations.
//!
//! Class relations go through the `InheritanceGraph`. Generic arguments are
//! compared covariantly and positionally; missing arguments count as `mixed`.

use super::iterables::iterated_key_value;
use crate::inheritance::same_class;
use crate::subtype::{SubtypeChecker, SubtypeResult};
use crate::types::TypeId;
use ormcheck_common::Atom;

impl<'a> SubtypeChecker<'a> {
    pub(crate) fn check_object_subtype(
        &mut self,
        source_class: Atom,
        source_args: &[TypeId],
        target_class: Atom,
        target_args: &[TypeId],
    ) -> SubtypeResult {
        let source_name = self.interner.resolve_atom(source_class);
        let target_name = self.interner.resolve_atom(target_class);

        if same_class(&source_name, &target_name) {
            return self.check_type_arguments(source_args, target_args);
        }
        if self.hierarchy.is_derived_from(&source_name, &target_name) {
            if target_args.is_empty() {
                return SubtypeResult::True;
            }
            // Template layout of a subclass is unknown; only a matching arity
            // is compared positionally.
            if source_args.len() == target_args.len() {
                return self.check_type_arguments(source_args, target_args);
            }
            return SubtypeResult::Maybe;
        }
        if self.hierarchy.may_share_instances(&source_name, &target_name) {
            return SubtypeResult::Maybe;
        }
        SubtypeResult::False
    }

    fn check_type_arguments(&mut self, source_args: &[TypeId], target_args: &[TypeId]) -> SubtypeResult {
        let mut result = SubtypeResult::True;
        for (index, &target_arg) in target_args.iter().enumerate() {
            let source_arg = source_args.get(index).copied().unwrap_or(TypeId::MIXED);
            result = result.and(self.check_subtype(source_arg, target_arg));
            if result.is_false() {
                break;
            }
        }
        result
    }

    pub(crate) fn check_object_to_iterable(
        &mut self,
        class: Atom,
        type_args: &[TypeId],
        target_key: TypeId,
        target_value: TypeId,
    ) -> SubtypeResult {
        let name = self.interner.resolve_atom(class);
        if self.hierarchy.is_traversable(&name) {
            let (key, value) = iterated_key_value(type_args);
            return self.check_key_value(key, value, target_key, target_value);
        }
        if self.hierarchy.is_final(&name) {
            SubtypeResult::False
        } else {
            // A subclass might implement Traversable.
            SubtypeResult::Maybe
        }
    }

    pub(crate) fn check_iterable_to_object(&mut self, class: Atom) -> SubtypeResult {
        let name = self.interner.resolve_atom(class);
        // Arrays are iterable too, so an iterable is at best possibly an object.
        if self.hierarchy.is_final(&name) && !self.hierarchy.is_traversable(&name) {
            SubtypeResult::False
        } else {
            SubtypeResult::Maybe
        }
    }
}
