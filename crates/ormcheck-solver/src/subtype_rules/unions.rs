//! Union and intersection subtype checking.
//!
//! - Union source (A | B): every member must be a subtype; the result is
//!   `True`/`False` only when all members agree, otherwise `Maybe`.
//! - Union target: the best answer over the members.
//! - Intersection target (A & B): the worst answer over the members.
//! - Intersection source: the best answer over the members.

use crate::subtype::{SubtypeChecker, SubtypeResult};
use crate::types::TypeId;

impl<'a> SubtypeChecker<'a> {
    pub(crate) fn check_union_source(&mut self, members: &[TypeId], target: TypeId) -> SubtypeResult {
        let results: Vec<SubtypeResult> = members
            .iter()
            .map(|&member| self.check_subtype(member, target))
            .collect();
        SubtypeResult::extreme_identity(results)
    }

    pub(crate) fn check_union_target(&mut self, source: TypeId, members: &[TypeId]) -> SubtypeResult {
        let mut best = SubtypeResult::False;
        for &member in members {
            best = best.or(self.check_subtype(source, member));
            if best.is_true() {
                break;
            }
        }
        best
    }

    pub(crate) fn check_intersection_target(
        &mut self,
        source: TypeId,
        members: &[TypeId],
    ) -> SubtypeResult {
        let mut worst = SubtypeResult::True;
        for &member in members {
            worst = worst.and(self.check_subtype(source, member));
            if worst.is_false() {
                break;
            }
        }
        worst
    }

    pub(crate) fn check_intersection_source(
        &mut self,
        members: &[TypeId],
        target: TypeId,
    ) -> SubtypeResult {
        let mut best = SubtypeResult::False;
        for &member in members {
            best = best.or(self.check_subtype(member, target));
            if best.is_true() {
                break;
            }
        }
        best
    }
}
