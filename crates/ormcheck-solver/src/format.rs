//! Type-to-text rendering.
//!
//! Grammar:
//! - unions `A|B|null` (the interner keeps `null` last)
//! - intersections `A&B`
//! - composites nested in the other kind are parenthesized: `(A&B)|null`
//! - generics `Class<A, B>`
//! - `iterable<V>` / `array<V>` when the key is `mixed`, `iterable<K, V>`
//!   otherwise, and the bare keyword when both are `mixed`

use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId};
use ormcheck_common::limits::MAX_FORMAT_DEPTH;

pub struct TypeFormatter<'a> {
    interner: &'a TypeInterner,
    depth: u32,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        Self { interner, depth: 0 }
    }

    pub fn format(&mut self, type_id: TypeId) -> String {
        let mut out = String::new();
        self.write(&mut out, type_id);
        out
    }

    fn write(&mut self, out: &mut String, type_id: TypeId) {
        if self.depth >= MAX_FORMAT_DEPTH {
            out.push_str("...");
            return;
        }
        self.depth += 1;
        self.write_inner(out, type_id);
        self.depth -= 1;
    }

    fn write_inner(&mut self, out: &mut String, type_id: TypeId) {
        let Some(data) = self.interner.lookup(type_id) else {
            out.push_str("*ERROR*");
            return;
        };
        match data {
            TypeData::Intrinsic(kind) => out.push_str(kind.keyword()),
            TypeData::Object { class, type_args } => {
                out.push_str(&self.interner.resolve_atom(class));
                if !type_args.is_empty() {
                    self.write_arguments(out, &type_args);
                }
            }
            TypeData::Iterable { key, value } => self.write_keyed(out, "iterable", key, value),
            TypeData::Array { key, value } => self.write_keyed(out, "array", key, value),
            TypeData::Union(members) => self.write_joined(out, &members, "|"),
            TypeData::Intersection(members) => self.write_joined(out, &members, "&"),
        }
    }

    fn write_keyed(&mut self, out: &mut String, keyword: &str, key: TypeId, value: TypeId) {
        out.push_str(keyword);
        if key.is_mixed() && value.is_mixed() {
            return;
        }
        if key.is_mixed() {
            self.write_arguments(out, &[value]);
        } else {
            self.write_arguments(out, &[key, value]);
        }
    }

    fn write_arguments(&mut self, out: &mut String, args: &[TypeId]) {
        out.push('<');
        for (index, &arg) in args.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            self.write(out, arg);
        }
        out.push('>');
    }

    fn write_joined(&mut self, out: &mut String, members: &[TypeId], separator: &str) {
        for (index, &member) in members.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            let composite = matches!(
                self.interner.lookup(member),
                Some(TypeData::Union(_) | TypeData::Intersection(_))
            );
            if composite {
                out.push('(');
                self.write(out, member);
                out.push(')');
            } else {
                self.write(out, member);
            }
        }
    }
}

/// Render a type with a fresh formatter.
pub fn format_type(interner: &TypeInterner, type_id: TypeId) -> String {
    TypeFormatter::new(interner).format(type_id)
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
