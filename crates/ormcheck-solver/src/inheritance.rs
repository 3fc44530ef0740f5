//! Class hierarchy used for nominal object relations.
//!
//! The graph records, per class or interface, its direct parents (extended
//! class and implemented interfaces) plus the `final` flag. Class names are
//! compared case-insensitively, as in the source language.
//!
//! Cycle detection for inheritance (class A extends B, B extends A) happens on
//! insertion: an edge that would close a cycle is rejected, so every query
//! below can assume the graph is acyclic.

use ormcheck_common::limits::MAX_HIERARCHY_WALK;
use rustc_hash::{FxHashMap, FxHashSet};

/// Well-known names the solver relies on.
pub mod builtin {
    pub const TRAVERSABLE: &str = "Traversable";
    pub const ITERATOR: &str = "Iterator";
    pub const ITERATOR_AGGREGATE: &str = "IteratorAggregate";
    pub const COUNTABLE: &str = "Countable";
    pub const ARRAY_ACCESS: &str = "ArrayAccess";
    pub const READABLE_COLLECTION: &str = "Doctrine\\Common\\Collections\\ReadableCollection";
    pub const COLLECTION: &str = "Doctrine\\Common\\Collections\\Collection";
    pub const SELECTABLE: &str = "Doctrine\\Common\\Collections\\Selectable";
    pub const ARRAY_COLLECTION: &str = "Doctrine\\Common\\Collections\\ArrayCollection";
    pub const PERSISTENT_COLLECTION: &str = "Doctrine\\ORM\\PersistentCollection";
    pub const ABSTRACT_LAZY_COLLECTION: &str =
        "Doctrine\\Common\\Collections\\AbstractLazyCollection";
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
}

#[derive(Clone, Debug, Default)]
pub struct ClassInfo {
    pub name: String,
    pub kind: ClassKind,
    pub is_final: bool,
    pub parents: Vec<String>,
}

fn key(name: &str) -> String {
    name.trim_start_matches('\\').to_ascii_lowercase()
}

/// Returns true when two class names denote the same class.
pub fn same_class(a: &str, b: &str) -> bool {
    a.trim_start_matches('\\')
        .eq_ignore_ascii_case(b.trim_start_matches('\\'))
}

#[derive(Clone, Debug, Default)]
pub struct InheritanceGraph {
    classes: FxHashMap<String, ClassInfo>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph pre-populated with the iteration interfaces and the collection
    /// classes association properties are declared with.
    pub fn with_builtin_classes() -> Self {
        use builtin::*;

        let mut graph = Self::new();
        graph.declare_interface(TRAVERSABLE, &[]);
        graph.declare_interface(ITERATOR, &[TRAVERSABLE]);
        graph.declare_interface(ITERATOR_AGGREGATE, &[TRAVERSABLE]);
        graph.declare_interface(COUNTABLE, &[]);
        graph.declare_interface(ARRAY_ACCESS, &[]);
        graph.declare_interface(READABLE_COLLECTION, &[COUNTABLE, ITERATOR_AGGREGATE]);
        graph.declare_interface(COLLECTION, &[READABLE_COLLECTION, ARRAY_ACCESS]);
        graph.declare_interface(SELECTABLE, &[]);
        graph.declare_class(ARRAY_COLLECTION, &[COLLECTION, SELECTABLE], false);
        graph.declare_class(ABSTRACT_LAZY_COLLECTION, &[COLLECTION], false);
        graph.declare_class(PERSISTENT_COLLECTION, &[ABSTRACT_LAZY_COLLECTION, SELECTABLE], false);
        graph
    }

    pub fn declare_interface(&mut self, name: &str, parents: &[&str]) -> bool {
        self.declare(ClassInfo {
            name: name.trim_start_matches('\\').to_string(),
            kind: ClassKind::Interface,
            is_final: false,
            parents: Vec::new(),
        });
        self.add_inheritance(name, parents)
    }

    pub fn declare_class(&mut self, name: &str, parents: &[&str], is_final: bool) -> bool {
        self.declare(ClassInfo {
            name: name.trim_start_matches('\\').to_string(),
            kind: ClassKind::Class,
            is_final,
            parents: Vec::new(),
        });
        self.add_inheritance(name, parents)
    }

    /// Register a class, keeping any parents already recorded for it.
    pub fn declare(&mut self, info: ClassInfo) {
        let entry = self.classes.entry(key(&info.name)).or_default();
        let parents = std::mem::take(&mut entry.parents);
        *entry = ClassInfo { parents, ..info };
    }

    /// Add `child -> parents` edges.
    ///
    /// Returns false when at least one edge was rejected because it would
    /// create a cycle; the remaining edges are still added.
    pub fn add_inheritance(&mut self, child: &str, parents: &[&str]) -> bool {
        let mut all_added = true;
        for parent in parents {
            if self.detects_cycle(child, parent) {
                tracing::debug!(child, parent, "rejecting cyclic inheritance edge");
                all_added = false;
                continue;
            }
            let entry = self
                .classes
                .entry(key(child))
                .or_insert_with(|| ClassInfo {
                    name: child.trim_start_matches('\\').to_string(),
                    ..ClassInfo::default()
                });
            let parent = parent.trim_start_matches('\\');
            if !entry.parents.iter().any(|p| same_class(p, parent)) {
                entry.parents.push(parent.to_string());
            }
        }
        all_added
    }

    /// Whether adding `child -> parent` would close a cycle.
    pub fn detects_cycle(&self, child: &str, parent: &str) -> bool {
        same_class(child, parent) || self.is_derived_from(parent, child)
    }

    pub fn get(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(&key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(&key(name))
    }

    pub fn is_interface(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|info| info.kind == ClassKind::Interface)
    }

    pub fn is_final(&self, name: &str) -> bool {
        self.get(name).is_some_and(|info| info.is_final)
    }

    /// Strict ancestry: true when `ancestor` is reachable from `child` through
    /// one or more parent edges.
    pub fn is_derived_from(&self, child: &str, ancestor: &str) -> bool {
        let mut stack: Vec<&str> = match self.get(child) {
            Some(info) => info.parents.iter().map(String::as_str).collect(),
            None => return false,
        };
        let mut visited: FxHashSet<String> = FxHashSet::default();
        while let Some(current) = stack.pop() {
            if same_class(current, ancestor) {
                return true;
            }
            if visited.len() >= MAX_HIERARCHY_WALK || !visited.insert(key(current)) {
                continue;
            }
            if let Some(info) = self.get(current) {
                stack.extend(info.parents.iter().map(String::as_str));
            }
        }
        false
    }

    /// `child` is `ancestor` or derives from it.
    pub fn is_same_or_derived(&self, child: &str, ancestor: &str) -> bool {
        same_class(child, ancestor) || self.is_derived_from(child, ancestor)
    }

    /// Whether instances of the class can be iterated with `foreach`.
    pub fn is_traversable(&self, name: &str) -> bool {
        self.is_same_or_derived(name, builtin::TRAVERSABLE)
    }

    /// Whether some value could be an instance of both classes: one derives
    /// from the other, or a non-final subclass could implement an interface.
    pub fn may_share_instances(&self, a: &str, b: &str) -> bool {
        if self.is_same_or_derived(a, b) || self.is_same_or_derived(b, a) {
            return true;
        }
        (self.is_interface(a) && !self.is_final(b)) || (self.is_interface(b) && !self.is_final(a))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/inheritance_tests.rs"]
mod tests;
