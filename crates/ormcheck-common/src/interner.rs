//! String interning for class names and property names.
//!
//! Interned strings are identified by a compact `Atom` so that type data can
//! be hashed and compared without touching string contents. The interner is
//! shared between threads; lookups take a read lock and only a first-time
//! insertion takes the write lock.

use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Handle to an interned string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// The empty string, pre-registered by every interner.
    pub const EMPTY: Atom = Atom(0);
}

#[derive(Default)]
struct InternerState {
    map: FxHashMap<Arc<str>, Atom>,
    strings: Vec<Arc<str>>,
}

/// Thread-safe string interner.
pub struct Interner {
    state: RwLock<InternerState>,
}

impl Interner {
    pub fn new() -> Self {
        let interner = Self {
            state: RwLock::new(InternerState::default()),
        };
        interner.intern("");
        interner
    }

    fn read(&self) -> RwLockReadGuard<'_, InternerState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, InternerState> {
        self.state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Intern a string, returning the existing atom when already known.
    pub fn intern(&self, text: &str) -> Atom {
        if let Some(&atom) = self.read().map.get(text) {
            return atom;
        }

        let mut state = self.write();
        // Another thread may have inserted it between the two locks.
        if let Some(&atom) = state.map.get(text) {
            return atom;
        }
        let atom = Atom(state.strings.len() as u32);
        let shared: Arc<str> = Arc::from(text);
        state.strings.push(Arc::clone(&shared));
        state.map.insert(shared, atom);
        atom
    }

    /// Look up an atom without interning.
    pub fn get(&self, text: &str) -> Option<Atom> {
        self.read().map.get(text).copied()
    }

    /// Resolve an atom back to its string. Unknown atoms resolve to "".
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.read()
            .strings
            .get(atom.0 as usize)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }

    pub fn len(&self) -> usize {
        self.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Interner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interner").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "../tests/interner_tests.rs"]
mod tests;
