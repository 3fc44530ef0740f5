//! Subtype rules, split by the shape of the types being related.

mod iterables;
mod objects;
mod unions;
