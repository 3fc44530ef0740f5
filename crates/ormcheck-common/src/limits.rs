//! Centralized limits and thresholds for the association checker.
//!
//! Declared types come from user code and may be arbitrarily nested
//! (`iterable<iterable<...>>`) or refer to cyclic class hierarchies. These
//! limits keep every recursive walk bounded.

/// Maximum depth for a single subtype relation query.
///
/// Exceeding the depth yields an inconclusive ("maybe") answer rather than a
/// stack overflow; callers treat anything short of a definite "yes" as a
/// mismatch.
pub const MAX_SUBTYPE_DEPTH: u32 = 64;

/// Maximum nesting accepted by the type-expression parser.
///
/// ```text
/// iterable<iterable<iterable<... 128 levels ...>>>
/// ```
pub const MAX_TYPE_PARSE_DEPTH: u32 = 128;

/// Maximum number of ancestors visited while walking a class hierarchy.
pub const MAX_HIERARCHY_WALK: usize = 4096;

/// Maximum depth used when rendering a type to text.
pub const MAX_FORMAT_DEPTH: u32 = 32;
