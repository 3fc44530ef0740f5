//! Type representation.
//!
//! Every type is interned by `TypeInterner` and referred to by a `TypeId`.
//! Two types are structurally equal iff their ids are equal, which keeps the
//! relation checks in `subtype` cheap to short-circuit.

use ormcheck_common::Atom;
use smallvec::SmallVec;

/// Interned type handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Top type: every value.
    pub const MIXED: TypeId = TypeId(0);
    /// Bottom type: no value.
    pub const NEVER: TypeId = TypeId(1);
    pub const NULL: TypeId = TypeId(2);
    pub const INT: TypeId = TypeId(3);
    pub const STRING: TypeId = TypeId(4);
    pub const BOOL: TypeId = TypeId(5);
    pub const FLOAT: TypeId = TypeId(6);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 7;

    #[inline]
    pub fn is_mixed(self) -> bool {
        self == Self::MIXED
    }

    #[inline]
    pub fn is_never(self) -> bool {
        self == Self::NEVER
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    #[inline]
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

/// Built-in scalar and special types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Mixed,
    Never,
    Null,
    Int,
    String,
    Bool,
    Float,
}

impl IntrinsicKind {
    pub const ALL: [IntrinsicKind; 7] = [
        IntrinsicKind::Mixed,
        IntrinsicKind::Never,
        IntrinsicKind::Null,
        IntrinsicKind::Int,
        IntrinsicKind::String,
        IntrinsicKind::Bool,
        IntrinsicKind::Float,
    ];

    pub const fn to_type_id(self) -> TypeId {
        match self {
            IntrinsicKind::Mixed => TypeId::MIXED,
            IntrinsicKind::Never => TypeId::NEVER,
            IntrinsicKind::Null => TypeId::NULL,
            IntrinsicKind::Int => TypeId::INT,
            IntrinsicKind::String => TypeId::STRING,
            IntrinsicKind::Bool => TypeId::BOOL,
            IntrinsicKind::Float => TypeId::FLOAT,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            IntrinsicKind::Mixed => "mixed",
            IntrinsicKind::Never => "never",
            IntrinsicKind::Null => "null",
            IntrinsicKind::Int => "int",
            IntrinsicKind::String => "string",
            IntrinsicKind::Bool => "bool",
            IntrinsicKind::Float => "float",
        }
    }

    /// Keyword lookup, accepting the long-form aliases.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword.to_ascii_lowercase().as_str() {
            "mixed" => IntrinsicKind::Mixed,
            "never" => IntrinsicKind::Never,
            "null" => IntrinsicKind::Null,
            "int" | "integer" => IntrinsicKind::Int,
            "string" => IntrinsicKind::String,
            "bool" | "boolean" => IntrinsicKind::Bool,
            "float" | "double" => IntrinsicKind::Float,
            _ => return None,
        };
        Some(kind)
    }
}

/// Member list of a union, intersection, or generic application.
pub type TypeList = SmallVec<[TypeId; 4]>;

/// Structural type data stored by the interner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    /// Instance of a named class or interface, optionally with generic arguments.
    Object { class: Atom, type_args: TypeList },
    /// `iterable<K, V>`: arrays and `Traversable` objects alike.
    Iterable { key: TypeId, value: TypeId },
    /// `array<K, V>`.
    Array { key: TypeId, value: TypeId },
    Union(TypeList),
    Intersection(TypeList),
}

impl TypeData {
    pub fn members(&self) -> Option<&[TypeId]> {
        match self {
            TypeData::Union(members) | TypeData::Intersection(members) => Some(members),
            _ => None,
        }
    }
}
