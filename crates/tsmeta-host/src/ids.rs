//! Opaque handles into the host type graph.

/// Unique identifier for a semantic type in the host graph.
///
/// Identity is the contract: the host must return the same `TypeId` for
/// the same semantic type every time it is reached, or cycle detection
/// cannot work. The low ids are pre-seeded intrinsics shared by every
/// [`crate::TypeGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const NULL: TypeId = TypeId(4);
    pub const UNDEFINED: TypeId = TypeId(5);
    pub const STRING: TypeId = TypeId(6);
    pub const NUMBER: TypeId = TypeId(7);
    pub const BOOLEAN: TypeId = TypeId(8);
    pub const BIGINT: TypeId = TypeId(9);
    pub const SYMBOL: TypeId = TypeId(10);

    /// Number of pre-seeded intrinsic ids.
    pub(crate) const INTRINSIC_COUNT: u32 = 11;
}

/// Unique identifier for a declaration node in the host graph.
///
/// Declarations exist only to carry JSDoc tags across the boundary; the
/// walker never inspects their syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);
