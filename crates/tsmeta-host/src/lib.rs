//! Host type-system boundary for the tsmeta walker.
//!
//! The walker does not parse or typecheck TypeScript; it consumes a
//! fully-resolved semantic type graph through the queries in this crate:
//! - `TypeId` / `DeclId` - opaque handles into the host's graph
//! - `TypeShape` - the classification the host reports per type
//! - `TypeHost` - the query trait an integrator implements
//! - `TypeGraph` - an arena-backed `TypeHost` implementation for tests
//!   and for drivers that materialize a checker dump
//!
//! Utility types (`Pick`, `Omit`, conditional types, mapped types) are
//! expanded by the host before the walker sees them; the graph here only
//! carries the structural result plus, where known, a description of the
//! generic alias and arguments that produced it.

pub mod graph;
pub mod host;
pub mod ids;
pub mod shape;

pub use graph::{ObjectData, TypeData, TypeGraph};
pub use host::TypeHost;
pub use ids::{DeclId, TypeId};
pub use shape::{
    GenericInstantiation, IndexSignatureDescriptor, PlaceholderKind, Primitive,
    PropertyDescriptor, TemplatePart, TupleElementDescriptor, TypeShape,
};
