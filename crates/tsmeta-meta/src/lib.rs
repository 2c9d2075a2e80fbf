//! Language-neutral schema IR produced by the tsmeta walker.
//!
//! This crate is pure data plus construction helpers:
//! - `TypeMeta` / `MetaKind` - the tagged-variant IR and its companion
//!   records (`Property`, `IndexSignature`, `TupleElement`,
//!   `Discriminant`)
//! - `Constraints` - validation metadata with the precedence merge rule
//! - `Registry` - the insertion-ordered named-schema store
//!
//! Everything serializes to a stable JSON form for downstream diffing:
//! absent fields are omitted rather than emitted as null, property order
//! matches IR order, and `Ref` targets always use the canonical registry
//! key.

pub mod constraints;
pub mod meta;
pub mod registry;

pub use constraints::{Constraints, NumericType, Transform};
pub use meta::{
    Atomic, Discriminant, DiscriminantArm, IndexSignature, MetaKind, Property, TupleElement,
    TypeMeta,
};
pub use registry::Registry;
