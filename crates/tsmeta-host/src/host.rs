//! The query trait the walker consumes.
//!
//! An integrator backs these queries with the real TypeScript checker's
//! output (typically a serialized dump of the resolved type graph). The
//! walker only ever traverses the graph through this trait; it never
//! mutates host state.

use crate::ids::{DeclId, TypeId};
use crate::shape::{
    GenericInstantiation, IndexSignatureDescriptor, PropertyDescriptor, TemplatePart,
    TupleElementDescriptor, TypeShape,
};
use tsmeta_common::LiteralValue;

/// Read-only queries over a fully-resolved semantic type graph.
///
/// Every method must be deterministic for a given `TypeId`: the walker
/// relies on stable answers for cycle detection and for its symbol-name
/// cache. Queries that do not apply to the queried shape return `None`
/// or an empty sequence rather than panicking.
pub trait TypeHost {
    /// Classify a type into one of the recognized semantic shapes.
    fn classify(&self, t: TypeId) -> TypeShape;

    /// Own properties of an object type, in declaration order.
    ///
    /// Inherited properties are not included; the walker climbs
    /// [`TypeHost::heritage`] itself.
    fn own_properties(&self, t: TypeId) -> Vec<PropertyDescriptor>;

    /// The index signature of an object type, if any.
    fn index_signature(&self, t: TypeId) -> Option<IndexSignatureDescriptor>;

    /// Heritage bases for a class or interface, including the built-in
    /// `Array<T>` base when the declaration extends it.
    fn heritage(&self, t: TypeId) -> Vec<TypeId>;

    /// The value of a literal type.
    fn literal_value(&self, t: TypeId) -> Option<LiteralValue>;

    /// Alternating fixed-text and placeholder segments of a template
    /// literal type.
    fn template_literal_parts(&self, t: TypeId) -> Vec<TemplatePart>;

    /// Members of a union type, un-flattened.
    fn union_members(&self, t: TypeId) -> Vec<TypeId>;

    /// Members of an intersection type, in source order. Order is part
    /// of the contract: later members win on property conflicts.
    fn intersection_members(&self, t: TypeId) -> Vec<TypeId>;

    /// Elements of a tuple type.
    fn tuple_elements(&self, t: TypeId) -> Vec<TupleElementDescriptor>;

    /// The element type of an array type (`T[]`, `readonly T[]`,
    /// `Array<T>`).
    fn array_element(&self, t: TypeId) -> Option<TypeId>;

    /// Name and type arguments of a native (host-opaque) type such as
    /// `Date`, `Map<K, V>`, or `Promise<T>`.
    fn native_name_and_args(&self, t: TypeId) -> Option<(String, Vec<TypeId>)>;

    /// Literal members of an enum type, in declaration order.
    fn enum_members(&self, t: TypeId) -> Vec<LiteralValue>;

    /// The generic alias and arguments that produced a structural
    /// object, when the host still knows them.
    fn generic_instantiation(&self, t: TypeId) -> Option<GenericInstantiation>;

    /// The declared name of a named interface, class, enum, or
    /// registrable alias. Aliases that resolve to arrays report no name;
    /// they are transparent.
    fn declared_name(&self, t: TypeId) -> Option<String>;

    /// For a function type whose symbol has a single declaration: the
    /// declaration's name and its containing source module.
    fn function_symbol(&self, t: TypeId) -> Option<(String, String)>;

    /// JSDoc tags attached to a declaration node, as `(tag, text)` pairs
    /// with the leading `@` stripped from the tag.
    fn jsdoc_tags(&self, decl: DeclId) -> Vec<(String, String)>;
}
