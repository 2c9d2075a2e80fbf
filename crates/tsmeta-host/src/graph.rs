//! An arena-backed, in-memory implementation of [`TypeHost`].
//!
//! Integrators that receive a serialized checker dump materialize it into
//! a `TypeGraph`; tests build graphs directly through the constructor
//! methods. Intrinsic types are pre-seeded at fixed ids so that
//! `TypeId::STRING` and friends are valid in every graph.
//!
//! Recursive graphs are built in two phases: [`TypeGraph::reserve`] hands
//! out an id immediately, [`TypeGraph::define`] fills it in once the
//! children exist.

use crate::host::TypeHost;
use crate::ids::{DeclId, TypeId};
use crate::shape::{
    GenericInstantiation, IndexSignatureDescriptor, Primitive, PropertyDescriptor, TemplatePart,
    TupleElementDescriptor, TypeShape,
};
use tsmeta_common::LiteralValue;

/// Intrinsic (keyword) types without further structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intrinsic {
    Any,
    Unknown,
    Never,
    Void,
    Null,
    Undefined,
}

/// Structural data for an object type.
///
/// All fields are public so that integrators can materialize dumps
/// without going through the convenience constructors.
#[derive(Clone, Debug, Default)]
pub struct ObjectData {
    /// Declared name of the interface, class, or registrable alias.
    pub name: Option<String>,
    pub properties: Vec<PropertyDescriptor>,
    pub index_signature: Option<IndexSignatureDescriptor>,
    /// Heritage bases, in declaration order.
    pub heritage: Vec<TypeId>,
    /// The generic application that produced this object, when known.
    pub generic: Option<GenericInstantiation>,
}

/// Structural data for an enum type.
#[derive(Clone, Debug)]
pub struct EnumData {
    pub name: Option<String>,
    pub members: Vec<LiteralValue>,
}

/// One semantic type in the arena. Large variants are boxed to keep the
/// enum size small.
#[derive(Clone, Debug)]
pub enum TypeData {
    Intrinsic(Intrinsic),
    Primitive(Primitive),
    Literal(LiteralValue),
    Union(Vec<TypeId>),
    Intersection(Vec<TypeId>),
    Object(Box<ObjectData>),
    Array(TypeId),
    Tuple(Vec<TupleElementDescriptor>),
    Enum(Box<EnumData>),
    Native { name: String, args: Vec<TypeId> },
    Function { symbol: Option<(String, String)> },
    TemplateLiteral(Vec<TemplatePart>),
    /// Placeholder handed out by [`TypeGraph::reserve`]; classifies as
    /// `any` until defined.
    Reserved,
}

/// Arena of semantic types plus a declaration store for JSDoc tags.
#[derive(Debug)]
pub struct TypeGraph {
    types: Vec<TypeData>,
    decls: Vec<Vec<(String, String)>>,
}

impl TypeGraph {
    pub fn new() -> Self {
        let types = vec![
            TypeData::Intrinsic(Intrinsic::Any),
            TypeData::Intrinsic(Intrinsic::Unknown),
            TypeData::Intrinsic(Intrinsic::Never),
            TypeData::Intrinsic(Intrinsic::Void),
            TypeData::Intrinsic(Intrinsic::Null),
            TypeData::Intrinsic(Intrinsic::Undefined),
            TypeData::Primitive(Primitive::String),
            TypeData::Primitive(Primitive::Number),
            TypeData::Primitive(Primitive::Boolean),
            TypeData::Primitive(Primitive::BigInt),
            TypeData::Primitive(Primitive::Symbol),
        ];
        debug_assert_eq!(types.len() as u32, TypeId::INTRINSIC_COUNT);
        TypeGraph {
            types,
            decls: Vec::new(),
        }
    }

    /// Append a type to the arena.
    pub fn add(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    /// Reserve an id for a type whose children are not built yet.
    pub fn reserve(&mut self) -> TypeId {
        self.add(TypeData::Reserved)
    }

    /// Fill in a reserved id.
    pub fn define(&mut self, id: TypeId, data: TypeData) {
        debug_assert!(
            matches!(self.types[id.0 as usize], TypeData::Reserved),
            "define() target must be a reserved id"
        );
        self.types[id.0 as usize] = data;
    }

    /// Store a declaration carrying JSDoc tags.
    pub fn decl(&mut self, tags: Vec<(&str, &str)>) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.decls.push(
            tags.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        id
    }

    // =========================================================================
    // Convenience constructors
    // =========================================================================

    pub fn literal_string(&mut self, value: impl Into<String>) -> TypeId {
        self.add(TypeData::Literal(LiteralValue::String(value.into())))
    }

    pub fn literal_int(&mut self, value: i64) -> TypeId {
        self.add(TypeData::Literal(LiteralValue::Int(value)))
    }

    pub fn literal_float(&mut self, value: f64) -> TypeId {
        self.add(TypeData::Literal(LiteralValue::Float(value)))
    }

    pub fn literal_bool(&mut self, value: bool) -> TypeId {
        self.add(TypeData::Literal(LiteralValue::Bool(value)))
    }

    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        self.add(TypeData::Union(members))
    }

    pub fn intersection(&mut self, members: Vec<TypeId>) -> TypeId {
        self.add(TypeData::Intersection(members))
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.add(TypeData::Array(element))
    }

    pub fn tuple(&mut self, elements: Vec<TupleElementDescriptor>) -> TypeId {
        self.add(TypeData::Tuple(elements))
    }

    pub fn native(&mut self, name: impl Into<String>, args: Vec<TypeId>) -> TypeId {
        self.add(TypeData::Native {
            name: name.into(),
            args,
        })
    }

    pub fn enum_of(&mut self, name: impl Into<String>, members: Vec<LiteralValue>) -> TypeId {
        self.add(TypeData::Enum(Box::new(EnumData {
            name: Some(name.into()),
            members,
        })))
    }

    pub fn function(&mut self, name: impl Into<String>, module: impl Into<String>) -> TypeId {
        self.add(TypeData::Function {
            symbol: Some((name.into(), module.into())),
        })
    }

    pub fn anonymous_function(&mut self) -> TypeId {
        self.add(TypeData::Function { symbol: None })
    }

    pub fn template(&mut self, parts: Vec<TemplatePart>) -> TypeId {
        self.add(TypeData::TemplateLiteral(parts))
    }

    pub fn object(&mut self, data: ObjectData) -> TypeId {
        self.add(TypeData::Object(Box::new(data)))
    }

    /// A named interface with the given properties.
    pub fn named_object(
        &mut self,
        name: impl Into<String>,
        properties: Vec<PropertyDescriptor>,
    ) -> TypeId {
        self.object(ObjectData {
            name: Some(name.into()),
            properties,
            ..ObjectData::default()
        })
    }

    /// An anonymous object literal type.
    pub fn anon_object(&mut self, properties: Vec<PropertyDescriptor>) -> TypeId {
        self.object(ObjectData {
            properties,
            ..ObjectData::default()
        })
    }

    /// The structural result of applying a generic alias, with the
    /// application description attached for name recovery.
    pub fn instance(
        &mut self,
        alias: impl Into<String>,
        args: Vec<TypeId>,
        properties: Vec<PropertyDescriptor>,
    ) -> TypeId {
        self.object(ObjectData {
            properties,
            generic: Some(GenericInstantiation {
                alias: alias.into(),
                args,
            }),
            ..ObjectData::default()
        })
    }

    fn get(&self, t: TypeId) -> &TypeData {
        &self.types[t.0 as usize]
    }
}

impl Default for TypeGraph {
    fn default() -> Self {
        TypeGraph::new()
    }
}

impl TypeHost for TypeGraph {
    fn classify(&self, t: TypeId) -> TypeShape {
        match self.get(t) {
            TypeData::Intrinsic(Intrinsic::Any) => TypeShape::Any,
            TypeData::Intrinsic(Intrinsic::Unknown) => TypeShape::Unknown,
            TypeData::Intrinsic(Intrinsic::Never) => TypeShape::Never,
            TypeData::Intrinsic(Intrinsic::Void) => TypeShape::Void,
            TypeData::Intrinsic(Intrinsic::Null) => TypeShape::Null,
            TypeData::Intrinsic(Intrinsic::Undefined) => TypeShape::Undefined,
            TypeData::Primitive(p) => TypeShape::Primitive(*p),
            TypeData::Literal(_) => TypeShape::Literal,
            TypeData::Union(_) => TypeShape::Union,
            TypeData::Intersection(_) => TypeShape::Intersection,
            TypeData::Object(_) => TypeShape::Object,
            TypeData::Array(_) => TypeShape::Array,
            TypeData::Tuple(_) => TypeShape::Tuple,
            TypeData::Enum(_) => TypeShape::Enum,
            TypeData::Native { .. } => TypeShape::Native,
            TypeData::Function { .. } => TypeShape::Function,
            TypeData::TemplateLiteral(_) => TypeShape::TemplateLiteral,
            TypeData::Reserved => TypeShape::Any,
        }
    }

    fn own_properties(&self, t: TypeId) -> Vec<PropertyDescriptor> {
        match self.get(t) {
            TypeData::Object(o) => o.properties.clone(),
            _ => Vec::new(),
        }
    }

    fn index_signature(&self, t: TypeId) -> Option<IndexSignatureDescriptor> {
        match self.get(t) {
            TypeData::Object(o) => o.index_signature,
            _ => None,
        }
    }

    fn heritage(&self, t: TypeId) -> Vec<TypeId> {
        match self.get(t) {
            TypeData::Object(o) => o.heritage.clone(),
            _ => Vec::new(),
        }
    }

    fn literal_value(&self, t: TypeId) -> Option<LiteralValue> {
        match self.get(t) {
            TypeData::Literal(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn template_literal_parts(&self, t: TypeId) -> Vec<TemplatePart> {
        match self.get(t) {
            TypeData::TemplateLiteral(parts) => parts.clone(),
            _ => Vec::new(),
        }
    }

    fn union_members(&self, t: TypeId) -> Vec<TypeId> {
        match self.get(t) {
            TypeData::Union(members) => members.clone(),
            _ => Vec::new(),
        }
    }

    fn intersection_members(&self, t: TypeId) -> Vec<TypeId> {
        match self.get(t) {
            TypeData::Intersection(members) => members.clone(),
            _ => Vec::new(),
        }
    }

    fn tuple_elements(&self, t: TypeId) -> Vec<TupleElementDescriptor> {
        match self.get(t) {
            TypeData::Tuple(elements) => elements.clone(),
            _ => Vec::new(),
        }
    }

    fn array_element(&self, t: TypeId) -> Option<TypeId> {
        match self.get(t) {
            TypeData::Array(element) => Some(*element),
            _ => None,
        }
    }

    fn native_name_and_args(&self, t: TypeId) -> Option<(String, Vec<TypeId>)> {
        match self.get(t) {
            TypeData::Native { name, args } => Some((name.clone(), args.clone())),
            _ => None,
        }
    }

    fn enum_members(&self, t: TypeId) -> Vec<LiteralValue> {
        match self.get(t) {
            TypeData::Enum(e) => e.members.clone(),
            _ => Vec::new(),
        }
    }

    fn generic_instantiation(&self, t: TypeId) -> Option<GenericInstantiation> {
        match self.get(t) {
            TypeData::Object(o) => o.generic.clone(),
            _ => None,
        }
    }

    fn declared_name(&self, t: TypeId) -> Option<String> {
        match self.get(t) {
            TypeData::Object(o) => o.name.clone(),
            TypeData::Enum(e) => e.name.clone(),
            _ => None,
        }
    }

    fn function_symbol(&self, t: TypeId) -> Option<(String, String)> {
        match self.get(t) {
            TypeData::Function { symbol } => symbol.clone(),
            _ => None,
        }
    }

    fn jsdoc_tags(&self, decl: DeclId) -> Vec<(String, String)> {
        self.decls
            .get(decl.0 as usize)
            .cloned()
            .unwrap_or_default()
    }
}
