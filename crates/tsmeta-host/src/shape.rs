//! Shape classification and descriptor records reported by the host.

use crate::ids::{DeclId, TypeId};

/// An atomic primitive kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::BigInt => "bigint",
            Primitive::Symbol => "symbol",
        }
    }
}

/// The classification the host reports for a semantic type.
///
/// One variant per recognized semantic shape. Generic instantiations are
/// reported as `Object` (the host resolves them structurally first); the
/// alias-and-arguments description is a separate query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeShape {
    Primitive(Primitive),
    Literal,
    Union,
    Intersection,
    Object,
    Array,
    Tuple,
    Enum,
    Native,
    Function,
    TemplateLiteral,
    Any,
    Unknown,
    Never,
    Void,
    Null,
    Undefined,
}

/// A property of an object type, in declaration order.
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    /// Property name; arbitrary strings are allowed, not just identifiers.
    pub name: String,
    pub ty: TypeId,
    pub required: bool,
    pub readonly: bool,
    /// Declaration node carrying JSDoc tags, when the driver supplied one.
    pub declaration: Option<DeclId>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        PropertyDescriptor {
            name: name.into(),
            ty,
            required: true,
            readonly: false,
            declaration: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn with_decl(mut self, decl: DeclId) -> Self {
        self.declaration = Some(decl);
        self
    }
}

/// An index signature on an object type. The key type must classify as
/// atomic string or number.
#[derive(Clone, Copy, Debug)]
pub struct IndexSignatureDescriptor {
    pub key: TypeId,
    pub value: TypeId,
}

/// One element of a tuple type.
#[derive(Clone, Copy, Debug)]
pub struct TupleElementDescriptor {
    pub ty: TypeId,
    pub optional: bool,
    pub rest: bool,
}

impl TupleElementDescriptor {
    pub fn new(ty: TypeId) -> Self {
        TupleElementDescriptor {
            ty,
            optional: false,
            rest: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn rest(mut self) -> Self {
        self.rest = true;
        self
    }
}

/// Placeholder kinds inside a template literal type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `${string}`
    String,
    /// `${number}`
    Number,
    /// Any other interpolation position.
    Other,
}

/// One segment of a template literal type: fixed text and placeholders
/// alternate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplatePart {
    Text(String),
    Placeholder(PlaceholderKind),
}

/// Description of the generic alias and arguments that produced a
/// structural object, when the host still knows it.
#[derive(Clone, Debug)]
pub struct GenericInstantiation {
    /// The alias name, e.g. `PagedResult` or `Pick`.
    pub alias: String,
    /// The resolved type arguments, in application order.
    pub args: Vec<TypeId>,
}
