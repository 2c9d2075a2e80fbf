//! Core IR definitions.
//!
//! This module contains the main `TypeMeta` struct, its `MetaKind`
//! tagged variant, and all companion records. Pure data; the only
//! behavior is construction helpers.

use crate::constraints::Constraints;
use serde::Serialize;
use tsmeta_common::LiteralValue;

// =============================================================================
// Atomic kinds
// =============================================================================

/// The atomic primitive kinds of the IR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Atomic {
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
}

// =============================================================================
// Companion records
// =============================================================================

/// A named property of an object schema, in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
    #[serde(rename = "type")]
    pub ty: TypeMeta,
    /// Merged per-property validation view (phantom overlaid with JSDoc).
    /// Populated only when a declaration-level source contributes beyond
    /// what the value type already carries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Box<Constraints>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub write_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: TypeMeta) -> Self {
        Property {
            name: name.into(),
            required: true,
            readonly: false,
            ty,
            constraints: None,
            description: None,
            write_only: false,
            example: None,
        }
    }
}

/// An index signature; the key is atomic string or number.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndexSignature {
    pub key_type: Box<TypeMeta>,
    pub value_type: Box<TypeMeta>,
}

/// One element of a tuple schema.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TupleElement {
    #[serde(rename = "type")]
    pub ty: TypeMeta,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub rest: bool,
}

/// One arm of a discriminated union: the literal value and the member
/// that carries it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiscriminantArm {
    pub value: LiteralValue,
    pub target: TypeMeta,
}

/// A property shared by every member of an object union, typed as a
/// distinct literal in each.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Discriminant {
    pub property: String,
    /// Arms in member order; stable for serialization.
    pub mapping: Vec<DiscriminantArm>,
}

// =============================================================================
// TypeMeta
// =============================================================================

/// The tagged variant of one IR node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MetaKind {
    Atomic {
        atomic: Atomic,
    },
    Literal {
        value: LiteralValue,
    },
    Union {
        members: Vec<TypeMeta>,
        #[serde(skip_serializing_if = "Option::is_none")]
        discriminant: Option<Box<Discriminant>>,
    },
    Intersection {
        members: Vec<TypeMeta>,
    },
    Object {
        properties: Vec<Property>,
        #[serde(skip_serializing_if = "Option::is_none")]
        index_signature: Option<IndexSignature>,
    },
    Array {
        element: Box<TypeMeta>,
    },
    Tuple {
        elements: Vec<TupleElement>,
    },
    Enum {
        members: Vec<LiteralValue>,
    },
    Native {
        name: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        type_arguments: Vec<TypeMeta>,
    },
    /// A deferred reference into the registry. `name` is always the
    /// canonical registry key; `alias_display_name` is set when the
    /// user-facing alias differs from it.
    Ref {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alias_display_name: Option<String>,
    },
    /// `name` encodes degenerate sources as a string marker, e.g.
    /// `"function"` for function types.
    Any {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Unknown,
    Never,
    Void,
}

/// One fully-normalized IR node.
///
/// Every node carries the `nullable` / `optional` flags (an explicit
/// `null` / `undefined` was removed from a surrounding union) and an
/// optional merged constraint record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeMeta {
    #[serde(flatten)]
    pub kind: MetaKind,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Box<Constraints>>,
    /// Anchored regex derived from a template literal type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_pattern: Option<String>,
}

impl TypeMeta {
    pub fn new(kind: MetaKind) -> Self {
        TypeMeta {
            kind,
            nullable: false,
            optional: false,
            constraints: None,
            template_pattern: None,
        }
    }

    pub fn atomic(atomic: Atomic) -> Self {
        TypeMeta::new(MetaKind::Atomic { atomic })
    }

    pub fn literal(value: LiteralValue) -> Self {
        TypeMeta::new(MetaKind::Literal { value })
    }

    pub fn union(members: Vec<TypeMeta>, discriminant: Option<Discriminant>) -> Self {
        TypeMeta::new(MetaKind::Union {
            members,
            discriminant: discriminant.map(Box::new),
        })
    }

    pub fn intersection(members: Vec<TypeMeta>) -> Self {
        TypeMeta::new(MetaKind::Intersection { members })
    }

    pub fn object(properties: Vec<Property>, index_signature: Option<IndexSignature>) -> Self {
        TypeMeta::new(MetaKind::Object {
            properties,
            index_signature,
        })
    }

    pub fn array(element: TypeMeta) -> Self {
        TypeMeta::new(MetaKind::Array {
            element: Box::new(element),
        })
    }

    pub fn tuple(elements: Vec<TupleElement>) -> Self {
        TypeMeta::new(MetaKind::Tuple { elements })
    }

    pub fn enum_of(members: Vec<LiteralValue>) -> Self {
        TypeMeta::new(MetaKind::Enum { members })
    }

    pub fn native(name: impl Into<String>, type_arguments: Vec<TypeMeta>) -> Self {
        TypeMeta::new(MetaKind::Native {
            name: name.into(),
            type_arguments,
        })
    }

    pub fn reference(name: impl Into<String>) -> Self {
        TypeMeta::new(MetaKind::Ref {
            name: name.into(),
            alias_display_name: None,
        })
    }

    pub fn aliased_reference(name: impl Into<String>, display: impl Into<String>) -> Self {
        TypeMeta::new(MetaKind::Ref {
            name: name.into(),
            alias_display_name: Some(display.into()),
        })
    }

    pub fn any() -> Self {
        TypeMeta::new(MetaKind::Any { name: None })
    }

    pub fn any_named(name: impl Into<String>) -> Self {
        TypeMeta::new(MetaKind::Any {
            name: Some(name.into()),
        })
    }

    pub fn unknown() -> Self {
        TypeMeta::new(MetaKind::Unknown)
    }

    pub fn never() -> Self {
        TypeMeta::new(MetaKind::Never)
    }

    pub fn void() -> Self {
        TypeMeta::new(MetaKind::Void)
    }

    /// Attach constraints, dropping the slot entirely when empty.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = if constraints.is_empty() {
            None
        } else {
            Some(Box::new(constraints))
        };
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.set_constraints(constraints);
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// The canonical registry key, when this node is a `Ref`.
    pub fn ref_name(&self) -> Option<&str> {
        match &self.kind {
            MetaKind::Ref { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, MetaKind::Object { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, MetaKind::Array { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_and_empty_slots_are_omitted_from_json() {
        let meta = TypeMeta::atomic(Atomic::String);
        let json = serde_json::to_value(&meta).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["kind"], "atomic");
        assert_eq!(obj["atomic"], "string");
        assert!(obj.get("nullable").is_none());
        assert!(obj.get("constraints").is_none());
    }

    #[test]
    fn nullable_flag_serializes_when_set() {
        let meta = TypeMeta::atomic(Atomic::String).with_nullable(true);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["nullable"], true);
    }

    #[test]
    fn ref_serializes_canonical_name() {
        let meta = TypeMeta::aliased_reference("PagedResult_Item", "MyList");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["kind"], "ref");
        assert_eq!(json["name"], "PagedResult_Item");
        assert_eq!(json["alias_display_name"], "MyList");
    }

    #[test]
    fn object_property_order_is_preserved() {
        let meta = TypeMeta::object(
            vec![
                Property::new("b", TypeMeta::atomic(Atomic::Number)),
                Property::new("a", TypeMeta::atomic(Atomic::String)),
            ],
            None,
        );
        let json = serde_json::to_string(&meta).unwrap();
        let b_pos = json.find("\"b\"").unwrap();
        let a_pos = json.find("\"a\"").unwrap();
        assert!(b_pos < a_pos, "declaration order must survive serialization");
    }

    #[test]
    fn set_constraints_drops_empty_record() {
        let mut meta = TypeMeta::atomic(Atomic::String);
        meta.set_constraints(Constraints::default());
        assert!(meta.constraints.is_none());
    }
}
