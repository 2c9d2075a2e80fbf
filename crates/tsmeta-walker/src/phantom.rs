//! Phantom-branding detection.
//!
//! Validation constraints can be encoded in the type system itself as
//! "phantom" object members of an intersection. Two dialects are
//! recognized:
//!
//! - the prefix dialect: every property name starts with `__tsgonest_`
//!   and the suffix names a constraint whose value is the property's
//!   literal type;
//! - the tagged dialect: a property named exactly `typia.tag` whose
//!   type is an object with literal-typed `kind` and `value` members.
//!
//! A *phantom object* has only phantom properties and is never
//! registered. An object mixing real and phantom properties is a *mixed
//! object*: its phantom members fold into the object's own constraints
//! and its real members walk normally. An intersection of exactly one
//! primitive-or-literal member with phantom objects is *branded* and
//! rewrites to the base plus extracted constraints.

use tsmeta_common::LiteralValue;
use tsmeta_host::{PropertyDescriptor, TypeHost, TypeId, TypeShape};
use tsmeta_meta::{Constraints, NumericType, Transform};

pub(crate) const PHANTOM_PREFIX: &str = "__tsgonest_";
pub(crate) const TAG_PROPERTY: &str = "typia.tag";

/// Classification of an object type with respect to phantom branding.
#[derive(Debug)]
pub(crate) enum PhantomClass {
    /// Every property is a constraint carrier.
    Phantom(Box<Constraints>),
    /// Real and phantom properties coexist.
    Mixed,
    /// No phantom properties at all.
    NonPhantom,
}

/// Classify an object type. Non-object types are `NonPhantom`.
pub(crate) fn classify_object<H: TypeHost>(host: &H, t: TypeId) -> PhantomClass {
    if !matches!(host.classify(t), TypeShape::Object) {
        return PhantomClass::NonPhantom;
    }
    let properties = host.own_properties(t);
    if properties.is_empty() {
        return PhantomClass::NonPhantom;
    }
    let mut constraints = Constraints::new();
    let mut phantom = 0usize;
    let mut real = 0usize;
    for property in &properties {
        if is_phantom_property(host, property) {
            phantom += 1;
            absorb_property(host, property, &mut constraints);
        } else {
            real += 1;
        }
    }
    match (phantom, real) {
        (0, _) => PhantomClass::NonPhantom,
        (_, 0) => PhantomClass::Phantom(Box::new(constraints)),
        _ => PhantomClass::Mixed,
    }
}

/// Whether a property is a constraint carrier in either dialect.
pub(crate) fn is_phantom_property<H: TypeHost>(host: &H, property: &PropertyDescriptor) -> bool {
    if property.name.starts_with(PHANTOM_PREFIX) {
        return true;
    }
    property.name == TAG_PROPERTY && tag_payload(host, property.ty).is_some()
}

/// Fold one phantom property's contribution into `constraints`.
///
/// Unknown constraint keys are ignored; a `validate` carrier whose type
/// is not a function is dropped without a warning.
pub(crate) fn absorb_property<H: TypeHost>(
    host: &H,
    property: &PropertyDescriptor,
    constraints: &mut Constraints,
) {
    if let Some(key) = property.name.strip_prefix(PHANTOM_PREFIX) {
        absorb_prefix_key(host, key, property.ty, constraints);
    } else if property.name == TAG_PROPERTY {
        if let Some((kind, value)) = tag_payload(host, property.ty) {
            apply_value_constraint(constraints, &kind, &value);
        }
    }
}

fn absorb_prefix_key<H: TypeHost>(host: &H, key: &str, ty: TypeId, constraints: &mut Constraints) {
    if key == "error" {
        if let Some(LiteralValue::String(message)) = host.literal_value(ty) {
            constraints.error_message = Some(message);
        }
        return;
    }
    if key == "validate" {
        if let Some((name, module)) = host.function_symbol(ty) {
            constraints.validate_fn = Some(name);
            constraints.validate_module = Some(module);
        }
        return;
    }
    if let Some(target) = key.strip_suffix("_error") {
        if is_known_constraint(target) {
            if let Some(LiteralValue::String(message)) = host.literal_value(ty) {
                constraints.errors.insert(target.to_string(), message);
            }
        }
        return;
    }
    if let Some(value) = host.literal_value(ty) {
        apply_value_constraint(constraints, key, &value);
    }
}

/// `(kind, value)` of a well-formed tagged-dialect carrier.
fn tag_payload<H: TypeHost>(host: &H, ty: TypeId) -> Option<(String, LiteralValue)> {
    if !matches!(host.classify(ty), TypeShape::Object) {
        return None;
    }
    let mut kind = None;
    let mut value = None;
    for inner in host.own_properties(ty) {
        match inner.name.as_str() {
            "kind" => {
                if let Some(LiteralValue::String(k)) = host.literal_value(inner.ty) {
                    kind = Some(k);
                }
            }
            "value" => value = host.literal_value(inner.ty),
            // `target` and anything else carries no constraint data
            _ => {}
        }
    }
    Some((kind?, value?))
}

/// Rewrite `P & phantom...` intersections: exactly one primitive or
/// literal member plus one or more phantom objects yields the base and
/// the combined constraints. Anything else is not branded.
pub(crate) fn extract_branded<H: TypeHost>(
    host: &H,
    members: &[TypeId],
) -> Option<(TypeId, Constraints)> {
    let mut base: Option<TypeId> = None;
    let mut constraints = Constraints::new();
    let mut phantom_members = 0usize;
    for &member in members {
        match host.classify(member) {
            TypeShape::Primitive(_) | TypeShape::Literal => {
                if base.is_some() {
                    return None;
                }
                base = Some(member);
            }
            TypeShape::Object => match classify_object(host, member) {
                PhantomClass::Phantom(cs) => {
                    phantom_members += 1;
                    constraints.overlay(*cs);
                }
                _ => return None,
            },
            _ => return None,
        }
    }
    if phantom_members == 0 {
        return None;
    }
    base.map(|b| (b, constraints))
}

/// The closed constraint-name table shared by both dialects.
pub(crate) fn is_known_constraint(key: &str) -> bool {
    matches!(
        key,
        "format"
            | "minLength"
            | "maxLength"
            | "pattern"
            | "startsWith"
            | "endsWith"
            | "includes"
            | "uppercase"
            | "lowercase"
            | "transform_trim"
            | "transform_toLowerCase"
            | "transform_toUpperCase"
            | "minimum"
            | "maximum"
            | "exclusiveMinimum"
            | "exclusiveMaximum"
            | "multipleOf"
            | "type"
            | "minItems"
            | "maxItems"
            | "uniqueItems"
            | "default"
            | "coerce"
            | "error"
            | "validate"
    )
}

/// Apply one `(name, value)` pair. Returns whether the name was known.
pub(crate) fn apply_value_constraint(
    constraints: &mut Constraints,
    key: &str,
    value: &LiteralValue,
) -> bool {
    match key {
        "format" => constraints.format = as_string(value),
        "pattern" => constraints.pattern = as_string(value),
        "startsWith" => constraints.starts_with = as_string(value),
        "endsWith" => constraints.ends_with = as_string(value),
        "includes" => constraints.includes = as_string(value),
        "minLength" => constraints.min_length = as_index(value),
        "maxLength" => constraints.max_length = as_index(value),
        "minItems" => constraints.min_items = as_index(value),
        "maxItems" => constraints.max_items = as_index(value),
        "minimum" => constraints.minimum = as_number(value),
        "maximum" => constraints.maximum = as_number(value),
        "exclusiveMinimum" => constraints.exclusive_minimum = as_number(value),
        "exclusiveMaximum" => constraints.exclusive_maximum = as_number(value),
        "multipleOf" => constraints.multiple_of = as_number(value),
        "uppercase" => constraints.uppercase = as_bool(value),
        "lowercase" => constraints.lowercase = as_bool(value),
        "uniqueItems" => constraints.unique_items = as_bool(value),
        "coerce" => constraints.coerce = as_bool(value),
        "type" => {
            if let Some(name) = as_string(value) {
                constraints.numeric_type = NumericType::parse(&name);
            }
        }
        "default" => constraints.default = Some(value.stringify()),
        "transform_trim" => {
            if flag_set(value) {
                constraints.transforms.push(Transform::Trim);
            }
        }
        "transform_toLowerCase" => {
            if flag_set(value) {
                constraints.transforms.push(Transform::ToLowerCase);
            }
        }
        "transform_toUpperCase" => {
            if flag_set(value) {
                constraints.transforms.push(Transform::ToUpperCase);
            }
        }
        _ => return false,
    }
    true
}

fn as_string(value: &LiteralValue) -> Option<String> {
    match value {
        LiteralValue::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn as_number(value: &LiteralValue) -> Option<f64> {
    match value {
        LiteralValue::Int(n) => Some(*n as f64),
        LiteralValue::Float(n) => Some(*n),
        _ => None,
    }
}

fn as_index(value: &LiteralValue) -> Option<u64> {
    match value {
        LiteralValue::Int(n) if *n >= 0 => Some(*n as u64),
        _ => None,
    }
}

fn as_bool(value: &LiteralValue) -> Option<bool> {
    match value {
        LiteralValue::Bool(b) => Some(*b),
        _ => None,
    }
}

fn flag_set(value: &LiteralValue) -> bool {
    matches!(value, LiteralValue::Bool(true))
}
