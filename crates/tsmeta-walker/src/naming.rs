//! Composite name recovery for generic instantiations.
//!
//! An anonymous object that is really `PagedResult<Item>` deserves the
//! readable, stable registry key `PagedResult_Item`. Each type argument
//! is described as a named type, a small literal union, or anonymous;
//! one anonymous argument makes the whole instantiation unnameable and
//! it is inlined at the use site instead.
//!
//! Utility aliases (`Pick`, `Omit`, ...) and user generics alike are
//! never registered under their bare alias name; only composite names
//! reach the registry.

use crate::walker::{CanonicalName, Walker};
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use tsmeta_common::{LiteralValue, WarningKind, limits};
use tsmeta_host::{GenericInstantiation, TypeHost, TypeId, TypeShape};

/// Built-in utility aliases. User-defined generic aliases get the same
/// treatment; this set only matters when a driver hands one of these
/// names in directly without instantiation info.
static UTILITY_ALIASES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "Pick",
        "Omit",
        "Partial",
        "Required",
        "Record",
        "Extract",
        "Exclude",
        "NonNullable",
        "Readonly",
    ]
    .into_iter()
    .collect()
});

/// How one generic type argument can participate in a composite name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ArgDescriptor {
    /// A named (or nameable-composite) type; use its name.
    Named(String),
    /// A union of at most [`limits::MAX_NAMEABLE_LITERAL_UNION`] string
    /// or number literals; join the rendered values.
    LiteralUnion(Vec<String>),
    /// Unnameable; forces inlining.
    Anonymous,
}

impl<H: TypeHost> Walker<'_, H> {
    /// Decide the canonical registry key for a named walk, or that the
    /// type must be inlined.
    pub(crate) fn resolve_canonical_name(
        &mut self,
        display: Option<&str>,
        t: TypeId,
    ) -> CanonicalName {
        if let Some(generic) = self.host.generic_instantiation(t) {
            return match self.compose_instance_name(&generic) {
                Some(name) => CanonicalName::Named(name),
                None => {
                    self.sink.warn(
                        WarningKind::AnonymousGenericArg,
                        &generic.alias,
                        format!(
                            "`{}` instantiated with an unnameable type argument; inlining the result",
                            generic.alias
                        ),
                    );
                    CanonicalName::Inline
                }
            };
        }
        if let Some(name) = self.host.declared_name(t) {
            return CanonicalName::Named(name);
        }
        match display {
            // A bare utility-alias name with no instantiation info can
            // never become a composite key; refuse to register it.
            Some(alias) if UTILITY_ALIASES.contains(alias) => {
                self.sink.warn(
                    WarningKind::TypeArgResolutionFailed,
                    alias,
                    format!("cannot derive an instantiation name for bare `{alias}`; inlining"),
                );
                CanonicalName::Inline
            }
            Some(alias) => CanonicalName::Named(alias.to_string()),
            None => CanonicalName::Inline,
        }
    }

    /// `<Alias>_<Arg1>[_<Arg2>...]`, or `None` when any argument is
    /// anonymous.
    pub(crate) fn compose_instance_name(&mut self, generic: &GenericInstantiation) -> Option<String> {
        let mut name = sanitize_segment(&generic.alias);
        for &arg in &generic.args {
            match self.describe_arg(&generic.alias, arg) {
                ArgDescriptor::Named(segment) => {
                    name.push('_');
                    name.push_str(&sanitize_segment(&segment));
                }
                ArgDescriptor::LiteralUnion(values) => {
                    for value in values {
                        name.push('_');
                        name.push_str(&sanitize_segment(&value));
                    }
                }
                ArgDescriptor::Anonymous => return None,
            }
        }
        Some(name)
    }

    /// Describe one type argument for naming purposes. Pure queries;
    /// consumes no walk budget.
    pub(crate) fn describe_arg(&mut self, alias: &str, t: TypeId) -> ArgDescriptor {
        if let Some(name) = self.host.declared_name(t) {
            return ArgDescriptor::Named(name);
        }
        if let Some(name) = self.name_cache.get(&t) {
            return ArgDescriptor::Named(name.clone());
        }
        if let Some(nested) = self.host.generic_instantiation(t) {
            return match self.compose_instance_name(&nested) {
                Some(name) => ArgDescriptor::Named(name),
                None => ArgDescriptor::Anonymous,
            };
        }
        match self.host.classify(t) {
            TypeShape::Primitive(p) => ArgDescriptor::Named(p.as_str().to_string()),
            TypeShape::Literal => match self.host.literal_value(t) {
                Some(value) => literal_segment(&value)
                    .map(|s| ArgDescriptor::LiteralUnion(vec![s]))
                    .unwrap_or(ArgDescriptor::Anonymous),
                None => ArgDescriptor::Anonymous,
            },
            TypeShape::Union => self.describe_literal_union(t),
            TypeShape::Native => match self.host.native_name_and_args(t) {
                Some((name, _)) => ArgDescriptor::Named(name),
                None => ArgDescriptor::Anonymous,
            },
            TypeShape::Any
            | TypeShape::Unknown
            | TypeShape::Never
            | TypeShape::Void
            | TypeShape::Function => {
                self.sink.warn(
                    WarningKind::TypeArgResolutionFailed,
                    alias,
                    format!("could not describe a type argument of `{alias}`"),
                );
                ArgDescriptor::Anonymous
            }
            _ => ArgDescriptor::Anonymous,
        }
    }

    /// A union argument is nameable when every member is a string or
    /// number literal and the union is small.
    fn describe_literal_union(&mut self, t: TypeId) -> ArgDescriptor {
        let members = self.host.union_members(t);
        if members.len() > limits::MAX_NAMEABLE_LITERAL_UNION {
            return ArgDescriptor::Anonymous;
        }
        let mut values = Vec::with_capacity(members.len());
        for member in members {
            let Some(value) = self.host.literal_value(member) else {
                return ArgDescriptor::Anonymous;
            };
            let Some(segment) = literal_segment(&value) else {
                return ArgDescriptor::Anonymous;
            };
            values.push(segment);
        }
        ArgDescriptor::LiteralUnion(values)
    }
}

/// String and number literals participate in names; other literal kinds
/// do not.
fn literal_segment(value: &LiteralValue) -> Option<String> {
    match value {
        LiteralValue::String(s) => Some(s.clone()),
        LiteralValue::Int(n) => Some(n.to_string()),
        LiteralValue::Float(n) => Some(n.to_string()),
        LiteralValue::Bool(_) => None,
    }
}

/// Keep composite keys identifier-shaped.
fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
