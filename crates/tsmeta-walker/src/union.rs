//! Union normalization and discriminant detection.
//!
//! Nested unions flatten first. `null` and `undefined` members are
//! removed and become the `nullable` / `optional` flags on the
//! surrounding value; a single surviving member collapses to itself
//! with those flags attached. Object unions whose members share exactly
//! one literal-typed property with pairwise-distinct values get a
//! discriminant.

use crate::walker::{Walker, collapse_boolean_pair};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tsmeta_common::LiteralValue;
use tsmeta_host::{TypeHost, TypeId, TypeShape};
use tsmeta_meta::{Discriminant, DiscriminantArm, MetaKind, Property, TypeMeta};

impl<H: TypeHost> Walker<'_, H> {
    pub(crate) fn walk_union(&mut self, t: TypeId) -> TypeMeta {
        let mut flat: SmallVec<[TypeId; 8]> = SmallVec::new();
        let mut seen: FxHashSet<TypeId> = FxHashSet::default();
        self.flatten_union(t, &mut flat, &mut seen);

        let mut nullable = false;
        let mut optional = false;
        let mut rest: SmallVec<[TypeId; 8]> = SmallVec::new();
        for member in flat {
            match self.host.classify(member) {
                TypeShape::Null => nullable = true,
                TypeShape::Undefined => optional = true,
                _ => rest.push(member),
            }
        }

        // Members get their own breadth window: a large literal union
        // must not bankrupt sibling properties of the surrounding object.
        let subject = self.frames.subject().to_string();
        self.frames.push(self.options.breadth_budget, subject);
        let mut members: Vec<TypeMeta> = rest.into_iter().map(|m| self.walk_type(m)).collect();
        self.frames.pop();

        collapse_boolean_pair(&mut members);

        if members.is_empty() {
            return TypeMeta::any().with_nullable(nullable).with_optional(optional);
        }
        if members.len() == 1 {
            if let Some(mut only) = members.pop() {
                only.nullable |= nullable;
                only.optional |= optional;
                return only;
            }
        }
        let discriminant = self.detect_discriminant(&members);
        let mut meta = TypeMeta::union(members, discriminant);
        meta.nullable = nullable;
        meta.optional = optional;
        meta
    }

    fn flatten_union(
        &mut self,
        t: TypeId,
        out: &mut SmallVec<[TypeId; 8]>,
        seen: &mut FxHashSet<TypeId>,
    ) {
        if !seen.insert(t) {
            return;
        }
        for member in self.host.union_members(t) {
            if matches!(self.host.classify(member), TypeShape::Union) {
                self.flatten_union(member, out, seen);
            } else {
                out.push(member);
            }
        }
    }

    /// Find the single shared literal-typed property with pairwise
    /// distinct values, if one exists.
    fn detect_discriminant(&self, members: &[TypeMeta]) -> Option<Discriminant> {
        let lists: Vec<&[Property]> = {
            let mut lists = Vec::with_capacity(members.len());
            for member in members {
                lists.push(self.discriminant_properties(member)?);
            }
            lists
        };
        let first = *lists.first()?;

        let mut winner: Option<&str> = None;
        'candidates: for candidate in first {
            let Some(first_value) = literal_property(first, &candidate.name) else {
                continue;
            };
            let mut values: Vec<&LiteralValue> = Vec::with_capacity(lists.len());
            values.push(first_value);
            for list in &lists[1..] {
                let Some(value) = literal_property(list, &candidate.name) else {
                    continue 'candidates;
                };
                values.push(value);
            }
            for i in 0..values.len() {
                for j in (i + 1)..values.len() {
                    if values[i].same_key(values[j]) {
                        continue 'candidates;
                    }
                }
            }
            if winner.is_some() {
                // more than one qualifying property: ambiguous, none wins
                return None;
            }
            winner = Some(candidate.name.as_str());
        }
        let property = winner?.to_string();

        let mut mapping = Vec::with_capacity(members.len());
        for (member, list) in members.iter().zip(&lists) {
            let value = literal_property(list, &property)?.clone();
            mapping.push(DiscriminantArm {
                value,
                target: member.clone(),
            });
        }
        Some(Discriminant { property, mapping })
    }

    /// The property list a union member exposes for discriminant
    /// detection: its own when inline, the registered schema's when the
    /// member is a `Ref`.
    fn discriminant_properties<'m>(&'m self, meta: &'m TypeMeta) -> Option<&'m [Property]> {
        match &meta.kind {
            MetaKind::Object { properties, .. } => Some(properties),
            MetaKind::Ref { name, .. } => match self.registry.get(name).map(|m| &m.kind) {
                Some(MetaKind::Object { properties, .. }) => Some(properties),
                _ => None,
            },
            _ => None,
        }
    }
}

fn literal_property<'p>(properties: &'p [Property], name: &str) -> Option<&'p LiteralValue> {
    properties
        .iter()
        .find(|p| p.name == name)
        .and_then(|p| match &p.ty.kind {
            MetaKind::Literal { value } => Some(value),
            _ => None,
        })
}
