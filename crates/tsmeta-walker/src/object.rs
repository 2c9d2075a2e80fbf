//! Object normalization.
//!
//! Classes and interfaces are walked alike: the heritage chain is
//! climbed eagerly so inherited properties merge into one flat list,
//! with more-derived declarations winning on conflict. An interface
//! whose base is the built-in `Array<T>` is an array, not an object
//! full of prototype members. Phantom objects short-circuit to an `any`
//! placeholder carrying their constraints; mixed objects keep their
//! real properties and fold the phantom ones into the object's own
//! constraint slot.

use crate::jsdoc;
use crate::phantom::{self, PhantomClass};
use crate::walker::Walker;
use rustc_hash::FxHashSet;
use tsmeta_host::{TypeHost, TypeId, TypeShape};
use tsmeta_meta::{Constraints, IndexSignature, Property, TypeMeta};

impl<H: TypeHost> Walker<'_, H> {
    pub(crate) fn walk_object(&mut self, t: TypeId) -> TypeMeta {
        if let PhantomClass::Phantom(constraints) = self.classify_phantom(t) {
            let mut meta = TypeMeta::any();
            meta.set_constraints(*constraints);
            return meta;
        }

        for base in self.host.heritage(t) {
            if let Some(element) = self.host.array_element(base) {
                let element = self.walk_type(element);
                return TypeMeta::array(element);
            }
        }

        let mut properties: Vec<Property> = Vec::new();
        let mut index_signature: Option<IndexSignature> = None;
        let mut own_constraints = Constraints::new();
        let mut visited: FxHashSet<TypeId> = FxHashSet::default();
        self.collect_object_parts(
            t,
            &mut properties,
            &mut index_signature,
            &mut own_constraints,
            &mut visited,
        );

        let mut meta = TypeMeta::object(properties, index_signature);
        meta.set_constraints(own_constraints);
        meta
    }

    /// Depth-first over the heritage chain, ancestors first, so that
    /// derived declarations overwrite inherited ones in place.
    fn collect_object_parts(
        &mut self,
        t: TypeId,
        properties: &mut Vec<Property>,
        index_signature: &mut Option<IndexSignature>,
        own_constraints: &mut Constraints,
        visited: &mut FxHashSet<TypeId>,
    ) {
        if !visited.insert(t) {
            return;
        }
        for base in self.host.heritage(t) {
            if self.host.array_element(base).is_some() {
                continue;
            }
            if matches!(self.host.classify(base), TypeShape::Object) {
                self.collect_object_parts(
                    base,
                    properties,
                    index_signature,
                    own_constraints,
                    visited,
                );
            }
        }
        let own = self.walk_properties(t, own_constraints);
        merge_properties(properties, own);
        if let Some(descriptor) = self.host.index_signature(t) {
            *index_signature = Some(IndexSignature {
                key_type: Box::new(self.walk_type(descriptor.key)),
                value_type: Box::new(self.walk_type(descriptor.value)),
            });
        }
    }

    fn walk_properties(&mut self, t: TypeId, own_constraints: &mut Constraints) -> Vec<Property> {
        let mut out = Vec::new();
        for descriptor in self.host.own_properties(t) {
            if phantom::is_phantom_property(self.host, &descriptor) {
                phantom::absorb_property(self.host, &descriptor, own_constraints);
                continue;
            }
            let meta = self.walk_type(descriptor.ty);
            let mut property = Property::new(descriptor.name, meta);
            property.required = descriptor.required;
            property.readonly = descriptor.readonly;
            if let Some(decl) = descriptor.declaration {
                let info = jsdoc::read_tags(&self.host.jsdoc_tags(decl));
                if !info.constraints.is_empty() {
                    let from_type = property
                        .ty
                        .constraints
                        .clone()
                        .map(|b| *b)
                        .unwrap_or_default();
                    property.constraints =
                        Some(Box::new(Constraints::merged(from_type, info.constraints)));
                }
                property.description = info.doc.description;
                property.write_only = info.doc.write_only;
                property.example = info.doc.example;
            }
            out.push(property);
        }
        out
    }
}

/// Merge `incoming` into `merged`, later declarations winning on name
/// conflicts while keeping the first-seen position.
pub(crate) fn merge_properties(merged: &mut Vec<Property>, incoming: Vec<Property>) {
    for property in incoming {
        if let Some(existing) = merged.iter_mut().find(|p| p.name == property.name) {
            *existing = property;
        } else {
            merged.push(property);
        }
    }
}
