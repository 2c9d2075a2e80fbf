//! Intersection normalization.
//!
//! Branded intersections (one primitive-or-literal member plus phantom
//! objects) rewrite to the base with extracted constraints. Everything
//! else flattens: when every non-phantom member is an object or resolves
//! to one, their property lists merge with later members winning on
//! conflict; otherwise the intersection survives as-is. Member order is
//! the contract and is never reordered.

use crate::object::merge_properties;
use crate::phantom::{self, PhantomClass};
use crate::walker::Walker;
use tsmeta_host::{TypeHost, TypeId};
use tsmeta_meta::{Constraints, IndexSignature, MetaKind, Property, TypeMeta};

impl<H: TypeHost> Walker<'_, H> {
    pub(crate) fn walk_intersection(&mut self, t: TypeId) -> TypeMeta {
        let members = self.host.intersection_members(t);

        if let Some((base, constraints)) = phantom::extract_branded(self.host, &members) {
            let mut meta = self.walk_type(base);
            let mut merged = meta.constraints.take().map(|b| *b).unwrap_or_default();
            merged.overlay(constraints);
            meta.set_constraints(merged);
            return meta;
        }

        // Phantom members only contribute to the emitted object when the
        // intersection is the root of the current walk.
        let top_level = self.guard.depth() == 1;
        let mut phantom_constraints = Constraints::new();
        let mut walked: Vec<TypeMeta> = Vec::new();
        for member in members {
            if let PhantomClass::Phantom(cs) = phantom::classify_object(self.host, member) {
                phantom_constraints.overlay(*cs);
                continue;
            }
            // Each member resolves in its own breadth window so a large
            // member cannot starve the ones after it.
            let subject = self.frames.subject().to_string();
            self.frames.push(self.options.breadth_budget, subject);
            let meta = self.walk_type(member);
            self.frames.pop();
            walked.push(meta);
        }

        if walked.is_empty() {
            let mut meta = TypeMeta::any();
            meta.set_constraints(phantom_constraints);
            return meta;
        }
        if walked.len() == 1 {
            if let Some(mut only) = walked.pop() {
                if top_level && !phantom_constraints.is_empty() {
                    let mut merged = only.constraints.take().map(|b| *b).unwrap_or_default();
                    merged.overlay(phantom_constraints);
                    only.set_constraints(merged);
                }
                return only;
            }
        }

        let mut properties: Vec<Property> = Vec::new();
        let mut index_signature: Option<IndexSignature> = None;
        let mut flattenable = true;
        for meta in &walked {
            match self.flattenable_parts(meta) {
                Some((props, index)) => {
                    merge_properties(&mut properties, props.to_vec());
                    if let Some(index) = index {
                        index_signature = Some(index.clone());
                    }
                }
                None => {
                    flattenable = false;
                    break;
                }
            }
        }
        if flattenable {
            let mut meta = TypeMeta::object(properties, index_signature);
            if top_level {
                meta.set_constraints(phantom_constraints);
            }
            return meta;
        }
        TypeMeta::intersection(walked)
    }

    /// The property list a member contributes to flattening. A `Ref` to
    /// a schema still being walked (self-referential intersection) has
    /// no resolvable properties and defeats flattening, which is what
    /// keeps the recursive position a reference.
    fn flattenable_parts<'m>(
        &'m self,
        meta: &'m TypeMeta,
    ) -> Option<(&'m [Property], Option<&'m IndexSignature>)> {
        match &meta.kind {
            MetaKind::Object {
                properties,
                index_signature,
            } => Some((properties, index_signature.as_ref())),
            MetaKind::Ref { name, .. } => match self.registry.get(name).map(|m| &m.kind) {
                Some(MetaKind::Object {
                    properties,
                    index_signature,
                }) => Some((properties, index_signature.as_ref())),
                _ => None,
            },
            _ => None,
        }
    }
}
