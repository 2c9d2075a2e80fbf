//! The named-schema store.
//!
//! Schemas are keyed by canonical name and kept in first-registration
//! order, which is the order the driver presented named types with
//! transitive discoveries interleaved. First writer wins; a later writer
//! with a different schema is reported, not applied.

use crate::meta::TypeMeta;
use indexmap::IndexMap;
use serde::Serialize;
use tsmeta_common::{WarningKind, WarningSink};

/// Insertion-ordered mapping from canonical schema name to IR.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Registry {
    schemas: IndexMap<String, TypeMeta>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a schema under `name`. First writer wins: a second
    /// identical write is a no-op, a second *different* write records a
    /// `mixed-registry-collision` warning and keeps the original.
    ///
    /// Returns `true` when the schema was inserted.
    pub fn insert(&mut self, name: &str, meta: TypeMeta, sink: &mut WarningSink) -> bool {
        match self.schemas.get(name) {
            None => {
                self.schemas.insert(name.to_string(), meta);
                true
            }
            Some(existing) if *existing == meta => false,
            Some(_) => {
                sink.warn(
                    WarningKind::MixedRegistryCollision,
                    name,
                    format!("two different schemas claimed the name `{name}`; keeping the first"),
                );
                false
            }
        }
    }

    /// Remove a schema, preserving the order of the remaining entries.
    /// Drivers merging registries use this to retract entries that must
    /// stay transparent at use sites.
    pub fn remove(&mut self, name: &str) -> Option<TypeMeta> {
        self.schemas.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&TypeMeta> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Schemas in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeMeta)> {
        self.schemas.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(|k| k.as_str())
    }
}
