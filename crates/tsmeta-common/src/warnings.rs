//! Deduplicated diagnostic channel for the walker.
//!
//! The walker never raises failures for malformed-but-typechecked input;
//! it degrades the offending sub-tree and records a warning here. Warnings
//! are deduplicated by `(kind, subject)` so that a generic alias
//! instantiated with anonymous arguments in fifty places reports once.

use rustc_hash::FxHashSet;
use serde::Serialize;

/// The closed set of walker warning kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// A generic was instantiated with an unnameable argument; the
    /// instantiation was inlined instead of registered.
    AnonymousGenericArg,
    /// The recursion depth budget tripped; the sub-tree degraded to `any`.
    DepthExceeded,
    /// The per-named-type breadth budget tripped; same substitution.
    BreadthExceeded,
    /// A generic type argument could not be described for naming.
    TypeArgResolutionFailed,
    /// Two different schemas competed for the same registry name.
    MixedRegistryCollision,
}

/// A single walker diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Collector for walker warnings with `(kind, subject)` deduplication.
///
/// The subject is the alias name for `AnonymousGenericArg` and the
/// named-type name for budget warnings; it keys deduplication but is not
/// itself part of the emitted warning.
#[derive(Debug, Default)]
pub struct WarningSink {
    warnings: Vec<Warning>,
    seen: FxHashSet<(WarningKind, String)>,
}

impl WarningSink {
    pub fn new() -> Self {
        WarningSink::default()
    }

    /// Record a warning unless the same `(kind, subject)` pair has
    /// already been recorded.
    pub fn warn(&mut self, kind: WarningKind, subject: &str, message: impl Into<String>) {
        if self.seen.insert((kind, subject.to_string())) {
            self.warnings.push(Warning {
                kind,
                message: message.into(),
                location: None,
            });
        }
    }

    /// Record a warning with a source location attached.
    pub fn warn_at(
        &mut self,
        kind: WarningKind,
        subject: &str,
        message: impl Into<String>,
        location: impl Into<String>,
    ) {
        if self.seen.insert((kind, subject.to_string())) {
            self.warnings.push(Warning {
                kind,
                message: message.into(),
                location: Some(location.into()),
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consume the sink, yielding warnings in emission order.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
