//! The recursive normalization engine.
//!
//! `Walker` turns semantic types into IR one entry point at a time:
//! [`Walker::walk`] normalizes a type anonymously, [`Walker::walk_named`]
//! additionally registers the result under a canonical schema name.
//! Every operation is total: malformed-but-typechecked input degrades to
//! `any` plus a warning, never a panic.
//!
//! The dispatch order in [`Walker::walk_type`] is load-bearing:
//! 1. an in-progress type resolves to its pending name (cycle break);
//! 2. a previously registered type resolves through the name cache;
//! 3. a declared name or generic application starts a nested named walk
//!    with its own breadth frame;
//! 4. everything else is walked structurally under the budgets.

use crate::budget::{BreadthLedger, EnterOutcome, RecursionGuard};
use crate::phantom::{self, PhantomClass};
use crate::template;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};
use tsmeta_common::{LiteralValue, WalkerOptions, Warning, WarningKind, WarningSink};
use tsmeta_host::{Primitive, TypeHost, TypeId, TypeShape};
use tsmeta_meta::{Atomic, Registry, TupleElement, TypeMeta};

/// Everything a walk produced besides the root IR values.
#[derive(Debug)]
pub struct WalkOutput {
    pub registry: Registry,
    pub warnings: Vec<Warning>,
}

/// One normalization engine over one host graph.
///
/// A walker owns its registry and warning collector; a driver that wants
/// parallelism runs one walker per independent registry and merges at
/// the boundary.
pub struct Walker<'a, H: TypeHost> {
    pub(crate) host: &'a H,
    pub(crate) options: WalkerOptions,
    pub(crate) registry: Registry,
    pub(crate) sink: WarningSink,
    pub(crate) guard: RecursionGuard,
    pub(crate) frames: BreadthLedger,
    /// Canonical names of types already walked and registered.
    pub(crate) name_cache: FxHashMap<TypeId, String>,
}

impl<'a, H: TypeHost> Walker<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Walker::with_options(host, WalkerOptions::default())
    }

    pub fn with_options(host: &'a H, options: WalkerOptions) -> Self {
        Walker {
            host,
            options,
            registry: Registry::new(),
            sink: WarningSink::new(),
            guard: RecursionGuard::new(options.max_depth),
            frames: BreadthLedger::new(),
            name_cache: FxHashMap::default(),
        }
    }

    /// Normalize a type without assigning it a name.
    pub fn walk(&mut self, t: TypeId) -> TypeMeta {
        let pushed = self.frames.is_empty();
        if pushed {
            self.frames.push(self.options.breadth_budget, "<anonymous>");
        }
        let meta = self.walk_type(t);
        if pushed {
            self.frames.pop();
        }
        meta
    }

    /// Normalize a type and register it (and everything discovered
    /// transitively) under `name`. Returns a `Ref` when the result was
    /// registered, the inline IR otherwise.
    pub fn walk_named(&mut self, name: &str, t: TypeId) -> TypeMeta {
        self.walk_named_inner(Some(name), t)
    }

    /// Schemas registered so far, for inspection between walks.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn warnings(&self) -> &[Warning] {
        self.sink.warnings()
    }

    /// Tear down the walker, yielding the registry and warnings.
    pub fn finish(self) -> WalkOutput {
        WalkOutput {
            registry: self.registry,
            warnings: self.sink.into_warnings(),
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub(crate) fn walk_type(&mut self, t: TypeId) -> TypeMeta {
        if let Some(name) = self.guard.pending_name(t) {
            let name = name.to_string();
            self.guard.mark_referenced(t);
            trace!(target: "tsmeta::walker", name = %name, "recursive occurrence resolved to ref");
            return TypeMeta::reference(name);
        }
        if self.guard.is_visiting(t) {
            // in progress without a chosen name; nothing to refer to
            return self.degrade_unnamed_cycle();
        }
        if let Some(name) = self.name_cache.get(&t) {
            return TypeMeta::reference(name.clone());
        }
        if self.host.declared_name(t).is_some() || self.host.generic_instantiation(t).is_some() {
            return self.walk_named_inner(None, t);
        }
        self.walk_guarded(t, None).0
    }

    /// Walk under the depth guard and breadth ledger. Returns the IR and
    /// whether a back-reference resolved to this type while walking it.
    pub(crate) fn walk_guarded(&mut self, t: TypeId, pending: Option<String>) -> (TypeMeta, bool) {
        if !self.frames.charge() {
            let subject = self.frames.subject().to_string();
            self.sink.warn(
                WarningKind::BreadthExceeded,
                &subject,
                format!("breadth budget exhausted while walking `{subject}`"),
            );
            return (TypeMeta::any(), false);
        }
        match self.guard.enter(t, pending) {
            EnterOutcome::Cycle(Some(name)) => return (TypeMeta::reference(name), false),
            EnterOutcome::Cycle(None) => return (self.degrade_unnamed_cycle(), false),
            EnterOutcome::DepthExceeded => {
                let subject = self.frames.subject().to_string();
                self.sink.warn(
                    WarningKind::DepthExceeded,
                    &subject,
                    format!(
                        "recursion depth limit {} exceeded while walking `{subject}`",
                        self.options.max_depth
                    ),
                );
                return (TypeMeta::any(), false);
            }
            EnterOutcome::Entered => {}
        }
        let meta = self.walk_shape(t);
        let referenced = self.guard.leave(t);
        (meta, referenced)
    }

    fn walk_shape(&mut self, t: TypeId) -> TypeMeta {
        match self.host.classify(t) {
            TypeShape::Primitive(p) => TypeMeta::atomic(atomic_of(p)),
            TypeShape::Literal => match self.host.literal_value(t) {
                Some(value) => TypeMeta::literal(value),
                None => TypeMeta::any(),
            },
            TypeShape::Any => TypeMeta::any(),
            TypeShape::Unknown => TypeMeta::unknown(),
            TypeShape::Never => TypeMeta::never(),
            TypeShape::Void => TypeMeta::void(),
            TypeShape::Null => TypeMeta::any().with_nullable(true),
            TypeShape::Undefined => TypeMeta::any().with_optional(true),
            TypeShape::Function => TypeMeta::any_named("function"),
            TypeShape::TemplateLiteral => {
                let parts = self.host.template_literal_parts(t);
                let mut meta = TypeMeta::atomic(Atomic::String);
                meta.template_pattern = Some(template::template_pattern(&parts));
                meta
            }
            TypeShape::Union => self.walk_union(t),
            TypeShape::Intersection => self.walk_intersection(t),
            TypeShape::Object => self.walk_object(t),
            TypeShape::Array => match self.host.array_element(t) {
                Some(element) => {
                    let element = self.walk_type(element);
                    TypeMeta::array(element)
                }
                None => TypeMeta::any(),
            },
            TypeShape::Tuple => {
                let elements = self
                    .host
                    .tuple_elements(t)
                    .into_iter()
                    .map(|e| TupleElement {
                        ty: self.walk_type(e.ty),
                        optional: e.optional,
                        rest: e.rest,
                    })
                    .collect();
                TypeMeta::tuple(elements)
            }
            TypeShape::Enum => self.walk_enum(t),
            TypeShape::Native => self.walk_native(t),
        }
    }

    // =========================================================================
    // Leaf-ish handlers
    // =========================================================================

    /// Enums normalize to a union of their literal members. Member
    /// construction is direct and does not consume breadth budget.
    fn walk_enum(&mut self, t: TypeId) -> TypeMeta {
        let mut members = self.host.enum_members(t);
        if members.is_empty() {
            return TypeMeta::never();
        }
        if members.len() == 1 {
            return match members.pop() {
                Some(value) => TypeMeta::literal(value),
                None => TypeMeta::never(),
            };
        }
        TypeMeta::union(members.into_iter().map(TypeMeta::literal).collect(), None)
    }

    fn walk_native(&mut self, t: TypeId) -> TypeMeta {
        let Some((name, args)) = self.host.native_name_and_args(t) else {
            return TypeMeta::any();
        };
        // Promise is transparent: the IR describes the settled value
        if name == "Promise" {
            return match args.first() {
                Some(&inner) => self.walk_type(inner),
                None => TypeMeta::any(),
            };
        }
        let type_arguments = args.into_iter().map(|arg| self.walk_type(arg)).collect();
        TypeMeta::native(name, type_arguments)
    }

    // =========================================================================
    // Named walks
    // =========================================================================

    pub(crate) fn walk_named_inner(&mut self, display: Option<&str>, t: TypeId) -> TypeMeta {
        let canonical = match self.resolve_canonical_name(display, t) {
            CanonicalName::Named(name) => name,
            CanonicalName::Inline => return self.walk_inline_framed(display, t),
        };

        // Aliases that resolve to arrays stay transparent: registering
        // them would double-nest arrays at use sites.
        if matches!(self.host.classify(t), TypeShape::Array) {
            return self.walk_inline_framed(display, t);
        }

        if self.registry.contains(&canonical) {
            // First writer wins. A *different* type claiming the same
            // name is reported; re-walking the same type is benign.
            if self.name_cache.get(&t).map(String::as_str) != Some(canonical.as_str()) {
                self.sink.warn(
                    WarningKind::MixedRegistryCollision,
                    &canonical,
                    format!("a different type already registered the name `{canonical}`"),
                );
            }
            return self.reference_to(&canonical, display);
        }

        trace!(target: "tsmeta::walker", name = %canonical, "walking named type");
        self.frames.push(self.options.breadth_budget, canonical.clone());
        let (meta, referenced) = self.walk_guarded(t, Some(canonical.clone()));
        self.frames.pop();

        let registrable = meta.is_object() || (referenced && !meta.is_array());
        if registrable {
            self.name_cache.insert(t, canonical.clone());
            self.registry.insert(&canonical, meta, &mut self.sink);
            debug!(target: "tsmeta::walker", name = %canonical, "registered schema");
            return self.reference_to(&canonical, display);
        }
        meta
    }

    fn walk_inline_framed(&mut self, display: Option<&str>, t: TypeId) -> TypeMeta {
        let subject = display.unwrap_or("<inline>").to_string();
        self.frames.push(self.options.breadth_budget, subject);
        let (meta, _) = self.walk_guarded(t, None);
        self.frames.pop();
        meta
    }

    /// A cycle reached a type that has no pending name to refer to
    /// (e.g. a self-referential array alias, which is never
    /// registered). The occurrence degrades to `any` with a warning.
    fn degrade_unnamed_cycle(&mut self) -> TypeMeta {
        let subject = self.frames.subject().to_string();
        self.sink.warn(
            WarningKind::DepthExceeded,
            &subject,
            format!("recursive occurrence with no referable name while walking `{subject}`"),
        );
        TypeMeta::any()
    }

    fn reference_to(&self, canonical: &str, display: Option<&str>) -> TypeMeta {
        match display {
            Some(alias) if alias != canonical => TypeMeta::aliased_reference(canonical, alias),
            _ => TypeMeta::reference(canonical),
        }
    }

    pub(crate) fn classify_phantom(&self, t: TypeId) -> PhantomClass {
        phantom::classify_object(self.host, t)
    }
}

pub(crate) enum CanonicalName {
    Named(String),
    /// No stable name exists; walk structurally at the use site.
    Inline,
}

pub(crate) fn atomic_of(p: Primitive) -> Atomic {
    match p {
        Primitive::String => Atomic::String,
        Primitive::Number => Atomic::Number,
        Primitive::Boolean => Atomic::Boolean,
        Primitive::BigInt => Atomic::BigInt,
        Primitive::Symbol => Atomic::Symbol,
    }
}

/// Collapse an upstream `true | false` pair back into `boolean`.
pub(crate) fn collapse_boolean_pair(members: &mut Vec<TypeMeta>) {
    let has_true = members
        .iter()
        .any(|m| is_bool_literal(m, true));
    let has_false = members
        .iter()
        .any(|m| is_bool_literal(m, false));
    if has_true && has_false {
        if let Some(first) = members
            .iter()
            .position(|m| is_bool_literal(m, true) || is_bool_literal(m, false))
        {
            members[first] = TypeMeta::atomic(Atomic::Boolean);
            members.retain(|m| !is_bool_literal(m, true) && !is_bool_literal(m, false));
        }
    }
}

fn is_bool_literal(meta: &TypeMeta, expected: bool) -> bool {
    matches!(
        &meta.kind,
        tsmeta_meta::MetaKind::Literal {
            value: LiteralValue::Bool(b)
        } if *b == expected
    )
}
