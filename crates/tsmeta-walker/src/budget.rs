//! Recursion and breadth budgets for the walker.
//!
//! Two independent budgets bound every walk:
//! - [`RecursionGuard`] tracks depth and the set of in-progress types.
//!   A type reached while already in progress is a cycle; if a pending
//!   name was chosen for it, the occurrence resolves to a reference.
//! - [`BreadthLedger`] caps the number of IR nodes emitted per named
//!   walk. The ledger is a stack: entering a named type pushes a fresh
//!   budget and restores the parent's on exit, so one large sibling
//!   cannot bankrupt the next.

use rustc_hash::FxHashMap;
use tsmeta_host::TypeId;

/// Outcome of attempting to descend into a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EnterOutcome {
    /// Not currently being walked; descend. Balance with `leave`.
    Entered,
    /// Already in progress. Carries the pending name, when one was
    /// chosen for the in-progress walk.
    Cycle(Option<String>),
    /// The depth budget is exhausted.
    DepthExceeded,
}

#[derive(Debug)]
struct PendingEntry {
    name: Option<String>,
    referenced: bool,
}

/// Depth counter plus the in-progress set keyed by type identity.
#[derive(Debug)]
pub(crate) struct RecursionGuard {
    max_depth: u32,
    depth: u32,
    visiting: FxHashMap<TypeId, PendingEntry>,
}

impl RecursionGuard {
    pub(crate) fn new(max_depth: u32) -> Self {
        RecursionGuard {
            max_depth,
            depth: 0,
            visiting: FxHashMap::default(),
        }
    }

    /// Try to descend into `t`, registering `pending_name` for
    /// back-references. A cycle marks the in-progress entry referenced.
    pub(crate) fn enter(&mut self, t: TypeId, pending_name: Option<String>) -> EnterOutcome {
        if let Some(entry) = self.visiting.get_mut(&t) {
            entry.referenced = true;
            return EnterOutcome::Cycle(entry.name.clone());
        }
        if self.depth >= self.max_depth {
            return EnterOutcome::DepthExceeded;
        }
        self.depth += 1;
        self.visiting.insert(
            t,
            PendingEntry {
                name: pending_name,
                referenced: false,
            },
        );
        EnterOutcome::Entered
    }

    /// Pop `t` from the in-progress set. Returns whether a cycle
    /// resolved to it while it was being walked.
    pub(crate) fn leave(&mut self, t: TypeId) -> bool {
        self.depth = self.depth.saturating_sub(1);
        self.visiting
            .remove(&t)
            .map(|entry| entry.referenced)
            .unwrap_or(false)
    }

    /// The pending name chosen for an in-progress type, if any.
    pub(crate) fn pending_name(&self, t: TypeId) -> Option<&str> {
        self.visiting.get(&t).and_then(|entry| entry.name.as_deref())
    }

    pub(crate) fn mark_referenced(&mut self, t: TypeId) {
        if let Some(entry) = self.visiting.get_mut(&t) {
            entry.referenced = true;
        }
    }

    pub(crate) fn is_visiting(&self, t: TypeId) -> bool {
        self.visiting.contains_key(&t)
    }

    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }
}

#[derive(Debug)]
struct Frame {
    remaining: u32,
    subject: String,
}

/// Stack of per-named-walk breadth budgets.
#[derive(Debug, Default)]
pub(crate) struct BreadthLedger {
    frames: Vec<Frame>,
}

impl BreadthLedger {
    pub(crate) fn new() -> Self {
        BreadthLedger::default()
    }

    pub(crate) fn push(&mut self, budget: u32, subject: impl Into<String>) {
        self.frames.push(Frame {
            remaining: budget,
            subject: subject.into(),
        });
    }

    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    /// The named type currently being charged, for warning subjects.
    pub(crate) fn subject(&self) -> &str {
        self.frames
            .last()
            .map(|frame| frame.subject.as_str())
            .unwrap_or("<anonymous>")
    }

    /// Charge one IR node against the innermost frame. Returns `false`
    /// when the frame is exhausted.
    pub(crate) fn charge(&mut self) -> bool {
        match self.frames.last_mut() {
            Some(frame) if frame.remaining == 0 => false,
            Some(frame) => {
                frame.remaining -= 1;
                true
            }
            None => true,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
