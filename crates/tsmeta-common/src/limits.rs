//! Centralized limits and thresholds for the type walker.
//!
//! This module provides shared constants for recursion depth, breadth
//! budgets, and naming cutoffs used throughout the walker. Centralizing
//! these values:
//! - Prevents duplicate definitions with inconsistent values
//! - Makes it easy to tune limits for different environments
//! - Documents the rationale for each limit
//!
//! The depth and breadth limits are budgets, not correctness conditions:
//! exceeding one degrades the offending sub-tree to `any` and records a
//! warning, it never aborts the walk.

/// Maximum recursion depth for a single walk.
///
/// Prevents stack overflow when normalizing deeply nested type structures.
/// Genuine cycles are caught earlier by the visited set; this limit only
/// trips on extremely deep *acyclic* nesting, e.g. a 100-level chain of
/// wrapper objects. Exceeding it substitutes `any` for the sub-tree and
/// records a `depth-exceeded` warning.
pub const MAX_WALK_DEPTH: u32 = 64;

/// Breadth budget for a single named-type walk.
///
/// Caps the number of IR nodes emitted while normalizing one named type.
/// The budget is isolated per named type: entering a nested named type
/// saves the current budget and starts a fresh one, so a large sibling
/// cannot bankrupt later siblings of its parent. Exhaustion substitutes
/// `any` for the remaining sub-tree and records a `breadth-exceeded`
/// warning.
pub const BREADTH_BUDGET: u32 = 4_096;

/// Maximum literal-union size usable as a composite name segment.
///
/// A generic instantiated with a small literal union (`Pick<T, "a" | "b">`)
/// gets a readable composite name with the literals joined in. Beyond this
/// many members the name would be unreadable, so the argument is treated
/// as anonymous and the instantiation is inlined instead.
pub const MAX_NAMEABLE_LITERAL_UNION: usize = 4;
