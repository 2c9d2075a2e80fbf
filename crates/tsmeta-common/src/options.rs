//! Walker configuration.
//!
//! This module lives in tsmeta-common so that both the walker and any
//! driver embedding it can reference `WalkerOptions` without a circular
//! dependency.

use crate::limits;

/// Configuration for a walker instance.
///
/// The defaults come from [`crate::limits`] and are appropriate for
/// ordinary API surfaces; drivers processing generated or adversarial
/// input may want to lower them.
#[derive(Debug, Clone, Copy)]
pub struct WalkerOptions {
    /// Maximum recursion depth before a sub-tree degrades to `any`.
    pub max_depth: u32,
    /// IR-node budget per named-type walk before degrading to `any`.
    pub breadth_budget: u32,
}

impl Default for WalkerOptions {
    fn default() -> Self {
        WalkerOptions {
            max_depth: limits::MAX_WALK_DEPTH,
            breadth_budget: limits::BREADTH_BUDGET,
        }
    }
}
