//! Common types and utilities for the tsmeta schema IR toolchain.
//!
//! This crate provides foundational types used across all tsmeta crates:
//! - Literal values (`LiteralValue`) as they appear in literal types,
//!   enum members, and default-value constraints
//! - Centralized limits and thresholds for the type walker
//! - Walker configuration (`WalkerOptions`)
//! - The deduplicated warning channel (`Warning`, `WarningKind`,
//!   `WarningSink`)

// Literal values - shared between the host type graph and the IR
pub mod literal;
pub use literal::LiteralValue;

// Centralized limits and thresholds
pub mod limits;

// Walker configuration
pub mod options;
pub use options::WalkerOptions;

// Deduplicated diagnostic channel
pub mod warnings;
pub use warnings::{Warning, WarningKind, WarningSink};
