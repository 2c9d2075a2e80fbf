//! Literal values as they appear in literal types and enum members.
//!
//! The host type system hands literal values across the boundary already
//! coerced: the producer decides whether a numeric literal is integral
//! (`Int`) or floating (`Float`). Nothing downstream re-guesses.

use serde::Serialize;
use std::fmt;

/// A literal value for literal types, enum members, and stringified
/// defaults.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl LiteralValue {
    /// Render the value the way it would appear in source.
    ///
    /// Used for the `default` constraint capture and for composite name
    /// segments. Strings are rendered without quotes.
    pub fn stringify(&self) -> String {
        match self {
            LiteralValue::String(s) => s.clone(),
            LiteralValue::Int(n) => n.to_string(),
            LiteralValue::Float(n) => n.to_string(),
            LiteralValue::Bool(b) => b.to_string(),
        }
    }

    /// Whether two literal values are the same discriminant key.
    ///
    /// Float keys compare by bit pattern so that `NaN` values collide
    /// rather than producing an unmatchable key.
    pub fn same_key(&self, other: &LiteralValue) -> bool {
        match (self, other) {
            (LiteralValue::String(a), LiteralValue::String(b)) => a == b,
            (LiteralValue::Int(a), LiteralValue::Int(b)) => a == b,
            (LiteralValue::Float(a), LiteralValue::Float(b)) => a.to_bits() == b.to_bits(),
            (LiteralValue::Bool(a), LiteralValue::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "\"{s}\""),
            LiteralValue::Int(n) => write!(f, "{n}"),
            LiteralValue::Float(n) => write!(f, "{n}"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
        }
    }
}
