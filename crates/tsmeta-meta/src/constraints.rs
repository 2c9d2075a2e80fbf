//! Validation constraint metadata and the precedence merge.
//!
//! Constraints reach the IR from two sources: phantom branding extracted
//! from the type graph, and JSDoc tags on a property declaration. Every
//! field is optional-by-absence; the merge rule is "if the overlay has
//! `Some`, it overwrites; if `None`, the base survives".

use indexmap::IndexMap;
use serde::Serialize;

/// Numeric sub-type refinement for `number`-typed hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericType {
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
}

impl NumericType {
    /// Parse the spelling used by the `type` constraint and the
    /// `@type` / `@numericType` JSDoc tags.
    pub fn parse(text: &str) -> Option<NumericType> {
        match text {
            "int32" => Some(NumericType::Int32),
            "uint32" => Some(NumericType::Uint32),
            "int64" => Some(NumericType::Int64),
            "uint64" => Some(NumericType::Uint64),
            "float" => Some(NumericType::Float),
            "double" => Some(NumericType::Double),
            _ => None,
        }
    }
}

/// A value transform applied before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    Trim,
    ToLowerCase,
    ToUpperCase,
}

/// Merged validation metadata for one type or property.
///
/// Fields absent from the source stay `None` and are omitted from the
/// serialized form. `transforms` and `errors` are the only list-shaped
/// slots; they concatenate and key-merge respectively instead of
/// overwriting wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Constraints {
    // Numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_type: Option<NumericType>,

    // String
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uppercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,

    // Array
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    // Transforms, in application order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<Transform>,

    // Custom
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coerce: Option<bool>,
    /// Fallback validation error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Per-constraint error messages, constraint name → message.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub errors: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_fn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_module: Option<String>,
}

impl Constraints {
    pub fn new() -> Self {
        Constraints::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Constraints::default()
    }

    /// Overlay `other` onto `self` under the precedence rule: each
    /// present field of `other` overwrites, `transforms` concatenate
    /// (overlay last, no deduplication), `errors` merge key-by-key with
    /// the overlay winning.
    pub fn overlay(&mut self, other: Constraints) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            minimum,
            maximum,
            exclusive_minimum,
            exclusive_maximum,
            multiple_of,
            numeric_type,
            min_length,
            max_length,
            pattern,
            format,
            starts_with,
            ends_with,
            includes,
            uppercase,
            lowercase,
            content_media_type,
            min_items,
            max_items,
            unique_items,
            default,
            coerce,
            error_message,
            validate_fn,
            validate_module,
        );
        self.transforms.extend(other.transforms);
        for (key, message) in other.errors {
            self.errors.insert(key, message);
        }
    }

    /// Merge the two constraint sources for one property: phantom-derived
    /// first, JSDoc-derived overlaid.
    pub fn merged(phantom: Constraints, jsdoc: Constraints) -> Constraints {
        let mut result = phantom;
        result.overlay(jsdoc);
        result
    }
}
