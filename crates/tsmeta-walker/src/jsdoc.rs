//! JSDoc validation-tag reader.
//!
//! Hosts deliver `(tag, text)` pairs with the `@` already stripped; this
//! module lowers the recognized tag set onto the enumerated constraint
//! fields plus property-level doc metadata. Tag comparison is
//! case-insensitive. Unrecognized tags are ignored.
//!
//! Sugar tags lower onto the same fields the long-form tags use:
//! `@positive` is `exclusiveMinimum 0`, `@len 5` pins both length
//! bounds, `@safe` pins the IEEE-exact integer range, and so on.

use tsmeta_meta::{Constraints, NumericType, Transform};

/// Largest integer exactly representable in an IEEE double (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Property-level documentation metadata carried by JSDoc.
#[derive(Clone, Debug, Default)]
pub struct DocMeta {
    pub description: Option<String>,
    pub write_only: bool,
    pub example: Option<String>,
}

/// Everything a declaration's JSDoc contributes.
#[derive(Clone, Debug, Default)]
pub struct JsdocInfo {
    pub constraints: Constraints,
    pub doc: DocMeta,
}

/// Lower a declaration's tags onto constraints and doc metadata.
pub fn read_tags(tags: &[(String, String)]) -> JsdocInfo {
    let mut info = JsdocInfo::default();
    let c = &mut info.constraints;
    for (tag, text) in tags {
        let text = text.trim();
        match tag.to_ascii_lowercase().as_str() {
            "minimum" | "min" => c.minimum = parse_number(text),
            "maximum" | "max" => c.maximum = parse_number(text),
            "exclusiveminimum" => c.exclusive_minimum = parse_number(text),
            "exclusivemaximum" => c.exclusive_maximum = parse_number(text),
            "multipleof" => c.multiple_of = parse_number(text),
            "type" | "numerictype" => c.numeric_type = NumericType::parse(first_token(text)),
            "minlength" => c.min_length = parse_integer(text),
            "maxlength" => c.max_length = parse_integer(text),
            "len" | "length" => {
                let n = parse_integer(text);
                c.min_length = n;
                c.max_length = n;
            }
            "items" => {
                let n = parse_integer(text);
                c.min_items = n;
                c.max_items = n;
            }
            "pattern" => c.pattern = non_empty(text),
            "format" => c.format = non_empty(first_token(text)),
            "startswith" => c.starts_with = non_empty(text),
            "endswith" => c.ends_with = non_empty(text),
            "includes" => c.includes = non_empty(text),
            "uppercase" => c.uppercase = Some(parse_flag(text)),
            "lowercase" => c.lowercase = Some(parse_flag(text)),
            "trim" => c.transforms.push(Transform::Trim),
            "tolowercase" => c.transforms.push(Transform::ToLowerCase),
            "touppercase" => c.transforms.push(Transform::ToUpperCase),
            "positive" => c.exclusive_minimum = Some(0.0),
            "negative" => c.exclusive_maximum = Some(0.0),
            "nonnegative" => c.minimum = Some(0.0),
            "nonpositive" => c.maximum = Some(0.0),
            "int" => c.numeric_type = Some(NumericType::Int64),
            "safe" => {
                c.minimum = Some(-MAX_SAFE_INTEGER);
                c.maximum = Some(MAX_SAFE_INTEGER);
            }
            "finite" => c.format = Some("finite".to_string()),
            "uniqueitems" => c.unique_items = Some(parse_flag(text)),
            "minitems" => c.min_items = parse_integer(text),
            "maxitems" => c.max_items = parse_integer(text),
            "default" => c.default = non_empty(text),
            "contentmediatype" => c.content_media_type = non_empty(first_token(text)),
            "error" => c.error_message = non_empty(text),
            "coerce" => c.coerce = Some(parse_flag(text)),
            "description" => info.doc.description = non_empty(text),
            "writeonly" => info.doc.write_only = parse_flag(text),
            "example" => info.doc.example = non_empty(text),
            _ => {}
        }
    }
    info
}

/// First whitespace-delimited token, for tags whose trailing text is
/// prose (`@minimum 5 - must be at least five`).
fn first_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

fn parse_number(text: &str) -> Option<f64> {
    first_token(text).parse::<f64>().ok()
}

fn parse_integer(text: &str) -> Option<u64> {
    first_token(text).parse::<u64>().ok()
}

/// Bare flag tags default to true; an explicit `false` turns them off.
fn parse_flag(text: &str) -> bool {
    !first_token(text).eq_ignore_ascii_case("false")
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
