//! Template literal types as anchored regex patterns.
//!
//! A template literal type normalizes to `string` with a derived pattern:
//! fixed text segments are regex-escaped, `${string}` placeholders match
//! anything, `${number}` placeholders match a numeric literal, and the
//! whole pattern is anchored.

use tsmeta_host::{PlaceholderKind, TemplatePart};

/// Pattern fragment for a `${number}` placeholder.
const NUMBER_PATTERN: &str = r"[+-]?(\d+\.?\d*|\.\d+)";

/// Build the anchored pattern for a template literal's parts.
pub(crate) fn template_pattern(parts: &[TemplatePart]) -> String {
    let mut pattern = String::from("^");
    for part in parts {
        match part {
            TemplatePart::Text(text) => pattern.push_str(&escape_regex(text)),
            TemplatePart::Placeholder(PlaceholderKind::Number) => pattern.push_str(NUMBER_PATTERN),
            TemplatePart::Placeholder(_) => pattern.push_str(".*"),
        }
    }
    pattern.push('$');
    pattern
}

/// Escape ECMA regex metacharacters in a fixed text segment.
pub(crate) fn escape_regex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{'
            | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
