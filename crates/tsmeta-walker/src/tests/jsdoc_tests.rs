use crate::jsdoc::read_tags;
use tsmeta_meta::{NumericType, Transform};

fn tags(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn numeric_bounds_parse() {
    let info = read_tags(&tags(&[
        ("minimum", "5"),
        ("maximum", "10.5"),
        ("exclusiveMinimum", "0"),
        ("multipleOf", "0.5"),
    ]));
    let c = &info.constraints;
    assert_eq!(c.minimum, Some(5.0));
    assert_eq!(c.maximum, Some(10.5));
    assert_eq!(c.exclusive_minimum, Some(0.0));
    assert_eq!(c.multiple_of, Some(0.5));
}

#[test]
fn tag_names_are_case_insensitive() {
    let info = read_tags(&tags(&[("MiniMum", "3"), ("MAXLENGTH", "9")]));
    assert_eq!(info.constraints.minimum, Some(3.0));
    assert_eq!(info.constraints.max_length, Some(9));
}

#[test]
fn min_max_aliases() {
    let info = read_tags(&tags(&[("min", "1"), ("max", "2")]));
    assert_eq!(info.constraints.minimum, Some(1.0));
    assert_eq!(info.constraints.maximum, Some(2.0));
}

#[test]
fn trailing_prose_is_ignored_for_numbers() {
    let info = read_tags(&tags(&[("minimum", "5 - at least five")]));
    assert_eq!(info.constraints.minimum, Some(5.0));
}

#[test]
fn len_pins_both_length_bounds() {
    let info = read_tags(&tags(&[("len", "4")]));
    assert_eq!(info.constraints.min_length, Some(4));
    assert_eq!(info.constraints.max_length, Some(4));
}

#[test]
fn items_pins_both_item_bounds() {
    let info = read_tags(&tags(&[("items", "3")]));
    assert_eq!(info.constraints.min_items, Some(3));
    assert_eq!(info.constraints.max_items, Some(3));
}

#[test]
fn sugar_sign_tags_lower_onto_bounds() {
    let info = read_tags(&tags(&[("positive", "")]));
    assert_eq!(info.constraints.exclusive_minimum, Some(0.0));

    let info = read_tags(&tags(&[("negative", "")]));
    assert_eq!(info.constraints.exclusive_maximum, Some(0.0));

    let info = read_tags(&tags(&[("nonnegative", "")]));
    assert_eq!(info.constraints.minimum, Some(0.0));

    let info = read_tags(&tags(&[("nonpositive", "")]));
    assert_eq!(info.constraints.maximum, Some(0.0));
}

#[test]
fn int_and_safe_lower_onto_numeric_fields() {
    let info = read_tags(&tags(&[("int", "")]));
    assert_eq!(info.constraints.numeric_type, Some(NumericType::Int64));

    let info = read_tags(&tags(&[("safe", "")]));
    assert_eq!(info.constraints.minimum, Some(-9_007_199_254_740_991.0));
    assert_eq!(info.constraints.maximum, Some(9_007_199_254_740_991.0));
}

#[test]
fn numeric_type_tag_parses() {
    let info = read_tags(&tags(&[("type", "uint32")]));
    assert_eq!(info.constraints.numeric_type, Some(NumericType::Uint32));
}

#[test]
fn transform_tags_append_in_order() {
    let info = read_tags(&tags(&[
        ("trim", ""),
        ("toLowerCase", ""),
        ("trim", ""),
    ]));
    assert_eq!(
        info.constraints.transforms,
        vec![Transform::Trim, Transform::ToLowerCase, Transform::Trim],
        "no deduplication is performed"
    );
}

#[test]
fn string_tags_keep_full_text() {
    let info = read_tags(&tags(&[
        ("pattern", "^[a-z]+$"),
        ("startsWith", "user-"),
        ("error", "must look like a user id"),
    ]));
    assert_eq!(info.constraints.pattern.as_deref(), Some("^[a-z]+$"));
    assert_eq!(info.constraints.starts_with.as_deref(), Some("user-"));
    assert_eq!(
        info.constraints.error_message.as_deref(),
        Some("must look like a user id")
    );
}

#[test]
fn flag_tags_default_true_and_honor_false() {
    let info = read_tags(&tags(&[("uniqueItems", "")]));
    assert_eq!(info.constraints.unique_items, Some(true));

    let info = read_tags(&tags(&[("uniqueItems", "false")]));
    assert_eq!(info.constraints.unique_items, Some(false));
}

#[test]
fn doc_metadata_is_separated_from_constraints() {
    let info = read_tags(&tags(&[
        ("description", "user email address"),
        ("writeOnly", ""),
        ("example", "ana@example.com"),
    ]));
    assert!(info.constraints.is_empty());
    assert_eq!(info.doc.description.as_deref(), Some("user email address"));
    assert!(info.doc.write_only);
    assert_eq!(info.doc.example.as_deref(), Some("ana@example.com"));
}

#[test]
fn unknown_tags_are_ignored() {
    let info = read_tags(&tags(&[("returns", "nothing"), ("see", "elsewhere")]));
    assert!(info.constraints.is_empty());
    assert!(info.doc.description.is_none());
}

#[test]
fn unparsable_numbers_stay_unset() {
    let info = read_tags(&tags(&[("minimum", "soon"), ("minLength", "-3")]));
    assert_eq!(info.constraints.minimum, None);
    assert_eq!(info.constraints.min_length, None);
}
