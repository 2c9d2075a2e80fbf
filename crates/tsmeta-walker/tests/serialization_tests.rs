//! Stable-form serialization invariants for downstream diffing.

use tsmeta_host::{PropertyDescriptor, TypeGraph, TypeId};
use tsmeta_walker::Walker;

#[test]
fn registry_serializes_in_registration_order() {
    let mut graph = TypeGraph::new();
    let b = graph.named_object("Beta", vec![PropertyDescriptor::new("b", TypeId::NUMBER)]);
    let a = graph.named_object("Alpha", vec![PropertyDescriptor::new("a", TypeId::STRING)]);

    let mut walker = Walker::new(&graph);
    walker.walk_named("Beta", b);
    walker.walk_named("Alpha", a);
    let output = walker.finish();

    let json = serde_json::to_string(&output.registry).unwrap();
    let beta = json.find("\"Beta\"").unwrap();
    let alpha = json.find("\"Alpha\"").unwrap();
    assert!(beta < alpha, "registration order must survive serialization");
}

#[test]
fn absent_flags_and_constraints_are_omitted() {
    let mut graph = TypeGraph::new();
    let t = graph.named_object("Plain", vec![PropertyDescriptor::new("x", TypeId::STRING)]);

    let mut walker = Walker::new(&graph);
    walker.walk_named("Plain", t);
    let output = walker.finish();

    let json = serde_json::to_value(&output.registry).unwrap();
    let prop = &json["Plain"]["properties"][0];
    assert_eq!(prop["name"], "x");
    assert_eq!(prop["required"], true);
    assert!(prop.get("readonly").is_none(), "false flags are omitted");
    assert!(prop.get("constraints").is_none());
    assert!(prop.get("description").is_none());
    assert!(prop["type"].get("nullable").is_none());
}

#[test]
fn ref_targets_use_the_canonical_key() {
    let mut graph = TypeGraph::new();
    let item = graph.named_object("Item", vec![PropertyDescriptor::new("id", TypeId::NUMBER)]);
    let items = graph.array(item);
    let paged = graph.instance(
        "PagedResult",
        vec![item],
        vec![PropertyDescriptor::new("items", items)],
    );

    let mut walker = Walker::new(&graph);
    let root = walker.walk_named("MyList", paged);
    let output = walker.finish();

    // the root ref carries the display alias...
    let root_json = serde_json::to_value(&root).unwrap();
    assert_eq!(root_json["name"], "PagedResult_Item");
    assert_eq!(root_json["alias_display_name"], "MyList");

    // ...but refs inside registered schemas are canonical-only
    let registry_json = serde_json::to_value(&output.registry).unwrap();
    let element = &registry_json["PagedResult_Item"]["properties"][0]["type"]["element"];
    assert_eq!(element["kind"], "ref");
    assert_eq!(element["name"], "Item");
    assert!(element.get("alias_display_name").is_none());
}

#[test]
fn errors_map_appears_only_when_non_empty() {
    let mut graph = TypeGraph::new();
    let min_len = graph.literal_int(2);
    let plain_phantom = graph.anon_object(vec![PropertyDescriptor::new(
        "__tsgonest_minLength",
        min_len,
    )]);
    let plain = graph.intersection(vec![TypeId::STRING, plain_phantom]);

    let min_len2 = graph.literal_int(2);
    let message = graph.literal_string("too short");
    let noisy_phantom = graph.anon_object(vec![
        PropertyDescriptor::new("__tsgonest_minLength", min_len2),
        PropertyDescriptor::new("__tsgonest_minLength_error", message),
    ]);
    let noisy = graph.intersection(vec![TypeId::STRING, noisy_phantom]);

    let mut walker = Walker::new(&graph);
    let plain_meta = walker.walk(plain);
    let noisy_meta = walker.walk(noisy);

    let plain_json = serde_json::to_value(&plain_meta).unwrap();
    assert!(plain_json["constraints"].get("errors").is_none());

    let noisy_json = serde_json::to_value(&noisy_meta).unwrap();
    assert_eq!(noisy_json["constraints"]["errors"]["minLength"], "too short");
}

#[test]
fn union_and_literal_serialize_with_kind_tags() {
    let mut graph = TypeGraph::new();
    let lit_a = graph.literal_string("a");
    let lit_b = graph.literal_string("b");
    let t = graph.union(vec![lit_a, lit_b, TypeId::NULL]);

    let mut walker = Walker::new(&graph);
    let meta = walker.walk(t);

    let json = serde_json::to_value(&meta).unwrap();
    assert_eq!(json["kind"], "union");
    assert_eq!(json["nullable"], true);
    assert_eq!(json["members"][0]["kind"], "literal");
    assert_eq!(json["members"][0]["value"], "a");
}

#[test]
fn warnings_serialize_with_kebab_case_kinds() {
    let mut graph = TypeGraph::new();
    let anon = graph.anon_object(vec![PropertyDescriptor::new("x", TypeId::NUMBER)]);
    let wrapped = graph.instance(
        "Wrapper",
        vec![anon],
        vec![PropertyDescriptor::new("value", anon)],
    );

    let mut walker = Walker::new(&graph);
    walker.walk_named("W", wrapped);
    let output = walker.finish();

    let json = serde_json::to_value(&output.warnings).unwrap();
    assert_eq!(json[0]["kind"], "anonymous-generic-arg");
    assert!(json[0]["message"].as_str().unwrap().contains("Wrapper"));
}
