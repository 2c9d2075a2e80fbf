//! Intersection flattening semantics.

use tsmeta_host::{ObjectData, PropertyDescriptor, TypeGraph, TypeId};
use tsmeta_meta::{Atomic, MetaKind};
use tsmeta_walker::Walker;

#[test]
fn object_intersection_merges_properties_later_wins() {
    let mut graph = TypeGraph::new();
    let a = graph.anon_object(vec![
        PropertyDescriptor::new("id", TypeId::NUMBER),
        PropertyDescriptor::new("label", TypeId::NUMBER),
    ]);
    let b = graph.anon_object(vec![
        PropertyDescriptor::new("label", TypeId::STRING),
        PropertyDescriptor::new("extra", TypeId::BOOLEAN),
    ]);
    let t = graph.intersection(vec![a, b]);

    let mut walker = Walker::new(&graph);
    let meta = walker.walk(t);

    let MetaKind::Object { properties, .. } = &meta.kind else {
        panic!("expected a flattened object, got {:?}", meta.kind);
    };
    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["id", "label", "extra"], "first-seen positions survive");
    let label = properties.iter().find(|p| p.name == "label").unwrap();
    assert_eq!(
        label.ty.kind,
        MetaKind::Atomic { atomic: Atomic::String },
        "the later member's typing wins on conflict"
    );
}

#[test]
fn named_object_intersection_flattens_through_the_registry() {
    let mut graph = TypeGraph::new();
    let a = graph.named_object("Left", vec![PropertyDescriptor::new("l", TypeId::NUMBER)]);
    let b = graph.named_object("Right", vec![PropertyDescriptor::new("r", TypeId::STRING)]);
    let t = graph.intersection(vec![a, b]);

    let mut walker = Walker::new(&graph);
    let meta = walker.walk(t);

    let MetaKind::Object { properties, .. } = &meta.kind else {
        panic!("expected a flattened object, got {:?}", meta.kind);
    };
    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["l", "r"]);
    // the named members still registered on the way through
    assert!(walker.registry().contains("Left"));
    assert!(walker.registry().contains("Right"));
}

#[test]
fn index_signature_comes_from_the_last_member_that_has_one() {
    let mut graph = TypeGraph::new();
    let a = graph.object(ObjectData {
        index_signature: Some(tsmeta_host::IndexSignatureDescriptor {
            key: TypeId::STRING,
            value: TypeId::NUMBER,
        }),
        ..ObjectData::default()
    });
    let b = graph.object(ObjectData {
        index_signature: Some(tsmeta_host::IndexSignatureDescriptor {
            key: TypeId::STRING,
            value: TypeId::BOOLEAN,
        }),
        ..ObjectData::default()
    });
    let c = graph.anon_object(vec![PropertyDescriptor::new("x", TypeId::STRING)]);
    let t = graph.intersection(vec![a, b, c]);

    let mut walker = Walker::new(&graph);
    let meta = walker.walk(t);

    let MetaKind::Object { index_signature, .. } = &meta.kind else {
        panic!("expected a flattened object");
    };
    let sig = index_signature.as_ref().unwrap();
    assert_eq!(
        sig.value_type.kind,
        MetaKind::Atomic { atomic: Atomic::Boolean },
        "the last non-empty index signature wins"
    );
}

#[test]
fn non_object_member_defeats_flattening() {
    let mut graph = TypeGraph::new();
    let obj = graph.anon_object(vec![PropertyDescriptor::new("x", TypeId::NUMBER)]);
    let arr = graph.array(TypeId::STRING);
    let t = graph.intersection(vec![obj, arr]);

    let mut walker = Walker::new(&graph);
    let meta = walker.walk(t);

    let MetaKind::Intersection { members } = &meta.kind else {
        panic!("expected an intersection to survive, got {:?}", meta.kind);
    };
    assert_eq!(members.len(), 2);
    assert!(members[0].is_object());
    assert!(members[1].is_array());
}

#[test]
fn single_member_with_phantom_collapses_to_the_member() {
    let mut graph = TypeGraph::new();
    let unique = graph.literal_bool(true);
    let phantom = graph.anon_object(vec![PropertyDescriptor::new(
        "__tsgonest_uniqueItems",
        unique,
    )]);
    let named = graph.named_object("Tags", vec![PropertyDescriptor::new("v", TypeId::STRING)]);
    let t = graph.intersection(vec![named, phantom]);

    let mut walker = Walker::new(&graph);
    let meta = walker.walk(t);

    // named object & phantom is not branded; the named member survives
    // as a ref with the phantom constraints attached at the use site
    assert_eq!(meta.ref_name(), Some("Tags"));
    assert_eq!(meta.constraints.as_ref().unwrap().unique_items, Some(true));
    assert!(walker.registry().contains("Tags"));
}

#[test]
fn phantom_constraints_are_dropped_below_the_top_level() {
    let mut graph = TypeGraph::new();
    let unique = graph.literal_bool(true);
    let phantom = graph.anon_object(vec![PropertyDescriptor::new(
        "__tsgonest_uniqueItems",
        unique,
    )]);
    let left = graph.anon_object(vec![PropertyDescriptor::new("l", TypeId::NUMBER)]);
    let right = graph.anon_object(vec![PropertyDescriptor::new("r", TypeId::STRING)]);
    let inner = graph.intersection(vec![left, right, phantom]);
    let holder = graph.named_object("Holder3", vec![PropertyDescriptor::new("inner", inner)]);

    let mut walker = Walker::new(&graph);
    walker.walk_named("Holder3", holder);
    let output = walker.finish();

    let MetaKind::Object { properties, .. } = &output.registry.get("Holder3").unwrap().kind
    else {
        panic!("Holder3 must be an object schema");
    };
    let inner_meta = &properties[0].ty;
    assert!(inner_meta.is_object());
    assert!(
        inner_meta.constraints.is_none(),
        "phantom members are ignored when the intersection is nested"
    );
}

#[test]
fn top_level_intersection_keeps_phantom_constraints() {
    let mut graph = TypeGraph::new();
    let unique = graph.literal_bool(true);
    let phantom = graph.anon_object(vec![PropertyDescriptor::new(
        "__tsgonest_uniqueItems",
        unique,
    )]);
    let left = graph.anon_object(vec![PropertyDescriptor::new("l", TypeId::NUMBER)]);
    let right = graph.anon_object(vec![PropertyDescriptor::new("r", TypeId::STRING)]);
    let t = graph.intersection(vec![left, right, phantom]);

    let mut walker = Walker::new(&graph);
    let meta = walker.walk(t);

    assert!(meta.is_object());
    assert_eq!(meta.constraints.as_ref().unwrap().unique_items, Some(true));
}
