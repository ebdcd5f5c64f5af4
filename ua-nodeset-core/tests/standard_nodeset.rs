mod common;

use common::{init_tracing, nid};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use ua_nodeset_core::{
    audit, nodeset, AddressSpace, LoaderOptions, ManagerConfig, Node, NodeClass, NodeContext,
    NodeManager, NodeSetLoader, NodeSpec, Reference, ReferenceTypeNode, VariableNode,
};
use ua_nodeset_types::{ExpandedNodeId, QualifiedName, Variant};

fn reference(source: u32, reference_type: u32, target: u32, forward: bool) -> Reference {
    Reference::new(
        nid(source),
        nid(reference_type),
        ExpandedNodeId::from(nid(target)),
        forward,
    )
}

fn reference_type(space: &AddressSpace, id: u32) -> ReferenceTypeNode {
    match space.get(&nid(id)) {
        Some(Node::ReferenceType(node)) => node,
        other => panic!("expected reference type under i={id}, got {other:?}"),
    }
}

fn variable(space: &AddressSpace, id: u32) -> VariableNode {
    match space.get(&nid(id)) {
        Some(Node::Variable(node)) => node,
        other => panic!("expected variable under i={id}, got {other:?}"),
    }
}

#[test]
fn load_reports_the_expected_totals() {
    init_tracing();
    let space = AddressSpace::load().unwrap();
    let summary = space.summary();
    assert_eq!(summary.nodes_loaded, 103);
    assert_eq!(summary.references_added, 416);
    assert_eq!(summary.duplicates_absorbed, 17);
    assert_eq!(space.manager().len(), 103);
    assert_eq!(space.manager().reference_count(), 416);
}

#[test]
fn class_counts_match_the_published_model() {
    init_tracing();
    let space = AddressSpace::load().unwrap();
    let counts = space.manager().class_counts();
    assert_eq!(counts.get(&NodeClass::Object), Some(&24));
    assert_eq!(counts.get(&NodeClass::Variable), Some(&12));
    assert_eq!(counts.get(&NodeClass::Method), Some(&10));
    assert_eq!(counts.get(&NodeClass::ObjectType), Some(&14));
    assert_eq!(counts.get(&NodeClass::VariableType), Some(&3));
    assert_eq!(counts.get(&NodeClass::ReferenceType), Some(&27));
    assert_eq!(counts.get(&NodeClass::DataType), Some(&13));
    assert_eq!(counts.get(&NodeClass::View), None);
}

#[test]
fn get_monitored_items_is_a_component_of_server_type() {
    init_tracing();
    let space = AddressSpace::load().unwrap();
    let node = space.get(&nid(11489)).unwrap();
    assert_eq!(node.node_class(), NodeClass::Method);
    assert_eq!(
        node.browse_name(),
        &QualifiedName::new(0, "GetMonitoredItems")
    );
    assert_eq!(node.display_name().text(), "GetMonitoredItems");
    assert!(node
        .references()
        .contains(&reference(11489, 47, 2004, false)));
}

#[test]
fn reset_method_ends_with_four_distinct_references() {
    init_tracing();
    let space = AddressSpace::load().unwrap();
    let node = space.get(&nid(2430)).unwrap();
    let stored: HashSet<Reference> = node.references().iter().cloned().collect();
    let expected: HashSet<Reference> = [
        reference(2430, 47, 2391, false),
        reference(2430, 53, 2408, false),
        reference(2430, 37, 78, true),
        reference(2430, 3065, 2378, true),
    ]
    .into_iter()
    .collect();
    assert_eq!(stored.len(), node.references().len(), "stored rows repeat");
    assert_eq!(stored, expected);
}

#[test]
fn open_with_masks_duplicate_row_is_absorbed() {
    init_tracing();
    let space = AddressSpace::load().unwrap();
    let node = space.get(&nid(12543)).unwrap();
    let component_of = reference(12543, 47, 12522, false);
    let occurrences = node
        .references()
        .iter()
        .filter(|stored| **stored == component_of)
        .count();
    assert_eq!(occurrences, 1);
    assert_eq!(
        node.references(),
        &[component_of, reference(12543, 37, 78, true)]
    );
}

#[test]
fn taxonomy_spot_checks() {
    init_tracing();
    let space = AddressSpace::load().unwrap();

    let references = reference_type(&space, 31);
    assert_eq!(references.base.browse_name(), &QualifiedName::new(0, "References"));
    assert!(references.is_abstract);
    assert!(references.symmetric);
    assert!(references.inverse_name.is_null());

    let hierarchical = reference_type(&space, 33);
    assert!(hierarchical.is_abstract);
    assert!(!hierarchical.symmetric);
    assert_eq!(hierarchical.inverse_name.text(), "HierarchicalReferences");

    for (id, name, inverse) in [
        (35, "Organizes", "OrganizedBy"),
        (40, "HasTypeDefinition", "TypeDefinitionOf"),
        (45, "HasSubtype", "HasSupertype"),
        (46, "HasProperty", "PropertyOf"),
        (47, "HasComponent", "ComponentOf"),
    ] {
        let node = reference_type(&space, id);
        assert_eq!(node.base.browse_name(), &QualifiedName::new(0, name));
        assert!(!node.is_abstract, "{name} is concrete");
        assert!(!node.symmetric, "{name} is directed");
        assert_eq!(node.inverse_name.text(), inverse);
    }
}

#[test]
fn naming_rule_values_distinguish_mandatory_and_optional() {
    init_tracing();
    let space = AddressSpace::load().unwrap();
    for (id, expected) in [(111, 1), (112, 1), (113, 2)] {
        let node = variable(&space, id);
        assert_eq!(node.base.browse_name(), &QualifiedName::new(0, "NamingRule"));
        assert_eq!(node.value.value, Variant::Int32(expected));
        assert_eq!(node.data_type, nid(120));
        assert_eq!(node.value_rank, -1);
    }
}

#[test]
fn server_object_spot_checks() {
    init_tracing();
    let space = AddressSpace::load().unwrap();
    let server = match space.get(&nid(2253)) {
        Some(Node::Object(node)) => node,
        other => panic!("expected the server object, got {other:?}"),
    };
    assert_eq!(server.event_notifier, 1);
    assert!(server.base.references().contains(&reference(2253, 35, 85, false)));
    assert!(server.base.references().contains(&reference(2253, 40, 2004, true)));

    let root = space.get(&nid(84)).unwrap();
    for folder in [85, 86, 87] {
        assert!(root.references().contains(&reference(84, 35, folder, true)));
    }
}

#[test]
fn mirror_audit_passes_on_the_standard_table() {
    init_tracing();
    let space = AddressSpace::load_with(
        ManagerConfig::default(),
        LoaderOptions {
            verify_mirrors: true,
        },
    )
    .unwrap();
    assert!(audit::verify_mirrors(space.manager()).is_ok());
}

fn snapshot(manager: &NodeManager) -> BTreeMap<String, BTreeSet<String>> {
    let mut nodes = BTreeMap::new();
    for node_id in manager.node_ids() {
        let node = manager.get(&node_id).unwrap();
        let references = node
            .references()
            .iter()
            .map(|stored| stored.to_string())
            .collect();
        nodes.insert(node_id.to_string(), references);
    }
    nodes
}

fn load_in_order(descriptors: Vec<&NodeSpec>) -> NodeManager {
    let mut loader = NodeSetLoader::new(NodeContext::standard(), NodeManager::default());
    let summary = loader.load(descriptors).unwrap();
    assert_eq!(summary.nodes_loaded, 103);
    assert_eq!(summary.references_added, 416);
    assert_eq!(summary.duplicates_absorbed, 17);
    loader.finish().unwrap()
}

#[test]
fn descriptor_order_does_not_change_the_result() {
    init_tracing();
    let baseline = load_in_order(nodeset::standard_nodes().collect());

    let mut reversed: Vec<&NodeSpec> = nodeset::standard_nodes().collect();
    reversed.reverse();
    let mut rotated: Vec<&NodeSpec> = nodeset::standard_nodes().collect();
    rotated.rotate_left(41);

    let expected = snapshot(&baseline);
    assert_eq!(snapshot(&load_in_order(reversed)), expected);
    assert_eq!(snapshot(&load_in_order(rotated)), expected);
}
