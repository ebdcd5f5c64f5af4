use super::{ids, rf};
use crate::loader::{ClassSpec, NodeSpec};

/// The 27-entry reference type taxonomy.
pub static REFERENCE_TYPES: &[NodeSpec] = &[
    NodeSpec {
        node_id: "ns=0;i=31",
        browse_name: "0:References",
        display_name: "References",
        description: Some("The abstract base type for all references."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: true,
            symmetric: true,
            inverse_name: None,
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=32", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=33", true),
            rf(ids::ORGANIZES, "svr=0;i=91", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=32",
        browse_name: "0:NonHierarchicalReferences",
        display_name: "NonHierarchicalReferences",
        description: Some("The abstract base type for all non-hierarchical references."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: true,
            symmetric: false,
            inverse_name: Some("NonHierarchicalReferences"),
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=31", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=37", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=38", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=39", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=40", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=41", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=3065", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=51", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=52", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=53", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=54", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=117", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=9004", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=9005", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=9006", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=33",
        browse_name: "0:HierarchicalReferences",
        display_name: "HierarchicalReferences",
        description: Some("The abstract base type for all hierarchical references."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: true,
            symmetric: false,
            inverse_name: Some("HierarchicalReferences"),
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=31", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=34", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=35", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=36", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=34",
        browse_name: "0:HasChild",
        display_name: "HasChild",
        description: Some("The abstract base type for all non-looping hierarchical references."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("ChildOf"),
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=33", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=44", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=45", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=35",
        browse_name: "0:Organizes",
        display_name: "Organizes",
        description: Some("The type for hierarchical references that are used to organize nodes."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("OrganizedBy"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=33", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=36",
        browse_name: "0:HasEventSource",
        display_name: "HasEventSource",
        description: Some("The type for non-looping hierarchical references that are used to organize event sources."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("EventSourceOf"),
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=33", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=48", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=37",
        browse_name: "0:HasModellingRule",
        display_name: "HasModellingRule",
        description: Some("The type for references from instance declarations to modelling rule nodes."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("ModellingRuleOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=38",
        browse_name: "0:HasEncoding",
        display_name: "HasEncoding",
        description: Some("The type for references from data type nodes to to data type encoding nodes."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("EncodingOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=39",
        browse_name: "0:HasDescription",
        display_name: "HasDescription",
        description: Some("The type for references from data type encoding nodes to data type description nodes."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("DescriptionOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=40",
        browse_name: "0:HasTypeDefinition",
        display_name: "HasTypeDefinition",
        description: Some("The type for references from a instance node its type defintion node."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("TypeDefinitionOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=41",
        browse_name: "0:GeneratesEvent",
        display_name: "GeneratesEvent",
        description: Some("The type for references from a node to an event type that is raised by node."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("GeneratesEvent"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=44",
        browse_name: "0:Aggregates",
        display_name: "Aggregates",
        description: Some("The type for non-looping hierarchical references that are used to aggregate nodes into complex types."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("AggregatedBy"),
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=34", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=46", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=47", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=56", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=45",
        browse_name: "0:HasSubtype",
        display_name: "HasSubtype",
        description: Some("The type for non-looping hierarchical references that are used to define sub types."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("HasSupertype"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=34", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=46",
        browse_name: "0:HasProperty",
        display_name: "HasProperty",
        description: Some("The type for non-looping hierarchical reference from a node to its property."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("PropertyOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=44", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=47",
        browse_name: "0:HasComponent",
        display_name: "HasComponent",
        description: Some("The type for non-looping hierarchical reference from a node to its component."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("ComponentOf"),
        },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=44", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=49", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=48",
        browse_name: "0:HasNotifier",
        display_name: "HasNotifier",
        description: Some("The type for non-looping hierarchical references that are used to indicate how events propagate from node to node."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("NotifierOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=36", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=49",
        browse_name: "0:HasOrderedComponent",
        display_name: "HasOrderedComponent",
        description: Some("The type for non-looping hierarchical reference from a node to its component when the order of references matters."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("OrderedComponentOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=47", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=51",
        browse_name: "0:FromState",
        display_name: "FromState",
        description: Some("The type for a reference to the state before a transition."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("ToTransition"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=52",
        browse_name: "0:ToState",
        display_name: "ToState",
        description: Some("The type for a reference to the state after a transition."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("FromTransition"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=53",
        browse_name: "0:HasCause",
        display_name: "HasCause",
        description: Some("The type for a reference to a method that can cause a transition to occur."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("MayBeCausedBy"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=54",
        browse_name: "0:HasEffect",
        display_name: "HasEffect",
        description: Some("The type for a reference to an event that may be raised when a transition occurs."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("MayBeEffectedBy"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=56",
        browse_name: "0:HasHistoricalConfiguration",
        display_name: "HasHistoricalConfiguration",
        description: Some("The type for a reference to the historical configuration for a data variable."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("HistoricalConfigurationOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=44", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=117",
        browse_name: "0:HasSubStateMachine",
        display_name: "HasSubStateMachine",
        description: Some("The type for a reference to a substate for a state."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("SubStateMachineOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=3065",
        browse_name: "0:AlwaysGeneratesEvent",
        display_name: "AlwaysGeneratesEvent",
        description: Some("The type for references from a node to an event type that is always raised by node."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("AlwaysGeneratesEvent"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=9004",
        browse_name: "0:HasTrueSubState",
        display_name: "HasTrueSubState",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("IsTrueSubStateOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=9005",
        browse_name: "0:HasFalseSubState",
        display_name: "HasFalseSubState",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("IsFalseSubStateOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
    NodeSpec {
        node_id: "ns=0;i=9006",
        browse_name: "0:HasCondition",
        display_name: "HasCondition",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ReferenceType {
            is_abstract: false,
            symmetric: false,
            inverse_name: Some("IsConditionOf"),
        },
        references: &[rf(ids::HAS_SUBTYPE, "svr=0;i=32", false)],
    },
];
