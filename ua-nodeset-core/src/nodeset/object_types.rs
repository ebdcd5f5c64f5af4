use super::{ids, rf};
use crate::loader::{ClassSpec, NodeSpec};

/// Object types, from the base hierarchy to the program and trust list families.
pub static OBJECT_TYPES: &[NodeSpec] = &[
    NodeSpec {
        node_id: "ns=0;i=58",
        browse_name: "0:BaseObjectType",
        display_name: "BaseObjectType",
        description: Some("The base type for all object nodes."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=61", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=77", true),
            rf(ids::ORGANIZES, "svr=0;i=88", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2004", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=11575", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2041", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2299", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2307", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2310", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=61",
        browse_name: "0:FolderType",
        display_name: "FolderType",
        description: Some("The type for objects that organize other nodes."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=84", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=85", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=86", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=87", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=88", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=89", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=90", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=91", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=77",
        browse_name: "0:ModellingRuleType",
        display_name: "ModellingRuleType",
        description: Some("The type for an object that describes how an instance declaration is used when a type is instantiated."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=111", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_PROPERTY, "svr=0;i=111", true),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=78", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=80", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2004",
        browse_name: "0:ServerType",
        display_name: "ServerType",
        description: Some("Specifies the current status and capabilities of the server."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=11489", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2253", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2041",
        browse_name: "0:BaseEventType",
        display_name: "BaseEventType",
        description: Some("The base type for all events."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2311", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2299",
        browse_name: "0:StateMachineType",
        display_name: "StateMachineType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2771", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2307",
        browse_name: "0:StateType",
        display_name: "StateType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2400", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2402", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2404", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2406", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2310",
        browse_name: "0:TransitionType",
        display_name: "TransitionType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2408", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2410", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2412", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2414", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2416", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2418", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2420", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2422", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2424", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2311",
        browse_name: "0:TransitionEventType",
        display_name: "TransitionEventType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=2041", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2378",
        browse_name: "0:ProgramTransitionEventType",
        display_name: "ProgramTransitionEventType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_EFFECT, "svr=0;i=2408", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2410", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2412", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2414", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2416", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2418", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2420", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2422", false),
            rf(ids::HAS_EFFECT, "svr=0;i=2424", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2311", false),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2426", false),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2427", false),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2428", false),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2429", false),
            rf(ids::ALWAYS_GENERATES_EVENT, "svr=0;i=2430", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2391",
        browse_name: "0:ProgramStateMachineType",
        display_name: "ProgramStateMachineType",
        description: Some("A state machine for a program."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_PROPERTY, "svr=0;i=2392", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=2393", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=2394", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=2395", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=2396", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=2397", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=2398", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2400", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2402", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2404", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2406", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2408", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2410", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2412", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2414", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2416", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2418", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2420", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2422", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2424", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2426", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2427", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2428", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2429", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=2430", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2771", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2771",
        browse_name: "0:FiniteStateMachineType",
        display_name: "FiniteStateMachineType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: true },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=2299", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=2391", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=11575",
        browse_name: "0:FileType",
        display_name: "FileType",
        description: Some("An object that represents a file that can be accessed via the server."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_SUBTYPE, "svr=0;i=58", false),
            rf(ids::HAS_SUBTYPE, "svr=0;i=12522", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=12522",
        browse_name: "0:TrustListType",
        display_name: "TrustListType",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::ObjectType { is_abstract: false },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=12543", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=12546", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=12548", true),
            rf(ids::HAS_COMPONENT, "svr=0;i=12550", true),
            rf(ids::HAS_SUBTYPE, "svr=0;i=11575", false),
        ],
    },
];
