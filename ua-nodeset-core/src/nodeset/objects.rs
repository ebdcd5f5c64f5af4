use super::{ids, rf};
use crate::loader::{ClassSpec, NodeSpec};

/// Folder hierarchy, modelling rules, the server object and the program states.
pub static OBJECTS: &[NodeSpec] = &[
    NodeSpec {
        node_id: "ns=0;i=78",
        browse_name: "0:Mandatory",
        display_name: "Mandatory",
        description: Some("Specifies that an instance with the attributes and references of the instance declaration must appear when a type is instantiated."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=77", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=112", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=111", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2392", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2393", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2394", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2395", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2400", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2402", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2404", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2406", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2408", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2410", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2412", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2414", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2416", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2418", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2420", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2422", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2424", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2426", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2427", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2428", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2429", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2430", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=11490", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=11491", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=12543", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=80",
        browse_name: "0:Optional",
        display_name: "Optional",
        description: Some("Specifies that an instance with the attributes and references of the instance declaration may appear when a type is instantiated."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=77", true),
            rf(ids::HAS_PROPERTY, "svr=0;i=113", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2396", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2397", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=2398", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=11489", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=12546", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=12548", false),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=12550", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=84",
        browse_name: "0:Root",
        display_name: "Root",
        description: Some("The root of the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
            rf(ids::ORGANIZES, "svr=0;i=85", true),
            rf(ids::ORGANIZES, "svr=0;i=86", true),
            rf(ids::ORGANIZES, "svr=0;i=87", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=85",
        browse_name: "0:Objects",
        display_name: "Objects",
        description: Some("The browse entry point when looking for objects in the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=84", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
            rf(ids::ORGANIZES, "svr=0;i=2253", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=86",
        browse_name: "0:Types",
        display_name: "Types",
        description: Some("The browse entry point when looking for types in the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=84", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
            rf(ids::ORGANIZES, "svr=0;i=88", true),
            rf(ids::ORGANIZES, "svr=0;i=89", true),
            rf(ids::ORGANIZES, "svr=0;i=90", true),
            rf(ids::ORGANIZES, "svr=0;i=91", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=87",
        browse_name: "0:Views",
        display_name: "Views",
        description: Some("The browse entry point when looking for views in the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=84", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=88",
        browse_name: "0:ObjectTypes",
        display_name: "ObjectTypes",
        description: Some("The browse entry point when looking for object types in the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=86", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
            rf(ids::ORGANIZES, "svr=0;i=58", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=89",
        browse_name: "0:VariableTypes",
        display_name: "VariableTypes",
        description: Some("The browse entry point when looking for variable types in the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=86", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
            rf(ids::ORGANIZES, "svr=0;i=62", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=90",
        browse_name: "0:DataTypes",
        display_name: "DataTypes",
        description: Some("The browse entry point when looking for data types in the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=86", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
            rf(ids::ORGANIZES, "svr=0;i=24", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=91",
        browse_name: "0:ReferenceTypes",
        display_name: "ReferenceTypes",
        description: Some("The browse entry point when looking for reference types in the server address space."),
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=86", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=61", true),
            rf(ids::ORGANIZES, "svr=0;i=31", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2253",
        browse_name: "0:Server",
        display_name: "Server",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 1 },
        references: &[
            rf(ids::ORGANIZES, "svr=0;i=85", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2004", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2400",
        browse_name: "0:Ready",
        display_name: "Ready",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2307", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2410", false),
            rf(ids::FROM_STATE, "svr=0;i=2424", false),
            rf(ids::TO_STATE, "svr=0;i=2408", false),
            rf(ids::TO_STATE, "svr=0;i=2414", false),
            rf(ids::TO_STATE, "svr=0;i=2422", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2402",
        browse_name: "0:Running",
        display_name: "Running",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2307", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2412", false),
            rf(ids::FROM_STATE, "svr=0;i=2414", false),
            rf(ids::FROM_STATE, "svr=0;i=2416", false),
            rf(ids::TO_STATE, "svr=0;i=2410", false),
            rf(ids::TO_STATE, "svr=0;i=2418", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2404",
        browse_name: "0:Suspended",
        display_name: "Suspended",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2307", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2418", false),
            rf(ids::FROM_STATE, "svr=0;i=2420", false),
            rf(ids::FROM_STATE, "svr=0;i=2422", false),
            rf(ids::TO_STATE, "svr=0;i=2416", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2406",
        browse_name: "0:Halted",
        display_name: "Halted",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2307", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2408", false),
            rf(ids::TO_STATE, "svr=0;i=2412", false),
            rf(ids::TO_STATE, "svr=0;i=2420", false),
            rf(ids::TO_STATE, "svr=0;i=2424", false),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2408",
        browse_name: "0:HaltedToReady",
        display_name: "HaltedToReady",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2406", true),
            rf(ids::TO_STATE, "svr=0;i=2400", true),
            rf(ids::HAS_CAUSE, "svr=0;i=2430", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2410",
        browse_name: "0:ReadyToRunning",
        display_name: "ReadyToRunning",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2400", true),
            rf(ids::TO_STATE, "svr=0;i=2402", true),
            rf(ids::HAS_CAUSE, "svr=0;i=2426", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2412",
        browse_name: "0:RunningToHalted",
        display_name: "RunningToHalted",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2402", true),
            rf(ids::TO_STATE, "svr=0;i=2406", true),
            rf(ids::HAS_CAUSE, "svr=0;i=2429", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2414",
        browse_name: "0:RunningToReady",
        display_name: "RunningToReady",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2402", true),
            rf(ids::TO_STATE, "svr=0;i=2400", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2416",
        browse_name: "0:RunningToSuspended",
        display_name: "RunningToSuspended",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2402", true),
            rf(ids::TO_STATE, "svr=0;i=2404", true),
            rf(ids::HAS_CAUSE, "svr=0;i=2427", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2418",
        browse_name: "0:SuspendedToRunning",
        display_name: "SuspendedToRunning",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2404", true),
            rf(ids::TO_STATE, "svr=0;i=2402", true),
            rf(ids::HAS_CAUSE, "svr=0;i=2428", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2420",
        browse_name: "0:SuspendedToHalted",
        display_name: "SuspendedToHalted",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2404", true),
            rf(ids::TO_STATE, "svr=0;i=2406", true),
            rf(ids::HAS_CAUSE, "svr=0;i=2429", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2422",
        browse_name: "0:SuspendedToReady",
        display_name: "SuspendedToReady",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2404", true),
            rf(ids::TO_STATE, "svr=0;i=2400", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
    NodeSpec {
        node_id: "ns=0;i=2424",
        browse_name: "0:ReadyToHalted",
        display_name: "ReadyToHalted",
        description: None,
        write_mask: 0,
        user_write_mask: 0,
        class: ClassSpec::Object { event_notifier: 0 },
        references: &[
            rf(ids::HAS_COMPONENT, "svr=0;i=2391", false),
            rf(ids::HAS_TYPE_DEFINITION, "svr=0;i=2310", true),
            rf(ids::HAS_MODELLING_RULE, "svr=0;i=78", true),
            rf(ids::FROM_STATE, "svr=0;i=2400", true),
            rf(ids::TO_STATE, "svr=0;i=2406", true),
            rf(ids::HAS_CAUSE, "svr=0;i=2429", true),
            rf(ids::HAS_EFFECT, "svr=0;i=2378", true),
        ],
    },
];
